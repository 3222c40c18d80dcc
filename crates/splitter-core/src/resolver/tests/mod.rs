
use crate::{upstream::UpstreamError, wire::Number};

use super::Outcome;

fn num(n: u64) -> Outcome<Number> {
    Ok(Number::from(n))
}

fn err<T>(message: &str) -> Outcome<T> {
    Err(UpstreamError::InvalidResponse(message.to_string()))
}
