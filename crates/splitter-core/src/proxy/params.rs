//! Positional parameter decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ProxyError;

/// Positional JSON-RPC parameters of one request.
///
/// A missing trailing parameter and an explicit `null` are treated alike.
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<Value>);

impl Params {
    /// Accepts an array, `null` or no params at all.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidParams`] for non-array params or more than `max`
    /// arguments.
    pub fn parse(raw: Option<Value>, max: usize) -> Result<Self, ProxyError> {
        let values = match raw {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(values)) => values,
            Some(_) => return Err(ProxyError::InvalidParams("non-array args".to_string())),
        };
        if values.len() > max {
            return Err(ProxyError::InvalidParams(format!(
                "too many arguments, want at most {max}"
            )));
        }
        Ok(Self(values))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidParams`] when the argument is absent or malformed.
    pub fn required<T: DeserializeOwned>(&self, index: usize) -> Result<T, ProxyError> {
        self.optional(index)?.ok_or_else(|| {
            ProxyError::InvalidParams(format!("missing value for required argument {index}"))
        })
    }

    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidParams`] when the argument is present but malformed.
    pub fn optional<T: DeserializeOwned>(&self, index: usize) -> Result<Option<T>, ProxyError> {
        match self.0.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value).map(Some).map_err(|e| {
                ProxyError::InvalidParams(format!("invalid argument {index}: {e}"))
            }),
        }
    }
}
