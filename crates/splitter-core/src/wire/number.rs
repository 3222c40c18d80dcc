use alloy_primitives::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use super::{hex, WireError};

/// An unsigned quantity, encoded as `0x` + lowercase hex with no leading zeros.
///
/// Decoding is case-insensitive and tolerates leading zeros, so `"0x01"`, `"0X1"` and
/// `"0x1"` all decode to the same value. A bare non-negative JSON integer is accepted as
/// well, since some clients send counts (e.g. `eth_feeHistory` block count) that way.
///
/// # Example
///
/// ```
/// use splitter_core::wire::Number;
///
/// let n: Number = "0x00Ff".parse().unwrap();
/// assert_eq!(n.to_string(), "0xff");
/// assert_eq!(Number::from(0u64).to_string(), "0x0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Number(U256);

impl Number {
    pub const ZERO: Self = Self(U256::ZERO);

    #[must_use]
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Returns the value as `u64` if it fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Number {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<Number> for U256 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = ::hex::encode(self.0.to_be_bytes::<32>());
        let digits = encoded.trim_start_matches('0');
        if digits.is_empty() {
            f.write_str("0x0")
        } else {
            write!(f, "0x{digits}")
        }
    }
}

impl FromStr for Number {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if hex::strip_prefix(s).is_empty() {
            return Err(WireError::EmptyHex);
        }
        let bytes = hex::decode(s)?;
        U256::try_from_be_slice(&bytes).map(Self).ok_or(WireError::Overflow)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct NumberVisitor;

impl de::Visitor<'_> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex encoded quantity")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Number::from(v))
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}
