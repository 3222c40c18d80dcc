//! Hex helpers shared by the wire types.

use super::WireError;

/// Strips an optional `0x` / `0X` prefix.
#[inline]
#[must_use]
pub fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// Decodes hex data, with or without prefix.
///
/// Odd-length input is left padded with a single zero nibble, so `0x1` decodes to `[0x01]`.
///
/// # Errors
///
/// Returns [`WireError::InvalidHex`] when the input contains non-hex characters.
pub fn decode(s: &str) -> Result<Vec<u8>, WireError> {
    let digits = strip_prefix(s);
    let result = if digits.len() % 2 == 0 {
        ::hex::decode(digits)
    } else {
        ::hex::decode(format!("0{digits}"))
    };
    result.map_err(|e| WireError::InvalidHex(e.to_string()))
}

/// Decodes hex data into a fixed-size array.
///
/// # Errors
///
/// Returns [`WireError::InvalidLength`] when the decoded length differs from `N`.
pub fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], WireError> {
    let bytes = decode(s)?;
    <[u8; N]>::try_from(bytes.as_slice())
        .map_err(|_| WireError::InvalidLength { got: bytes.len(), want: N })
}

/// Encodes bytes as `0x` + lowercase hex.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    format!("0x{}", ::hex::encode(bytes))
}
