use thiserror::Error;

/// Decode failures for wire values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("empty hex string")]
    EmptyHex,

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("hex string has length {got}, want {want}")]
    InvalidLength { got: usize, want: usize },

    #[error("number exceeds 256 bits")]
    Overflow,

    #[error("block number larger than int64")]
    BlockNumberTooLarge,

    #[error("invalid block tag: {0}")]
    InvalidBlockTag(String),
}
