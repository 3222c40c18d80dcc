//! Ethereum JSON-RPC wire types.
//!
//! Every type here decodes from and encodes to the canonical hex-JSON form used by
//! `go-ethereum` compatible nodes, so a value resolved by the splitter is returned to the
//! client byte-for-byte as an upstream node would have sent it.
//!
//! # Primitives
//!
//! - [`Number`]: quantity, `0x` + lowercase hex without leading zeros
//! - [`BlockId`]: quantity or one of the `earliest` / `latest` / `pending` tags
//! - [`Bytes`]: arbitrary length data, `0x` + hex
//! - [`Address`], [`Hash`], [`Nonce`]: fixed length data with length validation
//! - [`Addresses`], [`Hashes`]: single value or array (log filter quirk)
//! - [`Json`]: raw JSON passed through untouched
//!
//! # Composites
//!
//! [`Block`], [`Transaction`], [`Receipt`], [`Log`], [`LogFilter`], [`FeeHistory`].
//!
//! # Comparison
//!
//! Resolvers group outcomes with [`WireValue::compare`]. Decoded values are compared
//! structurally, so `0x01` and `0x1` decode to equal numbers.

mod block;
mod block_id;
mod bytes;
mod errors;
mod fee_history;
mod filter;
pub(crate) mod hex;
mod json;
mod lists;
mod number;
mod receipt;
mod transaction;


pub use block::{Block, BlockWithHashes, BlockWithTransactions};
pub use block_id::{BlockId, BlockTag};
pub use bytes::{Address, Bytes, Hash, Nonce};
pub use errors::WireError;
pub use fee_history::FeeHistory;
pub use filter::LogFilter;
pub use json::Json;
pub use lists::{Addresses, Hashes};
pub use number::Number;
pub use receipt::{Log, Receipt};
pub use transaction::Transaction;

use serde::{de::DeserializeOwned, Serialize};

/// A value that can travel through the fan-out engine.
///
/// Each endpoint's raw JSON result is decoded into a fresh `Self`; resolvers then
/// group the decoded values with [`compare`](WireValue::compare).
pub trait WireValue: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Structural equality used to build agreement classes.
    fn compare(&self, other: &Self) -> bool;
}

impl<T> WireValue for T
where
    T: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    #[inline]
    fn compare(&self, other: &Self) -> bool {
        self == other
    }
}
