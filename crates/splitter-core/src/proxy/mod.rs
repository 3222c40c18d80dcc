//! JSON-RPC method dispatch.
//!
//! # Request Processing Flow
//!
//! ```text
//! Client Request
//!       │
//!       ▼
//! ┌─────────────┐
//! │  Envelope   │ ─── Invalid ──► invalid request (-32600)
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │ Method table│ ─── Unknown ──► method not found (-32601)
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │   Params    │ ─── Malformed ──► invalid params (-32602)
//! └──────┬──────┘
//!        ▼
//! ┌─────────────────┐
//! │ Block tag?      │ ── latest/pending ──► nested eth_blockNumber fan-out
//! └──────┬──────────┘ ── earliest ──► rejected
//!        ▼
//! ┌─────────────────┐
//! │ Splitter fan-out│ ─── resolver policy from the method table
//! └─────────────────┘
//! ```
//!
//! # Handler Selection
//!
//! | Handler | Methods |
//! |---------|---------|
//! | `BlocksHandler` | `eth_blockNumber`, `eth_getBlockByHash`, `eth_getBlockByNumber` |
//! | `TransactionsHandler` | `eth_getTransactionByHash`, `eth_getTransactionCount`, `eth_getTransactionReceipt`, `eth_sendRawTransaction` |
//! | `StateHandler` | `eth_getBalance`, `eth_getCode`, `eth_getStorageAt`, `eth_call`, `eth_estimateGas` |
//! | `LogsHandler` | `eth_getLogs` |
//! | `ChainHandler` | `eth_gasPrice`, `eth_maxPriorityFeePerGas`, `eth_chainId`, `eth_feeHistory`, `net_version` |

pub mod engine;
pub mod errors;
pub mod handlers;
pub mod methods;
pub mod params;

#[cfg(test)]
mod tests;

pub use engine::{ProxyEngine, RequestContext, SharedContext};
pub use errors::ProxyError;
pub use methods::Method;
pub use params::Params;
