//! Handlers grouped by method family.
//!
//! Each handler decodes the positional params into wire types, resolves block tags and
//! re-encodes the arguments canonically before fanning the call out.

pub mod blocks;
pub mod chain;
pub mod logs;
pub mod state;
pub mod transactions;

pub use blocks::BlocksHandler;
pub use chain::ChainHandler;
pub use logs::LogsHandler;
pub use state::StateHandler;
pub use transactions::TransactionsHandler;
