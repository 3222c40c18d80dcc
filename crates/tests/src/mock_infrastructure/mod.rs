//! Mock Ethereum nodes for integration tests.
//!
//! ## Usage
//!
//! ```ignore
//! use tests::mock_infrastructure::{splitter_for, RpcMockBuilder};
//!
//! let mut node = RpcMockBuilder::new().await;
//! node.mock_block_number(100);
//!
//! let splitter = splitter_for(&[&node]);
//! ```


pub use rpc_mock::{
    caller_for, splitter_for, BlockResponseBuilder, LogResponseBuilder, RpcMockBuilder,
};
