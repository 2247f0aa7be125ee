//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the wallet's EIP-1193 provider.
//!
//! ## Module Organization
//!
//! - [`rpc`] - JSON-RPC request arguments, call and transaction requests, receipts
//! - [`chain`] - Network descriptor for the chain the dApp requires
//!
//! ## Example JSON Communication
//!
//! ```text
//! ethereum.request({
//!   "method": "eth_call",
//!   "params": [{ "to": "0x5FbD...0aa3", "data": "0x714cff56" }, "latest"]
//! })
//! ```
//!
//! ```text
//! "0x0000000000000000000000000000000000000000000000000000000000000003"
//! ```

pub mod chain;
pub mod rpc;

pub use chain::*;
pub use rpc::*;
