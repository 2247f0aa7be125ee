//! # Shared Wire Types Library
//!
//! This library defines the contract between the mint core (`lib-mint`) and the
//! browser frontend (`mint-web`). Everything that crosses the EIP-1193 boundary
//! as JSON lives here.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for JSON-RPC communication
//!   - **[`dto::rpc`]**: request arguments, call/transaction requests, receipts
//!   - **[`dto::chain`]**: descriptor of the target network
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!
//! ## Wire Format
//!
//! Ethereum JSON-RPC uses **camelCase** field names and `0x`-prefixed hex strings
//! for every integer ("quantities"). The DTOs rename fields accordingly and carry
//! values as `alloy-primitives` types (`U256`, `Address`, `Bytes`), which
//! serialize to exactly that hex form.
//!
//! ## Usage
//!
//! ```rust
//! use alloy_primitives::{U256, U64};
//! use shared::dto::rpc::TransactionReceipt;
//!
//! let receipt: TransactionReceipt = serde_json::from_str(
//!     r#"{"transactionHash":"0x000000000000000000000000000000000000000000000000000000000000feed","status":"0x1","gasUsed":"0x5208"}"#,
//! ).unwrap();
//!
//! assert_eq!(receipt.status, Some(U64::from(1)));
//! assert_eq!(receipt.gas_used, U256::from(21_000));
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
