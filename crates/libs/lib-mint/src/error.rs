//! # Error Types
//!
//! [`DappError`] covers every failure the mint flow can hit. Operations on
//! [`crate::MintDapp`] catch these locally and turn them into log lines or
//! alerts; nothing propagates far enough to break the page.
//!
//! ## Error Categories
//!
//! - **Connection**: no injected wallet, or the user rejected the connection
//! - **WrongNetwork**: the wallet is on a chain other than the configured one
//! - **Call**: the read-only `tokenIds()` call failed
//! - **Mint**: submitting or confirming `mint()` failed
//! - **Rpc** / **Decoding** / **Abi**: transport and encoding failures underneath
//! - **Config**: invalid build-time configuration
//!
//! ```rust
//! use lib_mint::DappError;
//!
//! let err = DappError::Connection("MetaMask not installed".to_string());
//! assert_eq!(err.to_string(), "Connection error: MetaMask not installed");
//! ```

use shared::RpcErrorObject;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DappError>;

/// EIP-1193 code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DappError {
    /// Wallet missing, locked, or connection request rejected.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Connected network does not match the required chain.
    #[error("Wrong network: connected to chain {actual}, expected {expected} ({name})")]
    WrongNetwork {
        expected: u64,
        actual: u64,
        name: &'static str,
    },

    /// Read-only contract call failed.
    #[error("Contract call error: {0}")]
    Call(String),

    /// Mint submission or confirmation failed.
    #[error("Mint error: {0}")]
    Mint(String),

    /// Provider returned a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Provider response did not have the expected shape.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Calldata or return data could not be encoded/decoded.
    #[error("ABI error: {0}")]
    Abi(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DappError {
    /// True when the wallet reported that the user dismissed the prompt.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, DappError::Rpc { code, .. } if *code == USER_REJECTED_CODE)
    }
}

impl From<RpcErrorObject> for DappError {
    fn from(err: RpcErrorObject) -> Self {
        DappError::Rpc {
            code: err.code,
            message: err.message,
        }
    }
}

impl From<serde_json::Error> for DappError {
    fn from(err: serde_json::Error) -> Self {
        DappError::Decoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_conversion() {
        let err: DappError = RpcErrorObject {
            code: 4001,
            message: "User rejected the request.".to_string(),
            data: None,
        }
        .into();

        assert!(err.is_user_rejection());
        assert_eq!(err.to_string(), "RPC error 4001: User rejected the request.");
    }

    #[test]
    fn test_wrong_network_display() {
        let err = DappError::WrongNetwork {
            expected: 80001,
            actual: 1,
            name: "Mumbai",
        };
        assert_eq!(
            err.to_string(),
            "Wrong network: connected to chain 1, expected 80001 (Mumbai)"
        );
        assert!(!err.is_user_rejection());
    }
}
