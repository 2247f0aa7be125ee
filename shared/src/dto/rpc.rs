//! JSON-RPC payloads exchanged with an EIP-1193 provider.
//!
//! Integers, addresses and byte strings use the `alloy-primitives` types, whose
//! serde form is the `0x`-prefixed hex the JSON-RPC API expects.

use alloy_primitives::{Address, Bytes, TxHash, U256, U64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments of a single `provider.request(...)` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestArguments {
    pub method: String,
    pub params: Value,
}

impl RequestArguments {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// Error object returned by a provider when a request is rejected.
///
/// `4001` is the EIP-1193 "user rejected request" code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Read-only call (`eth_call`) against a contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallRequest {
    pub to: Address,
    pub data: Bytes,
}

/// Transaction submitted through `eth_estimateGas` / `eth_sendTransaction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
}

/// Receipt of a mined transaction (`eth_getTransactionReceipt`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<U64>,
    /// `1` for success, `0` for revert. Absent on pre-Byzantium chains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<U64>,
    pub gas_used: U256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, bytes};
    use serde_json::json;

    const TX_HASH: &str = "0x000000000000000000000000000000000000000000000000000000000000feed";

    #[test]
    fn test_transaction_request_wire_format() {
        let tx = TransactionRequest {
            from: address!("0x0000000000000000000000000000000000000011"),
            to: address!("0x0000000000000000000000000000000000000022"),
            value: U256::from(10_000_000_000_000_000u64),
            data: bytes!("0x1249c58b"),
            gas: None,
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            value,
            json!({
                "from": "0x0000000000000000000000000000000000000011",
                "to": "0x0000000000000000000000000000000000000022",
                "value": "0x2386f26fc10000",
                "data": "0x1249c58b"
            })
        );
    }

    #[test]
    fn test_receipt_without_status() {
        let receipt: TransactionReceipt = serde_json::from_value(json!({
            "transactionHash": TX_HASH,
            "blockNumber": null,
            "gasUsed": "0xc350"
        }))
        .unwrap();

        assert_eq!(receipt.status, None);
        assert_eq!(receipt.block_number, None);
        assert_eq!(receipt.gas_used, U256::from(50_000));
    }

    #[test]
    fn test_receipt_rejects_bad_quantity() {
        let result: Result<TransactionReceipt, _> = serde_json::from_value(json!({
            "transactionHash": TX_HASH,
            "status": "one",
            "gasUsed": "0x1"
        }));
        assert!(result.is_err());

        let short_hash: Result<TransactionReceipt, _> = serde_json::from_value(json!({
            "transactionHash": "0xfeed",
            "gasUsed": "0x1"
        }));
        assert!(short_hash.is_err());
    }

    #[test]
    fn test_rpc_error_object() {
        let err: RpcErrorObject = serde_json::from_value(json!({
            "code": 4001,
            "message": "User rejected the request."
        }))
        .unwrap();
        assert_eq!(err.code, 4001);
        assert!(err.data.is_none());
    }
}
