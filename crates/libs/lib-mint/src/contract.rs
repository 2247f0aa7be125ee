//! # NFT Contract Binding
//!
//! [`NftContract`] pairs the fixed contract address with a runner. Bound to a
//! [`Web3Provider`] it can read `tokenIds()`; bound to a [`Signer`] it can
//! also submit the payable `mint()`.

use alloy_primitives::{Address, U256, U64};
use shared::{CallRequest, TransactionReceipt, TransactionRequest};

use crate::abi;
use crate::error::{DappError, Result};
use crate::provider::{PendingTransaction, Signer, Web3Provider};
use crate::transport::Transport;

pub const TOKEN_IDS: &str = "tokenIds()";
pub const MINT: &str = "mint()";

#[derive(Debug, Clone)]
pub struct NftContract<R> {
    address: Address,
    runner: R,
}

impl<R> NftContract<R> {
    pub fn new(address: Address, runner: R) -> Self {
        Self { address, runner }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl<T: Transport> NftContract<Web3Provider<T>> {
    /// Number of tokens minted so far.
    pub async fn token_ids(&self) -> Result<U256> {
        let call = CallRequest {
            to: self.address,
            data: abi::encode_call(TOKEN_IDS),
        };

        let data = self
            .runner
            .call(&call)
            .await
            .map_err(|e| DappError::Call(format!("{}: {}", TOKEN_IDS, e)))?;
        abi::decode_uint(&data).map_err(|e| DappError::Call(format!("{}: {}", TOKEN_IDS, e)))
    }
}

impl<T: Transport> NftContract<Signer<T>> {
    /// Submit `mint()` paying `value` wei.
    pub async fn mint(&self, value: U256) -> Result<PendingTransaction<T>> {
        let tx = TransactionRequest {
            from: self.runner.address(),
            to: self.address,
            value,
            data: abi::encode_call(MINT),
            gas: None,
        };

        self.runner
            .send_transaction(tx)
            .await
            .map_err(|e| DappError::Mint(format!("{}: {}", MINT, e)))
    }
}

/// A mined mint together with the gas limit it was sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    pub receipt: TransactionReceipt,
    pub gas_limit: U256,
}

impl MintReceipt {
    /// Status 1 and not every unit of the gas limit consumed.
    ///
    /// The second half is a heuristic for transactions that ran out of gas;
    /// a mint that legitimately uses exactly its limit is reported as failed.
    pub fn succeeded(&self) -> bool {
        self.receipt.status == Some(U64::from(1)) && self.receipt.gas_used != self.gas_limit
    }
}
