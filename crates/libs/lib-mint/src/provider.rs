//! # Provider, Signer, Pending Transaction
//!
//! Typed JSON-RPC on top of a [`Transport`]:
//!
//! - [`Web3Provider`]: read-only access (`eth_chainId`, `eth_call`, `eth_accounts`)
//! - [`Signer`]: a provider bound to an account, able to submit transactions
//! - [`PendingTransaction`]: a submitted transaction awaiting its receipt

use alloy_primitives::{Address, Bytes, TxHash, U256, U64};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use shared::{truncate_address, CallRequest, RequestArguments, TransactionReceipt, TransactionRequest};

use crate::error::{DappError, Result};
use crate::transport::Transport;

/// Default wait between two `eth_getTransactionReceipt` polls.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1_000;

#[derive(Debug, Clone)]
pub struct Web3Provider<T> {
    transport: T,
    poll_interval_ms: u32,
}

impl<T: Transport> Web3Provider<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    pub fn with_poll_interval(mut self, millis: u32) -> Self {
        self.poll_interval_ms = millis;
        self
    }

    async fn request<R: DeserializeOwned>(&self, method: &str, params: Value) -> Result<R> {
        log::debug!("rpc -> {}", method);
        let result = self
            .transport
            .request(RequestArguments::new(method, params))
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Chain the wallet is currently connected to.
    pub async fn chain_id(&self) -> Result<u64> {
        let id: U64 = self.request("eth_chainId", json!([])).await?;
        Ok(id.to::<u64>())
    }

    /// Accounts the wallet has exposed to this origin.
    pub async fn accounts(&self) -> Result<Vec<Address>> {
        self.request("eth_accounts", json!([])).await
    }

    /// Execute a read-only call at the latest block and return the raw bytes.
    pub async fn call(&self, call: &CallRequest) -> Result<Bytes> {
        self.request("eth_call", json!([call, "latest"])).await
    }

    /// Derive a signer from the first exposed account.
    pub async fn get_signer(&self) -> Result<Signer<T>> {
        let address = self
            .accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DappError::Connection("wallet exposed no accounts".to_string()))?;

        log::debug!("signer account {}", truncate_address(&address.to_checksum(None)));
        Ok(Signer {
            provider: self.clone(),
            address,
        })
    }

    async fn receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>> {
        self.request("eth_getTransactionReceipt", json!([hash])).await
    }
}

/// A provider that can authorize transactions for `address`.
#[derive(Debug, Clone)]
pub struct Signer<T> {
    provider: Web3Provider<T>,
    address: Address,
}

impl<T: Transport> Signer<T> {
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn provider(&self) -> &Web3Provider<T> {
        &self.provider
    }

    /// Gas the node expects `tx` to consume.
    pub async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<U256> {
        self.provider.request("eth_estimateGas", json!([tx])).await
    }

    /// Submit `tx` through the wallet. A missing gas limit is filled from
    /// [`Signer::estimate_gas`] and recorded on the pending transaction.
    pub async fn send_transaction(&self, mut tx: TransactionRequest) -> Result<PendingTransaction<T>> {
        tx.from = self.address;
        let gas_limit = match tx.gas {
            Some(gas) => gas,
            None => self.estimate_gas(&tx).await?,
        };
        tx.gas = Some(gas_limit);

        let hash: TxHash = self
            .provider
            .request("eth_sendTransaction", json!([tx]))
            .await?;
        log::info!("submitted transaction {} (gas limit {})", hash, gas_limit);

        Ok(PendingTransaction {
            hash,
            gas_limit,
            provider: self.provider.clone(),
        })
    }
}

/// A broadcast transaction that has not been observed in a block yet.
#[derive(Debug, Clone)]
pub struct PendingTransaction<T> {
    hash: TxHash,
    gas_limit: U256,
    provider: Web3Provider<T>,
}

impl<T: Transport> PendingTransaction<T> {
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// Gas limit the transaction was submitted with.
    pub fn gas_limit(&self) -> U256 {
        self.gas_limit
    }

    /// Poll until the receipt is available. There is no timeout.
    pub async fn wait(&self) -> Result<TransactionReceipt> {
        loop {
            if let Some(receipt) = self.provider.receipt(self.hash).await? {
                return Ok(receipt);
            }
            self.provider
                .transport
                .delay(self.provider.poll_interval_ms)
                .await;
        }
    }
}
