//! # Mint Controller
//!
//! [`MintDapp`] implements everything the page can do: connect the wallet,
//! refresh the minted count, and mint. It owns the wallet session for the
//! lifetime of the page and writes results into a [`DappStore`].
//!
//! Every public operation handles its own failures: errors are logged, and
//! only the wrong-network prompt and the two mint verdicts reach the user as
//! alerts.

use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::utils::format_ether;
use alloy_primitives::U256;
use futures::lock::Mutex;

use crate::config::DappConfig;
use crate::contract::{MintReceipt, NftContract};
use crate::error::{DappError, Result};
use crate::provider::{Signer, Web3Provider};
use crate::state::{DappState, DappStore};
use crate::transport::{Notifier, WalletConnector};

pub const NO_WALLET_MESSAGE: &str = "MetaMask not installed or connection request rejected";
pub const MINT_SUCCESS_MESSAGE: &str = "You successfully minted a LW3Punk!";
pub const MINT_FAILED_MESSAGE: &str = "Transaction failed";

/// How a [`MintDapp::public_mint`] attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    /// Receipt passed the success check; the count was refreshed.
    Minted(MintReceipt),
    /// Receipt obtained but judged unsuccessful.
    Failed(MintReceipt),
    /// Submission or confirmation raised an error.
    Errored(DappError),
    /// The page was not in a state that allows minting.
    Skipped,
}

pub struct MintDapp<C: WalletConnector, N, S> {
    config: DappConfig,
    connector: C,
    notifier: N,
    store: S,
    session: Mutex<Option<C::Transport>>,
    /// Bumped by [`MintDapp::close`]. A prompt that resolves in a later
    /// generation than it started in is closed instead of stored.
    generation: AtomicU64,
}

impl<C, N, S> MintDapp<C, N, S>
where
    C: WalletConnector,
    N: Notifier,
    S: DappStore,
{
    pub fn new(config: DappConfig, connector: C, notifier: N, store: S) -> Self {
        Self {
            config,
            connector,
            notifier,
            store,
            session: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &DappConfig {
        &self.config
    }

    pub fn state(&self) -> DappState {
        self.store.snapshot()
    }

    /// The open session, connecting first if there is none.
    ///
    /// The lock is held across the connect prompt so concurrent callers share
    /// one prompt instead of opening several.
    async fn session(&self) -> Result<C::Transport> {
        let mut slot = self.session.lock().await;
        if let Some(transport) = slot.as_ref() {
            return Ok(transport.clone());
        }

        let generation = self.generation.load(Ordering::Acquire);
        let transport = self
            .connector
            .connect()
            .await?
            .ok_or_else(|| DappError::Connection(NO_WALLET_MESSAGE.to_string()))?;

        if self.generation.load(Ordering::Acquire) != generation {
            self.connector.close(transport);
            log::info!("wallet session closed while the connect prompt was open");
            return Err(DappError::Connection("wallet session was closed".to_string()));
        }

        log::info!("wallet session opened");
        *slot = Some(transport.clone());
        Ok(transport)
    }

    /// A provider on the configured chain. Alerts the user when the wallet is
    /// on another network.
    pub async fn provider(&self) -> Result<Web3Provider<C::Transport>> {
        let provider = Web3Provider::new(self.session().await?)
            .with_poll_interval(self.config.receipt_poll_interval_ms);

        let chain_id = provider.chain_id().await?;
        if chain_id != self.config.chain.id {
            self.notifier.alert(&self.config.chain.switch_prompt());
            return Err(DappError::WrongNetwork {
                expected: self.config.chain.id,
                actual: chain_id,
                name: self.config.chain.name,
            });
        }

        Ok(provider)
    }

    pub async fn signer(&self) -> Result<Signer<C::Transport>> {
        self.provider().await?.get_signer().await
    }

    /// Connect the wallet. Returns whether the page is now connected.
    pub async fn connect_wallet(&self) -> bool {
        match self.provider().await {
            Ok(_) => {
                self.store.update(&mut |s| s.mark_connected());
                true
            }
            Err(e) => {
                log::error!("wallet connection failed: {}", e);
                false
            }
        }
    }

    async fn read_count(&self, provider: Web3Provider<C::Transport>) -> Result<U256> {
        NftContract::new(self.config.contract_address, provider)
            .token_ids()
            .await
    }

    /// Store a successful read; keep the previous count on failure.
    fn record_count(&self, count: Result<U256>) -> Option<U256> {
        match count {
            Ok(count) => {
                let minted = count.to_string();
                self.store.update(&mut |s| s.minted = minted.clone());
                Some(count)
            }
            Err(e) => {
                log::error!("failed to read minted count: {}", e);
                None
            }
        }
    }

    /// Re-read `tokenIds()`. On failure the previous count stays on screen.
    pub async fn refresh_minted_count(&self) -> Option<U256> {
        let count = match self.provider().await {
            Ok(provider) => self.read_count(provider).await,
            Err(e) => Err(e),
        };
        self.record_count(count)
    }

    async fn submit_mint(&self) -> Result<MintReceipt> {
        let signer = self.signer().await?;
        log::info!(
            "minting from {} for {} {}",
            shared::truncate_address(&signer.address().to_checksum(None)),
            format_ether(self.config.mint_price_wei),
            self.config.chain.currency
        );

        let contract = NftContract::new(self.config.contract_address, signer);
        let pending = contract.mint(self.config.mint_price_wei).await?;
        let receipt = pending
            .wait()
            .await
            .map_err(|e| DappError::Mint(format!("waiting for {}: {}", pending.hash(), e)))?;

        Ok(MintReceipt {
            receipt,
            gas_limit: pending.gas_limit(),
        })
    }

    /// Mint one token. The page is busy until the attempt has a verdict and
    /// idle again afterwards, whatever the outcome. The count refresh after a
    /// successful mint runs once the page is idle.
    pub async fn public_mint(&self) -> MintOutcome {
        let Some(busy) = BusyGuard::enter(&self.store) else {
            log::warn!("mint ignored: page is {:?}", self.store.snapshot().phase);
            return MintOutcome::Skipped;
        };

        let outcome = match self.submit_mint().await {
            Ok(receipt) if receipt.succeeded() => {
                log::info!("mint confirmed in {}", receipt.receipt.transaction_hash);
                self.notifier.alert(MINT_SUCCESS_MESSAGE);
                MintOutcome::Minted(receipt)
            }
            Ok(receipt) => {
                log::warn!(
                    "mint {} unsuccessful: status {:?}, gas {}/{}",
                    receipt.receipt.transaction_hash,
                    receipt.receipt.status,
                    receipt.receipt.gas_used,
                    receipt.gas_limit
                );
                self.notifier.alert(MINT_FAILED_MESSAGE);
                MintOutcome::Failed(receipt)
            }
            Err(e) => {
                log::error!("mint failed: {}", e);
                MintOutcome::Errored(e)
            }
        };
        drop(busy);

        if matches!(outcome, MintOutcome::Minted(_)) {
            self.refresh_minted_count().await;
        }
        outcome
    }

    /// Work run whenever the connected flag changes. One provider acquisition
    /// serves both the connect step and the count read, so a rejected or
    /// misconfigured wallet prompts and alerts at most once.
    pub async fn sync(&self) {
        let provider = match self.provider().await {
            Ok(provider) => provider,
            Err(e) => {
                log::error!("wallet connection failed: {}", e);
                return;
            }
        };

        self.store.update(&mut |s| s.mark_connected());
        let count = self.read_count(provider).await;
        self.record_count(count);
    }

    /// Release the wallet session (page unmount). A connect prompt still open
    /// at this point has its session closed as soon as it resolves.
    pub fn close(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        match self.session.try_lock() {
            Some(mut slot) => {
                if let Some(transport) = slot.take() {
                    self.connector.close(transport);
                    log::info!("wallet session closed");
                }
            }
            None => log::debug!("connect prompt pending, session will be closed when it resolves"),
        }
    }
}

/// Holds the page in [`crate::Phase::ConnectedBusy`] until dropped.
struct BusyGuard<'a, S: DappStore> {
    store: &'a S,
}

impl<'a, S: DappStore> BusyGuard<'a, S> {
    fn enter(store: &'a S) -> Option<Self> {
        let mut entered = false;
        store.update(&mut |s| entered = s.begin_mint());
        entered.then(|| Self { store })
    }
}

impl<S: DappStore> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.store.update(&mut |s| s.finish_mint());
    }
}
