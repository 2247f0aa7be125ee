//! # Mint Core Library
//!
//! Platform-neutral core of the LW3Punks mint dApp: everything between the
//! wallet's EIP-1193 provider and the page's reactive state.
//!
//! ## Modules
//!
//! - [`error`] - [`DappError`] taxonomy and [`Result`] alias
//! - [`config`] - Contract address, target chain, mint price
//! - [`abi`] - Function selectors and return-value decoding
//! - [`transport`] - [`Transport`] and [`WalletConnector`] seams implemented by the frontend
//! - [`provider`] - Typed JSON-RPC over a transport: provider, signer, pending transaction
//! - [`contract`] - The NFT contract binding (`tokenIds()`, `mint()`)
//! - [`state`] - UI phase machine and the [`DappStore`] seam
//! - [`dapp`] - [`MintDapp`], the controller behind the page
//!
//! ## Example
//!
//! ```rust,ignore
//! use lib_mint::{DappConfig, MemoryStore, MintDapp};
//!
//! let dapp = MintDapp::new(DappConfig::default(), connector, notifier, MemoryStore::default());
//! dapp.sync().await;                       // connect + read minted count
//! let outcome = dapp.public_mint().await;  // submit mint()
//! ```

pub mod abi;
pub mod config;
pub mod contract;
pub mod dapp;
pub mod error;
pub mod provider;
pub mod state;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::DappConfig;
pub use dapp::{MintDapp, MintOutcome};
pub use error::{DappError, Result};
pub use state::{ActionButton, DappState, DappStore, MemoryStore, Phase};
pub use transport::{Notifier, Transport, WalletConnector};
