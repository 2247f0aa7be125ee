//! # dApp Configuration
//!
//! Deployment constants of the LW3Punks collection. Nothing is configurable at
//! runtime; two values can be overridden when the frontend is built:
//!
//! - `MINT_CONTRACT_ADDRESS`: address of the NFT contract
//! - `MINT_PRICE_ETHER`: price of one mint as a decimal amount (`"0.01"`)
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_mint::config::{dapp_config, init_config, DappConfig};
//!
//! init_config(DappConfig::from_build_env()?)?;
//! assert_eq!(dapp_config().chain.id, 80001);
//! # Ok::<(), lib_mint::DappError>(())
//! ```

use std::sync::OnceLock;

use alloy_primitives::utils::parse_ether;
use alloy_primitives::{address, Address, U256};
use shared::{Chain, MUMBAI};

use crate::error::{DappError, Result};
use crate::provider::DEFAULT_POLL_INTERVAL_MS;

/// Address of the LW3Punks deployment used when no override is given at build time.
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

/// Price of one mint: 0.01 of the native currency, in wei.
pub const MINT_PRICE_WEI: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);

/// Size of the collection.
pub const MAX_SUPPLY: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DappConfig {
    /// NFT contract exposing `tokenIds()` and `mint()`
    pub contract_address: Address,

    /// Network the wallet must be on
    pub chain: Chain,

    /// Value attached to every `mint()` call
    pub mint_price_wei: U256,

    /// Denominator of the "n/10 have been minted" caption
    pub max_supply: u32,

    /// Wait between receipt polls while a mint is pending
    pub receipt_poll_interval_ms: u32,
}

impl Default for DappConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            chain: MUMBAI,
            mint_price_wei: MINT_PRICE_WEI,
            max_supply: MAX_SUPPLY,
            receipt_poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl DappConfig {
    /// Defaults plus the build-time overrides.
    pub fn from_build_env() -> Result<Self> {
        Self::with_overrides(option_env!("MINT_CONTRACT_ADDRESS"), option_env!("MINT_PRICE_ETHER"))
    }

    fn with_overrides(contract_address: Option<&str>, mint_price: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = contract_address {
            config.contract_address = raw.trim().parse().map_err(|e| {
                DappError::Config(format!("contract address '{}' is invalid: {}", raw, e))
            })?;
        }

        if let Some(raw) = mint_price {
            config.mint_price_wei = parse_ether(raw.trim())
                .map_err(|e| DappError::Config(format!("mint price '{}' is invalid: {}", raw, e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.contract_address.is_zero() {
            return Err(DappError::Config("contract address must not be zero".to_string()));
        }

        if self.mint_price_wei.is_zero() {
            return Err(DappError::Config("mint price must be positive".to_string()));
        }

        if self.max_supply == 0 {
            return Err(DappError::Config("max supply must be positive".to_string()));
        }

        if self.receipt_poll_interval_ms == 0 {
            return Err(DappError::Config("receipt poll interval must be positive".to_string()));
        }

        Ok(())
    }
}

static CONFIG: OnceLock<DappConfig> = OnceLock::new();

/// Validate and install the global configuration. Call once at startup.
pub fn init_config(config: DappConfig) -> Result<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| DappError::Config("config has already been initialized".to_string()))
}

/// The global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn dapp_config() -> &'static DappConfig {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DappConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chain.id, 80001);
        assert_eq!(parse_ether("0.01").unwrap(), config.mint_price_wei);
    }

    #[test]
    fn test_build_overrides() {
        let config = DappConfig::with_overrides(
            Some("0x0000000000000000000000000000000000000022"),
            Some("0.05"),
        )
        .unwrap();
        assert_eq!(
            config.contract_address,
            address!("0x0000000000000000000000000000000000000022")
        );
        assert_eq!(config.mint_price_wei, MINT_PRICE_WEI * U256::from(5));

        assert_eq!(DappConfig::with_overrides(None, None).unwrap(), DappConfig::default());
    }

    #[test]
    fn test_build_overrides_reject_garbage() {
        assert!(matches!(
            DappConfig::with_overrides(Some("0x1234"), None),
            Err(DappError::Config(_))
        ));
        assert!(matches!(
            DappConfig::with_overrides(Some("0x5FbDB2315678afecb367f032d93F642f64180aZ3"), None),
            Err(DappError::Config(_))
        ));
        assert!(matches!(
            DappConfig::with_overrides(None, Some("0.01 MATIC")),
            Err(DappError::Config(_))
        ));
        assert!(matches!(
            DappConfig::with_overrides(None, Some("0")),
            Err(DappError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DappConfig::default();
        config.contract_address = Address::ZERO;
        assert!(matches!(config.validate(), Err(DappError::Config(_))));

        let mut config = DappConfig::default();
        config.max_supply = 0;
        assert!(config.validate().is_err());

        let mut config = DappConfig::default();
        config.receipt_poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_global_config_initializes_once() {
        init_config(DappConfig::default()).unwrap();
        assert_eq!(dapp_config().max_supply, 10);
        assert!(init_config(DappConfig::default()).is_err());
    }
}
