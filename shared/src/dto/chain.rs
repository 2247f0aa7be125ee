//! Network descriptor for the chain the dApp is deployed on.

use serde::Serialize;

/// An EVM network the wallet must be connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chain {
    /// EIP-155 chain identifier, as reported by `eth_chainId`
    pub id: u64,
    /// Human name used in user-facing prompts
    pub name: &'static str,
    /// Symbol of the native currency that pays for mints
    pub currency: &'static str,
}

/// Polygon's Mumbai testnet.
pub const MUMBAI: Chain = Chain {
    id: 80001,
    name: "Mumbai",
    currency: "MATIC",
};

impl Chain {
    /// Message shown when the wallet sits on another network.
    pub fn switch_prompt(&self) -> String {
        format!("Change network to {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mumbai_prompt() {
        assert_eq!(MUMBAI.id, 80001);
        assert_eq!(MUMBAI.switch_prompt(), "Change network to Mumbai");
    }
}
