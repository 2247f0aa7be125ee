//! Minimal Solidity ABI support for argument-less functions.
//!
//! The NFT contract only needs `tokenIds()` and `mint()`, neither of which
//! takes arguments, so calldata is just the 4-byte selector.

use alloy_primitives::{keccak256, Bytes, Selector, U256};

use crate::error::{DappError, Result};

/// Size of one ABI word.
pub const WORD: usize = 32;

/// First four bytes of `keccak256(signature)`.
///
/// ```rust
/// use alloy_primitives::Selector;
/// use lib_mint::abi::selector;
///
/// assert_eq!(selector("transfer(address,uint256)"), Selector::from([0xa9, 0x05, 0x9c, 0xbb]));
/// ```
pub fn selector(signature: &str) -> Selector {
    Selector::from_slice(&keccak256(signature)[..4])
}

/// Calldata for a call without arguments.
pub fn encode_call(signature: &str) -> Bytes {
    Bytes::copy_from_slice(selector(signature).as_slice())
}

/// Decode the first word of return data as a `uint256`.
pub fn decode_uint(data: &[u8]) -> Result<U256> {
    if data.len() < WORD {
        return Err(DappError::Abi(format!(
            "expected a {}-byte word, got {} bytes",
            WORD,
            data.len()
        )));
    }

    Ok(U256::from_be_slice(&data[..WORD]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_selectors() {
        assert_eq!(hex::encode_prefixed(encode_call("tokenIds()")), "0x714cff56");
        assert_eq!(hex::encode_prefixed(encode_call("mint()")), "0x1249c58b");
        assert_eq!(hex::encode_prefixed(encode_call("balanceOf(address)")), "0x70a08231");
    }

    #[test]
    fn test_decode_uint() {
        let data = hex::decode("0000000000000000000000000000000000000000000000000000000000000007").unwrap();
        assert_eq!(decode_uint(&data).unwrap(), U256::from(7));
    }

    #[test]
    fn test_decode_uint_keeps_full_width() {
        let mut wide = [0u8; 32];
        wide[0] = 1;
        assert_eq!(decode_uint(&wide).unwrap(), U256::from(1) << 248);
    }

    #[test]
    fn test_decode_uint_errors() {
        assert!(decode_uint(&[0u8; 31]).is_err());
        assert!(decode_uint(&[]).is_err());
    }
}
