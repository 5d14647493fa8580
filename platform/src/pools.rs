//! Liquidity pools supported on the platform.

use crate::address::TokenAddress;
use crate::error::AddressError;
use crate::tokens::{BONK_MINT, FAKE_TOKEN_MINT, JUP_MINT, SOL_MINT, USDC_MINT};

/// A pool is identified by its token and an optional authority.
/// Pools without an authority are the public pool for that token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolToken {
    pub token: TokenAddress,
    pub authority: Option<TokenAddress>,
}

impl PoolToken {
    pub fn public(token: &str) -> Result<Self, AddressError> {
        Ok(Self {
            token: TokenAddress::parse(token)?,
            authority: None,
        })
    }

    pub fn private(token: &str, authority: &str) -> Result<Self, AddressError> {
        Ok(Self {
            token: TokenAddress::parse(token)?,
            authority: Some(TokenAddress::parse(authority)?),
        })
    }

    fn builtin(token: &'static str) -> Self {
        Self {
            token: TokenAddress::from_static(token),
            authority: None,
        }
    }
}

/// Supported pools, in display order.
pub fn pools() -> Vec<PoolToken> {
    [SOL_MINT, USDC_MINT, JUP_MINT, BONK_MINT, FAKE_TOKEN_MINT]
        .into_iter()
        .map(PoolToken::builtin)
        .collect()
}

/// Pool selected when the platform loads: the first declared pool.
pub fn default_pool() -> PoolToken {
    PoolToken::builtin(SOL_MINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_is_first_pool() {
        assert_eq!(pools().first(), Some(&default_pool()));
    }

    #[test]
    fn pools_are_public_and_unique() {
        let pools = pools();
        assert_eq!(pools.len(), 5);
        assert!(pools.iter().all(|p| p.authority.is_none()));
        let mut tokens: Vec<_> = pools.iter().map(|p| p.token.clone()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn private_pool_carries_authority() {
        let pool =
            PoolToken::private(USDC_MINT, crate::constants::PLATFORM_CREATOR_ADDRESS).unwrap();
        assert_eq!(
            pool.authority.as_ref().map(|a| a.as_str()),
            Some(crate::constants::PLATFORM_CREATOR_ADDRESS)
        );
    }

    #[test]
    fn malformed_pool_addresses_are_rejected() {
        assert_eq!(PoolToken::public(SOL_MINT).unwrap(), default_pool());
        assert!(matches!(
            PoolToken::public("So1111"),
            Err(AddressError::Length(6))
        ));
        assert!(matches!(
            PoolToken::private(USDC_MINT, "0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl"),
            Err(AddressError::InvalidCharacter { ch: '0', pos: 0 })
        ));
    }
}
