//! Token metadata for the tokens the platform supports.

use crate::address::TokenAddress;
use serde::Serialize;

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const JUP_MINT: &str = "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN";
pub const BONK_MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
/// Mint of the play-money token used for demo games.
pub const FAKE_TOKEN_MINT: &str = "FakeCDoCX1NWywV9m63fk7gmV9S4seMoyqzcNYEmRYjy";

/// Fixed USD price of synthetic tokens.
pub const SYNTHETIC_USD_PRICE: f64 = 1.0;

/// A token known to the platform. Only `usd_price` changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    id: TokenAddress,
    display_name: &'static str,
    symbol: &'static str,
    image: &'static str,
    base_wager: u64,
    decimals: u8,
    coingecko_id: Option<&'static str>,
    is_synthetic: bool,
    pub(crate) usd_price: Option<f64>,
}

impl TokenRecord {
    pub fn id(&self) -> &TokenAddress {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        self.display_name
    }

    pub fn symbol(&self) -> &str {
        self.symbol
    }

    pub fn image(&self) -> &str {
        self.image
    }

    /// Default wager, in the token's smallest unit.
    pub fn base_wager(&self) -> u64 {
        self.base_wager
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// CoinGecko asset id, if the token is listed there.
    pub fn coingecko_id(&self) -> Option<&'static str> {
        self.coingecko_id
    }

    pub fn is_synthetic(&self) -> bool {
        self.is_synthetic
    }

    /// Last known USD price. `None` means unknown.
    pub fn usd_price(&self) -> Option<f64> {
        self.usd_price
    }
}

/// Static declaration of a token, turned into a [`TokenRecord`] at startup.
#[derive(Debug, Clone, Copy)]
pub struct TokenDefinition {
    pub mint: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub image: &'static str,
    pub base_wager: u64,
    pub decimals: u8,
    pub usd_price: Option<f64>,
    pub coingecko_id: Option<&'static str>,
    pub synthetic: bool,
}

impl TokenDefinition {
    pub fn into_record(self) -> TokenRecord {
        TokenRecord {
            id: TokenAddress::from_static(self.mint),
            display_name: self.name,
            symbol: self.symbol,
            image: self.image,
            base_wager: self.base_wager,
            decimals: self.decimals,
            coingecko_id: self.coingecko_id,
            is_synthetic: self.synthetic,
            usd_price: if self.synthetic {
                Some(SYNTHETIC_USD_PRICE)
            } else {
                self.usd_price
            },
        }
    }
}

/// Supported tokens in declaration order. Seed prices are the last values
/// published with the release and are overwritten by the first refresh.
pub const TOKEN_METADATA: [TokenDefinition; 5] = [
    TokenDefinition {
        mint: SOL_MINT,
        name: "SOLANA",
        symbol: "SOL",
        image: "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/So11111111111111111111111111111111111111112/logo.png",
        base_wager: 1_000_000_000,
        decimals: 9,
        usd_price: Some(192.55),
        coingecko_id: Some("solana"),
        synthetic: false,
    },
    TokenDefinition {
        mint: USDC_MINT,
        name: "USDC",
        symbol: "USDC",
        image: "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v/logo.png",
        base_wager: 1_000_000,
        decimals: 6,
        usd_price: Some(0.9999),
        coingecko_id: Some("usd-coin"),
        synthetic: false,
    },
    TokenDefinition {
        mint: JUP_MINT,
        name: "Jupiter",
        symbol: "JUP",
        image: "https://static.jup.ag/jup/icon.png",
        base_wager: 1_000_000_000,
        decimals: 9,
        usd_price: Some(0.000932),
        coingecko_id: Some("jupiter-exchange"),
        synthetic: false,
    },
    TokenDefinition {
        mint: BONK_MINT,
        name: "Bonk",
        symbol: "BONK",
        image: "https://quei6zhlcfsxdfyes577gy7bkxmuz7qqakyt72xlbkyh7fysmoza.arweave.net/hQiPZOsRZXGXBJd_82PhVdlM_hACsT_q6wqwf5cSY7I",
        base_wager: 1_000_000_000,
        decimals: 9,
        usd_price: Some(0.00002806),
        coingecko_id: Some("bonk"),
        synthetic: false,
    },
    TokenDefinition {
        mint: FAKE_TOKEN_MINT,
        name: "TEST",
        symbol: "TEST",
        image: "/fakemoney.png",
        base_wager: 1_000_000_000,
        decimals: 9,
        usd_price: Some(SYNTHETIC_USD_PRICE),
        coingecko_id: None,
        synthetic: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_static_mints_parse() {
        for def in TOKEN_METADATA {
            assert!(TokenAddress::parse(def.mint).is_ok(), "{}", def.mint);
        }
    }

    #[test]
    fn synthetic_definition_is_pinned() {
        let def = TokenDefinition {
            usd_price: Some(42.0),
            ..TOKEN_METADATA[4]
        };
        assert_eq!(def.into_record().usd_price(), Some(SYNTHETIC_USD_PRICE));
    }

    #[test]
    fn base_wager_matches_decimals() {
        for def in TOKEN_METADATA {
            assert_eq!(def.base_wager, 10u64.pow(def.decimals as u32), "{}", def.symbol);
        }
    }
}
