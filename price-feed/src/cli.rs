//! CLI argument parsing for the price feed.
//!
//! Uses clap for argument parsing with environment variable fallbacks.

use casino_platform::constants::{DEFAULT_RPC_ENDPOINT, RPC_ENDPOINT_ENV};
use casino_platform::{Url, DEFAULT_COINGECKO_API_URL};
use clap::{Parser, ValueHint};

/// Token price feed for the casino platform.
///
/// Seeds the token registry from the built-in metadata, refreshes USD prices
/// from CoinGecko (preferred) and the Helius metadata proxy (fallback), and
/// prints the resulting table after every round.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct FeedArgs {
    /// Solana RPC endpoint the front-end talks to
    #[arg(
        long = "rpc-endpoint",
        env = RPC_ENDPOINT_ENV,
        default_value = DEFAULT_RPC_ENDPOINT,
        value_hint = ValueHint::Url
    )]
    pub rpc_endpoint: String,

    /// CoinGecko API root
    #[arg(
        long = "coingecko-url",
        env = "COINGECKO_API_URL",
        default_value = DEFAULT_COINGECKO_API_URL,
        value_hint = ValueHint::Url
    )]
    pub coingecko_url: Url,

    /// Helius metadata proxy (e.g. https://play.example/api/helius)
    #[arg(long = "helius-proxy-url", env = "HELIUS_PROXY_URL", value_hint = ValueHint::Url)]
    pub helius_proxy_url: Option<Url>,

    /// Per-provider timeout in seconds (0 = no timeout)
    #[arg(long = "timeout", env = "PRICE_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    /// Number of refresh rounds to execute
    #[arg(
        short = 'r',
        long = "rounds",
        env = "PRICE_ROUNDS",
        default_value = "1"
    )]
    pub rounds: usize,

    /// Delay between rounds in seconds (0 = no delay)
    #[arg(
        short = 'd',
        long = "round-delay",
        env = "PRICE_ROUND_DELAY",
        default_value = "0"
    )]
    pub round_delay: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let args = FeedArgs::try_parse_from(["price-feed"]).unwrap();
        assert_eq!(args.rounds, 1);
        assert_eq!(args.round_delay, 0);
        assert_eq!(args.timeout_secs, 10);
        assert_eq!(args.coingecko_url.as_str(), DEFAULT_COINGECKO_API_URL);
    }

    #[test]
    fn proxy_url_must_be_a_url() {
        let bad = ["price-feed", "--helius-proxy-url", "not a url"];
        assert!(FeedArgs::try_parse_from(bad).is_err());
        let args = FeedArgs::try_parse_from([
            "price-feed",
            "--helius-proxy-url",
            "http://localhost:3000/api/helius",
            "-r",
            "3",
        ])
        .unwrap();
        assert_eq!(args.rounds, 3);
        assert_eq!(
            args.helius_proxy_url.map(|u| u.to_string()).as_deref(),
            Some("http://localhost:3000/api/helius")
        );
    }
}
