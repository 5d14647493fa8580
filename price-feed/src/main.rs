use crate::cli::FeedArgs;
use crate::utils::logging::init_logging;
use anyhow::{Context, Result};
use casino_platform::constants::PLATFORM_FEES;
use casino_platform::{PriceSynchronizer, ProviderEndpoints, SyncConfig, TokenRegistry};
use clap::Parser;
use std::time::Duration;
use tracing::{info, warn};

mod cli;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_logging();

    let args = FeedArgs::parse();

    PLATFORM_FEES
        .validate()
        .context("Platform fee schedule is invalid")?;

    info!("RPC endpoint: {}", args.rpc_endpoint);
    if args.helius_proxy_url.is_none() {
        warn!("HELIUS_PROXY_URL not set; CoinGecko is the only live price source");
    }

    let endpoints = ProviderEndpoints::builder()
        .coingecko(args.coingecko_url)
        .helius_proxy(args.helius_proxy_url)
        .build()
        .context("Failed to build provider endpoints")?;

    let timeout = (args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs));
    let config = SyncConfig::builder()
        .provider_timeout(timeout)
        .build()
        .context("Failed to build sync configuration")?;

    let synchronizer = PriceSynchronizer::from_endpoints(&endpoints, config)?;
    let mut registry =
        TokenRegistry::platform_default().context("Failed to load token metadata")?;

    for round in 1..=args.rounds {
        info!("=== Price refresh {round}/{} ===", args.rounds);

        let outcome = synchronizer.refresh(&mut registry).await;
        for (name, cause) in outcome.failures() {
            warn!("{name}: {cause}");
        }

        println!("{registry}");
        if outcome.providers_unavailable {
            println!("Prices unavailable: showing last known values");
        }

        if round < args.rounds && args.round_delay > 0 {
            tokio::time::sleep(Duration::from_secs(args.round_delay)).await;
        }
    }

    Ok(())
}
