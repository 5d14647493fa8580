//! Multi-provider price refresh.
//!
//! All providers are queried concurrently and awaited to completion. Their
//! results are then folded into the registry from the least preferred to the
//! most preferred, so for any token quoted by several providers the preferred
//! one wins no matter which response arrived first. Tokens no provider quoted
//! keep their last known price.

use crate::error::ProviderError;
use crate::price_feed::coingecko::{CoingeckoProvider, DEFAULT_COINGECKO_API_URL};
use crate::price_feed::helius::HeliusProxyProvider;
use crate::price_feed::{PriceProvider, PriceQuoteResult, PriceQuotes};
use crate::registry::{PriceUpdate, TokenRegistry};
use crate::tokens::TokenRecord;
use crate::utils::with_optional_timeout;
use anyhow::{Context, Result};
use derive_builder::Builder;
use futures::future::join_all;
use reqwest::{Client, Url};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Default bound on a single provider call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Builder, Debug, Clone)]
pub struct SyncConfig {
    /// Upper bound on each provider call; `None` waits indefinitely.
    #[builder(default = "Some(DEFAULT_PROVIDER_TIMEOUT)")]
    pub provider_timeout: Option<Duration>,
}

impl SyncConfig {
    pub fn builder() -> SyncConfigBuilder {
        SyncConfigBuilder::default()
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Some(DEFAULT_PROVIDER_TIMEOUT),
        }
    }
}

/// Where the built-in providers are reached.
#[derive(Builder, Debug, Clone)]
pub struct ProviderEndpoints {
    #[builder(default = "Url::parse(DEFAULT_COINGECKO_API_URL).expect(\"valid url\")")]
    pub coingecko: Url,
    /// Metadata proxy; `None` when it is not deployed.
    #[builder(default)]
    pub helius_proxy: Option<Url>,
}

impl ProviderEndpoints {
    pub fn builder() -> ProviderEndpointsBuilder {
        ProviderEndpointsBuilder::default()
    }
}

/// Availability of live prices as seen by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    /// No refresh has completed yet.
    #[default]
    Unknown,
    /// At least one provider answered the last refresh.
    Available,
    /// Every provider failed the last refresh.
    Unavailable,
}

impl Availability {
    pub fn providers_unavailable(self) -> bool {
        matches!(self, Availability::Unavailable)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderStatus {
    Succeeded { quoted: usize },
    Failed { cause: ProviderError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReport {
    pub name: String,
    pub status: ProviderStatus,
}

impl ProviderReport {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, ProviderStatus::Succeeded { .. })
    }
}

/// Summary of one refresh. Reports are in preference order.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutcome {
    pub reports: Vec<ProviderReport>,
    pub providers_unavailable: bool,
    /// Number of prices written to the registry.
    pub applied: usize,
}

impl RefreshOutcome {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ProviderError)> {
        self.reports.iter().filter_map(|r| match &r.status {
            ProviderStatus::Failed { cause } => Some((r.name.as_str(), cause)),
            ProviderStatus::Succeeded { .. } => None,
        })
    }
}

/// Refreshes token prices from a ranked list of providers.
pub struct PriceSynchronizer {
    /// Most preferred first.
    providers: Vec<Box<dyn PriceProvider>>,
    config: SyncConfig,
    availability: watch::Sender<Availability>,
}

impl PriceSynchronizer {
    pub fn new(providers: Vec<Box<dyn PriceProvider>>, config: SyncConfig) -> Self {
        let (availability, _) = watch::channel(Availability::Unknown);
        Self {
            providers,
            config,
            availability,
        }
    }

    /// CoinGecko preferred, Helius proxy as fallback.
    pub fn from_endpoints(endpoints: &ProviderEndpoints, config: SyncConfig) -> Result<Self> {
        let mut client = Client::builder();
        if let Some(timeout) = config.provider_timeout {
            client = client.timeout(timeout);
        }
        let client = client.build().context("Failed to build HTTP client")?;

        let providers: Vec<Box<dyn PriceProvider>> = vec![
            Box::new(CoingeckoProvider::with_base_url(
                client.clone(),
                endpoints.coingecko.clone(),
            )),
            Box::new(HeliusProxyProvider::new(
                client,
                endpoints.helius_proxy.clone(),
            )),
        ];
        Ok(Self::new(providers, config))
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Receiver for the availability flag. Holders can only read it.
    pub fn subscribe(&self) -> watch::Receiver<Availability> {
        self.availability.subscribe()
    }

    pub fn availability(&self) -> Availability {
        *self.availability.borrow()
    }

    /// Refresh every non-synthetic price in `registry`.
    ///
    /// Never fails: provider errors are recorded in the outcome and folded
    /// into the availability flag.
    pub async fn refresh(&self, registry: &mut TokenRegistry) -> RefreshOutcome {
        let requested: Vec<TokenRecord> = registry
            .list_all()
            .iter()
            .filter(|r| !r.is_synthetic())
            .cloned()
            .collect();

        debug!(
            "refreshing {} token prices from {:?}",
            requested.len(),
            self.provider_names()
        );

        let results = self.query_all(&requested).await;

        // Least preferred first; each more preferred result overwrites it.
        let mut applied = 0;
        for result in results.iter().rev() {
            if let Ok(quotes) = &result.outcome {
                applied += fold_quotes(registry, &result.source_name, quotes);
            }
        }
        registry.pin_synthetic();

        let reports: Vec<ProviderReport> = results
            .into_iter()
            .map(|result| ProviderReport {
                name: result.source_name,
                status: match result.outcome {
                    Ok(quotes) => ProviderStatus::Succeeded {
                        quoted: quotes.len(),
                    },
                    Err(cause) => ProviderStatus::Failed { cause },
                },
            })
            .collect();

        let providers_unavailable = !reports.iter().any(ProviderReport::succeeded);
        let availability = if providers_unavailable {
            Availability::Unavailable
        } else {
            Availability::Available
        };
        self.availability.send_replace(availability);

        if providers_unavailable {
            error!("Failed to fetch token prices from every provider; keeping last known prices");
        } else {
            info!(
                "token prices refreshed: {} written, {} provider(s) failed",
                applied,
                reports.iter().filter(|r| !r.succeeded()).count()
            );
        }

        RefreshOutcome {
            reports,
            providers_unavailable,
            applied,
        }
    }

    /// Query every provider concurrently and wait for all of them.
    /// Results come back in preference order, not arrival order.
    async fn query_all(&self, requested: &[TokenRecord]) -> Vec<PriceQuoteResult> {
        let timeout = self.config.provider_timeout;
        let calls = self.providers.iter().map(|provider| async move {
            let outcome = with_optional_timeout(provider.quotes_usd(requested), timeout).await;
            match &outcome {
                Ok(quotes) => debug!("{}: {} quote(s)", provider.name(), quotes.len()),
                Err(e) => warn!("{}: price fetch failed: {}", provider.name(), e),
            }
            PriceQuoteResult {
                source_name: provider.name().to_string(),
                outcome,
            }
        });
        join_all(calls).await
    }
}

/// Write one provider's quotes into the registry; returns the number written.
fn fold_quotes(registry: &mut TokenRegistry, source: &str, quotes: &PriceQuotes) -> usize {
    let mut written = 0;
    for (id, &price) in quotes {
        if !price.is_finite() || price < 0.0 {
            warn!("{}: dropping invalid price {} for {}", source, price, id);
            continue;
        }
        match registry.apply_price(id, price) {
            Ok(PriceUpdate::Applied { .. }) => written += 1,
            Ok(PriceUpdate::PinnedSynthetic) => {
                debug!("{}: ignoring quote for synthetic token {}", source, id)
            }
            Err(e) => debug!("{}: {}", source, e),
        }
    }
    written
}
