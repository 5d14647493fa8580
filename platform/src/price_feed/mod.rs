pub(crate) mod coingecko;
pub(crate) mod helius;
pub(crate) mod sync;

use crate::address::TokenAddress;
use crate::error::ProviderError;
use crate::tokens::TokenRecord;
use async_trait::async_trait;
use std::collections::HashMap;

/// USD prices keyed by token address. May cover only part of a request.
pub type PriceQuotes = HashMap<TokenAddress, f64>;

/// Outcome of one provider call during a refresh. Discarded once folded.
#[derive(Debug, Clone)]
pub struct PriceQuoteResult {
    pub source_name: String,
    pub outcome: Result<PriceQuotes, ProviderError>,
}

/// External source of USD spot prices.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Name used in logs and refresh reports.
    fn name(&self) -> &str;

    /// Quote every token in `tokens` the provider knows about.
    ///
    /// Tokens the provider cannot price are left out of the result;
    /// a failed request or unparsable body fails the whole call.
    async fn quotes_usd(&self, tokens: &[TokenRecord]) -> Result<PriceQuotes, ProviderError>;
}
