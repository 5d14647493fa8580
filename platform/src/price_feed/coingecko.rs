use crate::address::TokenAddress;
use crate::error::ProviderError;
use crate::price_feed::{PriceProvider, PriceQuotes};
use crate::tokens::TokenRecord;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::collections::HashMap;

pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko-backed price provider.
/// Fetches spot prices in USD for the requested tokens via `/simple/price`.
#[derive(Debug, Clone)]
pub struct CoingeckoProvider {
    client: Client,
    base: Url,
}

impl Default for CoingeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CoingeckoProvider {
    pub fn new() -> Self {
        let base = Url::parse(DEFAULT_COINGECKO_API_URL).expect("valid url");
        Self::with_base_url(Client::new(), base)
    }

    /// Point the provider at another API root (e.g. the pro endpoint).
    pub fn with_base_url(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    fn price_url(&self, ids: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.pop_if_empty().extend(["simple", "price"]);
        }
        url.query_pairs_mut()
            .append_pair("ids", &ids.join(","))
            .append_pair("vs_currencies", "usd");
        url
    }
}

/// Map requested tokens to CoinGecko ids. Several mints may share one id.
fn ids_for(
    tokens: &[TokenRecord],
) -> (Vec<&'static str>, HashMap<&'static str, Vec<TokenAddress>>) {
    let mut ids: Vec<&'static str> = Vec::new();
    let mut id_to_tokens: HashMap<&'static str, Vec<TokenAddress>> = HashMap::new();

    for token in tokens {
        if let Some(id) = token.coingecko_id() {
            if !ids.contains(&id) {
                ids.push(id);
            }
            id_to_tokens.entry(id).or_default().push(token.id().clone());
        }
    }

    (ids, id_to_tokens)
}

/// Parse a `/simple/price` body like `{ "solana": {"usd": 192.5}, ... }`.
///
/// Entries without a numeric `usd` field are skipped; a body that is not an
/// object of objects is malformed.
pub(crate) fn parse_simple_price(
    body: &[u8],
    id_to_tokens: &HashMap<&'static str, Vec<TokenAddress>>,
) -> Result<PriceQuotes, ProviderError> {
    let parsed: HashMap<String, HashMap<String, Value>> = serde_json::from_slice(body)
        .map_err(|e| ProviderError::malformed(format!("coingecko: parse JSON failed: {e}")))?;

    let mut out = PriceQuotes::new();
    for (id, currencies) in parsed {
        let Some(tokens) = id_to_tokens.get(id.as_str()) else {
            tracing::debug!("coingecko: ignoring unrequested id {}", id);
            continue;
        };
        match currencies.get("usd").and_then(Value::as_f64) {
            Some(px) => {
                for token in tokens {
                    out.insert(token.clone(), px);
                }
            }
            None => tracing::debug!("coingecko: usd missing for id {}", id),
        }
    }
    Ok(out)
}

#[async_trait]
impl PriceProvider for CoingeckoProvider {
    fn name(&self) -> &str {
        "coingecko"
    }

    async fn quotes_usd(&self, tokens: &[TokenRecord]) -> Result<PriceQuotes, ProviderError> {
        let (ids, id_to_tokens) = ids_for(tokens);
        if ids.is_empty() {
            return Ok(PriceQuotes::new());
        }

        let url = self.price_url(&ids);
        tracing::debug!("coingecko: GET {}", url);

        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::unreachable(format!("coingecko: request failed: {e}")))?
            .error_for_status()
            .map_err(|e| {
                ProviderError::unreachable(format!("coingecko: non-success status: {e}"))
            })?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| ProviderError::unreachable(format!("coingecko: read body failed: {e}")))?;

        parse_simple_price(&body, &id_to_tokens)
    }
}
