//! Helius token metadata, reached through the platform's server-side proxy.
//!
//! The API key lives on the proxy; without it the proxy rejects the call and
//! this provider simply reports a failure.

use crate::address::TokenAddress;
use crate::error::ProviderError;
use crate::price_feed::{PriceProvider, PriceQuotes};
use crate::tokens::TokenRecord;
use crate::utils::serialization::opt_f64_from_value;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
struct MetadataRequest<'a> {
    mints: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MetadataResponse {
    Assets(Vec<Value>),
    Wrapped { result: Vec<Value> },
}

#[derive(Debug, Deserialize)]
struct Asset {
    id: String,
    #[serde(default)]
    token_info: Option<TokenInfo>,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    #[serde(default)]
    price_info: Option<PriceInfo>,
}

#[derive(Debug, Deserialize)]
struct PriceInfo {
    #[serde(default)]
    price_per_token: Value,
    #[serde(default)]
    currency: Value,
}

/// Currencies quoted at par with USD.
const USD_CURRENCIES: [&str; 2] = ["USD", "USDC"];

impl PriceInfo {
    /// USD price, or why this entry has none.
    fn usd(&self) -> Result<f64, String> {
        match &self.currency {
            Value::Null => {}
            Value::String(c) if USD_CURRENCIES.iter().any(|u| c.eq_ignore_ascii_case(u)) => {}
            other => return Err(format!("priced in {other}, not USD")),
        }
        opt_f64_from_value(&self.price_per_token)?.ok_or_else(|| "no price".to_string())
    }
}

/// Secondary price source backed by the `/api/helius` metadata proxy.
#[derive(Debug, Clone)]
pub struct HeliusProxyProvider {
    client: Client,
    endpoint: Option<Url>,
}

impl HeliusProxyProvider {
    /// `endpoint` is the proxy URL; `None` means the proxy is not deployed.
    pub fn new(client: Client, endpoint: Option<Url>) -> Self {
        Self { client, endpoint }
    }
}

/// Parse the proxy body: a list of assets, optionally wrapped in `result`.
/// Each asset is read on its own: one without a usable USD price, or whose id
/// is not an address, is skipped and the rest are kept.
pub(crate) fn parse_assets(body: &[u8]) -> Result<PriceQuotes, ProviderError> {
    let parsed: MetadataResponse = serde_json::from_slice(body)
        .map_err(|e| ProviderError::malformed(format!("helius: parse JSON failed: {e}")))?;
    let assets = match parsed {
        MetadataResponse::Assets(assets) | MetadataResponse::Wrapped { result: assets } => assets,
    };

    let mut out = PriceQuotes::new();
    for raw in assets {
        let asset: Asset = match serde_json::from_value(raw) {
            Ok(asset) => asset,
            Err(e) => {
                tracing::debug!("helius: skipping unreadable asset: {}", e);
                continue;
            }
        };
        let price = match asset.token_info.and_then(|info| info.price_info) {
            Some(info) => info.usd(),
            None => Err("no price info".to_string()),
        };
        let price = match price {
            Ok(price) => price,
            Err(e) => {
                tracing::debug!("helius: skipping {}: {}", asset.id, e);
                continue;
            }
        };
        match TokenAddress::parse(&asset.id) {
            Ok(id) => {
                out.insert(id, price);
            }
            Err(e) => tracing::debug!("helius: skipping asset id {:?}: {}", asset.id, e),
        }
    }
    Ok(out)
}

#[async_trait]
impl PriceProvider for HeliusProxyProvider {
    fn name(&self) -> &str {
        "helius"
    }

    async fn quotes_usd(&self, tokens: &[TokenRecord]) -> Result<PriceQuotes, ProviderError> {
        let Some(endpoint) = &self.endpoint else {
            return Err(ProviderError::unreachable("helius: no proxy endpoint configured"));
        };
        if tokens.is_empty() {
            return Ok(PriceQuotes::new());
        }

        let request = MetadataRequest {
            mints: tokens.iter().map(|t| t.id().as_str()).collect(),
        };

        let resp = self
            .client
            .post(endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::unreachable(format!("helius: request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::unreachable(format!(
                "helius: proxy returned {status}: {error_text}"
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ProviderError::unreachable(format!("helius: read body failed: {e}")))?;

        parse_assets(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TokenRegistry;
    use crate::tokens::{BONK_MINT, JUP_MINT, SOL_MINT};

    #[test]
    fn request_body_lists_mints() {
        let ids = TokenRegistry::platform_default().unwrap().priced_ids();
        let request = MetadataRequest {
            mints: ids.iter().map(|id| id.as_str()).collect(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["mints"].as_array().unwrap().len(), 4);
        assert_eq!(json["mints"][0], SOL_MINT);
    }

    #[test]
    fn parses_asset_list() {
        let body = format!(
            r#"[
                {{"id":"{SOL_MINT}","token_info":{{"price_info":{{"price_per_token":151.2,"currency":"USDC"}}}}}},
                {{"id":"{JUP_MINT}","token_info":{{"price_info":{{"price_per_token":"0.81"}}}}}},
                {{"id":"{BONK_MINT}","token_info":{{}}}}
            ]"#
        );
        let quotes = parse_assets(body.as_bytes()).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[&TokenAddress::from_static(SOL_MINT)], 151.2);
        assert_eq!(quotes[&TokenAddress::from_static(JUP_MINT)], 0.81);
    }

    #[test]
    fn parses_wrapped_result() {
        let body = format!(
            r#"{{"result":[{{"id":"{SOL_MINT}","token_info":{{"price_info":{{"price_per_token":99.0}}}}}}]}}"#
        );
        let quotes = parse_assets(body.as_bytes()).unwrap();
        assert_eq!(quotes[&TokenAddress::from_static(SOL_MINT)], 99.0);
    }

    #[test]
    fn unparsable_price_skips_only_that_asset() {
        let body = format!(
            r#"[
                {{"id":"{SOL_MINT}","token_info":{{"price_info":{{"price_per_token":151.2}}}}}},
                {{"id":"{JUP_MINT}","token_info":{{"price_info":{{"price_per_token":"n/a"}}}}}},
                {{"id":"{BONK_MINT}","token_info":{{"price_info":{{"price_per_token":[1]}}}}}},
                {{"token_info":{{"price_info":{{"price_per_token":2.0}}}}}},
                {{"id":42,"token_info":{{"price_info":{{"price_per_token":3.0}}}}}},
                null
            ]"#
        );
        let quotes = parse_assets(body.as_bytes()).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[&TokenAddress::from_static(SOL_MINT)], 151.2);
    }

    #[test]
    fn only_usd_denominated_prices_are_kept() {
        let body = format!(
            r#"[
                {{"id":"{SOL_MINT}","token_info":{{"price_info":{{"price_per_token":151.2,"currency":"usd"}}}}}},
                {{"id":"{JUP_MINT}","token_info":{{"price_info":{{"price_per_token":0.9,"currency":"EUR"}}}}}}
            ]"#
        );
        let quotes = parse_assets(body.as_bytes()).unwrap();
        assert_eq!(quotes.len(), 1);
        assert!(quotes.contains_key(&TokenAddress::from_static(SOL_MINT)));
    }

    #[test]
    fn invalid_ids_are_skipped() {
        let body = br#"[{"id":"not-a-mint","token_info":{"price_info":{"price_per_token":1.0}}}]"#;
        assert!(parse_assets(body).unwrap().is_empty());
    }

    #[test]
    fn proxy_error_body_is_malformed() {
        let err = parse_assets(br#"{"error":"Missing HELIUS_API_KEY"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn missing_endpoint_is_unreachable() {
        let provider = HeliusProxyProvider::new(Client::new(), None);
        let registry = TokenRegistry::platform_default().unwrap();
        let err = provider.quotes_usd(registry.list_all()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Unreachable(_)));
    }
}
