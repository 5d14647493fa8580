mod address;
pub mod constants;
mod error;
pub mod navigation;
pub mod pools;
mod price_feed;
mod registry;
pub mod tokens;
mod utils;

pub use address::TokenAddress;
pub use error::{AddressError, ConfigError, ProviderError, RegistryError};
pub use price_feed::coingecko::{CoingeckoProvider, DEFAULT_COINGECKO_API_URL};
pub use price_feed::helius::HeliusProxyProvider;
pub use price_feed::sync::{
    Availability, PriceSynchronizer, ProviderEndpoints, ProviderReport, ProviderStatus,
    RefreshOutcome, SyncConfig, DEFAULT_PROVIDER_TIMEOUT,
};
pub use price_feed::{PriceProvider, PriceQuoteResult, PriceQuotes};
pub use registry::{PriceUpdate, TokenRegistry};
pub use reqwest::Url;
pub use tokens::TokenRecord;
