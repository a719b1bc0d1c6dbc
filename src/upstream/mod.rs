use crate::errors::UpstreamError;
use async_trait::async_trait;
use serde::Deserialize;

pub mod coingecko;

pub use coingecko::CoinGecko;

/// One row of the upstream `/coins/markets` listing, limited to the
/// fields we project. Everything else in the document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamMarket {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub image: String,
}

/// The upstream `/coins/{id}` document. `description` and `market_data`
/// are required: a body without them is treated as malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCoin {
    pub id: String,
    pub name: String,
    pub description: LocalizedText,
    pub market_data: UpstreamMarketData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub en: Option<String>,
}

/// Per-currency values; only USD is read.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyMap {
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamMarketData {
    pub current_price: CurrencyMap,
    pub high_24h: CurrencyMap,
    pub low_24h: CurrencyMap,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_14d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub price_change_percentage_60d: Option<f64>,
    pub price_change_percentage_200d: Option<f64>,
    pub price_change_percentage_1y: Option<f64>,
}

#[async_trait]
pub trait MarketData: Send + Sync {
    fn name(&self) -> &'static str;

    /// Top coins by market cap, priced in USD. `page` and `per_page` are
    /// forwarded as given.
    async fn fetch_markets(
        &self,
        page: &str,
        per_page: &str,
    ) -> Result<Vec<UpstreamMarket>, UpstreamError>;

    /// Full market document for a single coin.
    async fn fetch_coin(&self, id: &str) -> Result<UpstreamCoin, UpstreamError>;
}
