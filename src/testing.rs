//! In-memory upstream used by unit tests.

use crate::errors::UpstreamError;
use crate::upstream::{
    CurrencyMap, LocalizedText, MarketData, UpstreamCoin, UpstreamMarket, UpstreamMarketData,
};
use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Failure {
    Status(StatusCode),
    MissingKey,
}

#[derive(Default)]
pub struct StubUpstream {
    markets: Vec<UpstreamMarket>,
    coins: Vec<UpstreamCoin>,
    failure: Option<Failure>,
    calls: AtomicUsize,
    market_requests: Mutex<Vec<(String, String)>>,
}

impl StubUpstream {
    pub fn with_markets(markets: Vec<UpstreamMarket>) -> Self {
        Self {
            markets,
            ..Default::default()
        }
    }

    pub fn with_coin(coin: UpstreamCoin) -> Self {
        Self {
            coins: vec![coin],
            ..Default::default()
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            failure: Some(Failure::Status(status)),
            ..Default::default()
        }
    }

    pub fn without_key() -> Self {
        Self {
            failure: Some(Failure::MissingKey),
            ..Default::default()
        }
    }

    /// Number of upstream calls made so far, of either kind.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn market_requests(&self) -> Vec<(String, String)> {
        self.market_requests.lock().unwrap().clone()
    }

    fn fail(&self) -> Option<UpstreamError> {
        self.failure.as_ref().map(|f| match f {
            Failure::Status(status) => UpstreamError::Status(*status),
            Failure::MissingKey => UpstreamError::MissingApiKey,
        })
    }
}

#[async_trait]
impl MarketData for StubUpstream {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn fetch_markets(
        &self,
        page: &str,
        per_page: &str,
    ) -> Result<Vec<UpstreamMarket>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.market_requests
            .lock()
            .unwrap()
            .push((page.to_string(), per_page.to_string()));

        match self.fail() {
            Some(e) => Err(e),
            None => Ok(self.markets.clone()),
        }
    }

    async fn fetch_coin(&self, id: &str) -> Result<UpstreamCoin, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(e) = self.fail() {
            return Err(e);
        }

        self.coins
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(UpstreamError::Status(StatusCode::NOT_FOUND))
    }
}

pub fn market(id: &str, change_24h: f64) -> UpstreamMarket {
    UpstreamMarket {
        id: id.to_string(),
        name: id.to_uppercase(),
        symbol: id[..3.min(id.len())].to_string(),
        current_price: Some(100.0),
        high_24h: Some(110.0),
        low_24h: Some(90.0),
        price_change_percentage_24h: Some(change_24h),
        image: format!("https://img.example/{id}.png"),
    }
}

pub fn coin(id: &str) -> UpstreamCoin {
    let usd = |v: f64| CurrencyMap { usd: Some(v) };
    UpstreamCoin {
        id: id.to_string(),
        name: id.to_uppercase(),
        description: LocalizedText {
            en: Some(format!("<p>{id} is a coin</p>")),
        },
        market_data: UpstreamMarketData {
            current_price: usd(100.0),
            high_24h: usd(110.0),
            low_24h: usd(90.0),
            price_change_percentage_24h: Some(2.1),
            price_change_percentage_7d: Some(-3.456),
            price_change_percentage_14d: Some(0.0),
            price_change_percentage_30d: Some(5.0),
            price_change_percentage_60d: None,
            price_change_percentage_200d: Some(-12.0),
            price_change_percentage_1y: Some(150.25),
        },
    }
}
