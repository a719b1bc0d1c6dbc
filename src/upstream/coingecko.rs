use super::{MarketData, UpstreamCoin, UpstreamMarket};
use crate::config::Config;
use crate::errors::UpstreamError;
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Instant;

/// CoinGecko v3 REST client. The API key is taken from the config once,
/// at construction, and appended to every request.
pub struct CoinGecko {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CoinGecko {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.coingecko_base_url.clone(),
            api_key: config.coingecko_api_key.clone(),
        }
    }

    fn api_key(&self) -> Result<&str, UpstreamError> {
        self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)
    }

    /// Appends `segments` to the base path (each one percent-encoded) and
    /// `params` plus the API key to the query string.
    fn endpoint_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Url, UpstreamError> {
        let api_key = self.api_key()?;

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| UpstreamError::UnexpectedData(format!("invalid base url: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| UpstreamError::UnexpectedData("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);

        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("x_cg_demo_api_key", api_key);

        Ok(url)
    }

    /// Sends a GET, checks the status and decodes the body. Every call is
    /// counted and timed per endpoint.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<T, UpstreamError> {
        let started = Instant::now();

        let result = self
            .fetch_body(url)
            .await
            .and_then(|body| serde_json::from_str::<T>(&body).map_err(UpstreamError::Parse));

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) if e.is_not_found() => "not_found",
            Err(_) => "error",
        };

        metrics::histogram!("coinscope_upstream_request_duration_seconds", "endpoint" => endpoint)
            .record(started.elapsed().as_secs_f64());
        metrics::counter!(
            "coinscope_upstream_requests_total",
            "endpoint" => endpoint,
            "outcome" => outcome
        )
        .increment(1);

        result
    }

    async fn fetch_body(&self, url: Url) -> Result<String, UpstreamError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            // body is only useful for the log, never for the caller
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("[{}] {} response body: {}", self.name(), status, body);
            return Err(UpstreamError::Status(status));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl MarketData for CoinGecko {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn fetch_markets(
        &self,
        page: &str,
        per_page: &str,
    ) -> Result<Vec<UpstreamMarket>, UpstreamError> {
        let url = self.endpoint_url(
            &["coins", "markets"],
            &[
                ("vs_currency", "usd"),
                ("order", "market_cap_desc"),
                ("per_page", per_page),
                ("page", page),
                ("sparkline", "false"),
            ],
        )?;

        tracing::debug!("[{}] fetching markets page={} per_page={}", self.name(), page, per_page);

        self.get_json("markets", url).await
    }

    async fn fetch_coin(&self, id: &str) -> Result<UpstreamCoin, UpstreamError> {
        let url = self.endpoint_url(
            &["coins", id],
            &[
                ("localization", "false"),
                ("tickers", "false"),
                ("market_data", "true"),
                ("community_data", "false"),
                ("developer_data", "false"),
                ("sparkline", "false"),
            ],
        )?;

        tracing::debug!("[{}] fetching coin {}", self.name(), id);

        let coin: Result<UpstreamCoin, UpstreamError> = self.get_json("coin", url).await;
        if coin.as_ref().is_err_and(|e| e.is_not_found()) {
            tracing::warn!("[{}] unknown coin id {}", self.name(), id);
        }
        coin
    }
}
