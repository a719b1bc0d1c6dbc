use crate::errors::ApiError;
use crate::models::{CoinDetail, MarketListItem};
use crate::upstream::MarketData;
use std::sync::Arc;

pub const DEFAULT_PAGE: &str = "1";
pub const DEFAULT_PER_PAGE: &str = "10";

const MARKETS_FAILED: &str = "Failed to fetch coin markets";
const DETAIL_FAILED: &str = "Failed to fetch coin details";

/// Fetches upstream documents and reduces them to the public projections.
/// Cheap to clone; shared by every handler.
#[derive(Clone)]
pub struct CoinService {
    upstream: Arc<dyn MarketData>,
}

impl CoinService {
    pub fn new(upstream: Arc<dyn MarketData>) -> Self {
        Self { upstream }
    }

    /// One page of the market listing. Blank or missing paging values fall
    /// back to the defaults; anything else goes upstream untouched.
    pub async fn markets(
        &self,
        page: Option<&str>,
        per_page: Option<&str>,
    ) -> Result<Vec<MarketListItem>, ApiError> {
        let page = page.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_PAGE);
        let per_page = per_page.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_PER_PAGE);

        match self.upstream.fetch_markets(page, per_page).await {
            Ok(markets) => Ok(markets.into_iter().map(MarketListItem::from).collect()),
            Err(e) => {
                tracing::error!(
                    "[{}] failed to fetch coin markets (page={}, per_page={}): {}",
                    self.upstream.name(),
                    page,
                    per_page,
                    e
                );
                Err(ApiError::Internal(MARKETS_FAILED.to_string()))
            }
        }
    }

    /// Detail projection for a single coin. An empty id is rejected before
    /// anything is sent upstream.
    pub async fn coin_detail(&self, id: &str) -> Result<CoinDetail, ApiError> {
        if id.is_empty() {
            return Err(ApiError::BadRequest("Coin ID is required".to_string()));
        }

        match self.upstream.fetch_coin(id).await {
            Ok(coin) => Ok(CoinDetail::from(coin)),
            Err(e) if e.is_not_found() => {
                Err(ApiError::NotFound(format!("Coin with ID \"{id}\" not found.")))
            }
            Err(e) => {
                tracing::error!(
                    "[{}] failed to fetch coin details for {}: {}",
                    self.upstream.name(),
                    id,
                    e
                );
                Err(ApiError::Internal(DETAIL_FAILED.to_string()))
            }
        }
    }
}
