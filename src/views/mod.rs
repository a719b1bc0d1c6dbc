//! Server-rendered pages. Each page has a controller that owns the fetch
//! and its state, and a pure function that turns that state into HTML.

pub mod detail;
pub mod format;
pub mod html;
pub mod list;

use crate::errors::ApiError;
use crate::models::{CoinDetail, MarketListItem};
use crate::proxy::CoinService;
use async_trait::async_trait;

pub use detail::DetailController;
pub use list::ListController;

/// Lifecycle of a single page fetch. There is no retry and no cache:
/// every `load` starts again from `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Where the views get their data from.
#[async_trait]
pub trait CoinSource: Send + Sync {
    async fn load_markets(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<MarketListItem>, ApiError>;

    async fn load_coin(&self, id: &str) -> Result<CoinDetail, ApiError>;
}

#[async_trait]
impl CoinSource for CoinService {
    async fn load_markets(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<MarketListItem>, ApiError> {
        let page = page.to_string();
        let per_page = per_page.to_string();
        self.markets(Some(&page), Some(&per_page)).await
    }

    async fn load_coin(&self, id: &str) -> Result<CoinDetail, ApiError> {
        self.coin_detail(id).await
    }
}
