use super::models::{ListPageQuery, MarketsQuery, QueryPairs};
use crate::errors::ApiError;
use crate::models::{CoinDetail, MarketListItem};
use crate::proxy::CoinService;
use crate::views::{DetailController, ListController};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Json},
};

/// GET /health - simple liveness check
pub async fn health() -> &'static str {
    "OK"
}

/// GET /api/coins/markets - one page of the market listing
pub async fn get_markets(
    State(service): State<CoinService>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Vec<MarketListItem>>, ApiError> {
    let query = MarketsQuery::from_pairs(&pairs);
    let items = service
        .markets(query.page.as_deref(), query.per_page.as_deref())
        .await?;
    Ok(Json(items))
}

/// GET /api/coins/{id} - detail projection for one coin
pub async fn get_coin(
    State(service): State<CoinService>,
    Path(id): Path<String>,
) -> Result<Json<CoinDetail>, ApiError> {
    let coin = service.coin_detail(&id).await?;
    Ok(Json(coin))
}

/// GET /api/coins/ - same validation path as an empty id
pub async fn get_coin_without_id(
    State(service): State<CoinService>,
) -> Result<Json<CoinDetail>, ApiError> {
    let coin = service.coin_detail("").await?;
    Ok(Json(coin))
}

/// GET / - list page
pub async fn list_page(
    State(service): State<CoinService>,
    Query(pairs): Query<QueryPairs>,
) -> Html<String> {
    let query = ListPageQuery::from_pairs(&pairs);
    let mut list = ListController::new(service);
    list.load(query.page()).await;
    Html(list.render())
}

/// GET /coins/{id} - detail page
pub async fn coin_page(
    State(service): State<CoinService>,
    Path(id): Path<String>,
) -> Html<String> {
    let mut detail = DetailController::new(service);
    detail.load(id).await;
    Html(detail.render())
}

/// GET /api/placeholder/{width}/{height} - neutral icon used when a coin
/// image fails to load
pub async fn placeholder_icon(Path((width, height)): Path<(u32, u32)>) -> impl IntoResponse {
    let width = width.clamp(1, 1024);
    let height = height.clamp(1, 1024);
    let radius = width.min(height) / 2;

    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><circle cx="{cx}" cy="{cy}" r="{radius}" fill="#cccccc"/></svg>"##,
        cx = width / 2,
        cy = height / 2,
    );

    ([(header::CONTENT_TYPE, "image/svg+xml")], svg)
}
