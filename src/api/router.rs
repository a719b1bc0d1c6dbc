use super::handlers;
use crate::proxy::CoinService;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the full Axum router: JSON proxies, rendered pages and the
/// placeholder icon, all sharing one `CoinService`.
pub fn build(service: CoinService) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/coins/markets", get(handlers::get_markets))
        .route("/api/coins/", get(handlers::get_coin_without_id))
        .route("/api/coins/{id}", get(handlers::get_coin))
        .route(
            "/api/placeholder/{width}/{height}",
            get(handlers::placeholder_icon),
        )
        .route("/", get(handlers::list_page))
        .route("/coins/{id}", get(handlers::coin_page))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
