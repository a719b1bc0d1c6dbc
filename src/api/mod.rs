pub mod handlers;
pub mod models;
pub mod router;

use crate::config::Config;
use crate::proxy::CoinService;
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use std::net::SocketAddr;

pub struct ApiServer {
    service: CoinService,
}

impl ApiServer {
    pub fn new(service: CoinService) -> Self {
        Self { service }
    }

    /// Binds the server to the configured port, adds the Prometheus layer
    /// and serves until Ctrl+C.
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        // installs the global metrics recorder, so only once per process
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

        let app = router::build(self.service)
            .route("/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));

        tracing::info!("API server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
