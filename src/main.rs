use coinscope::api::ApiServer;
use coinscope::config::Config;
use coinscope::proxy::CoinService;
use coinscope::upstream::CoinGecko;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        "coinscope starting: upstream {} on port {}",
        config.coingecko_base_url,
        config.api_port
    );

    if config.coingecko_api_key.is_none() {
        tracing::warn!("COINGECKO_API_KEY is not set, every upstream request will fail");
    }

    let upstream = Arc::new(CoinGecko::new(&config));
    let service = CoinService::new(upstream);

    ApiServer::new(service).run(config).await
}
