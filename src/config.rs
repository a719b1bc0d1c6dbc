use anyhow::Context;
use std::env;

pub const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_port: u16,
    /// CoinGecko demo key. Its absence is only reported when a request needs it.
    pub coingecko_api_key: Option<String>,
    pub coingecko_base_url: String,
    /// `LOG_FORMAT=json` switches the subscriber to JSON lines.
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_port = get("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("API_PORT must be a valid port number (1-65535)")?;

        // an empty key is as good as no key
        let coingecko_api_key = get("COINGECKO_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let coingecko_base_url = get("COINGECKO_BASE_URL")
            .unwrap_or_else(|| DEFAULT_COINGECKO_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let log_json = get("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        Ok(Self {
            api_port,
            coingecko_api_key,
            coingecko_base_url,
            log_json,
        })
    }
}
