use crate::upstream::{UpstreamCoin, UpstreamMarket};
use serde::{Deserialize, Serialize};

/// A coin as shown on the list page. Field order here is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListItem {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub image: String,
}

impl From<UpstreamMarket> for MarketListItem {
    fn from(m: UpstreamMarket) -> Self {
        Self {
            id: m.id,
            name: m.name,
            symbol: m.symbol,
            current_price: m.current_price,
            high_24h: m.high_24h,
            low_24h: m.low_24h,
            price_change_percentage_24h: m.price_change_percentage_24h,
            image: m.image,
        }
    }
}

/// A coin as shown on its detail page. `description` is upstream HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_14d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub price_change_percentage_60d: Option<f64>,
    pub price_change_percentage_200d: Option<f64>,
    pub price_change_percentage_1y: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
}

impl From<UpstreamCoin> for CoinDetail {
    fn from(c: UpstreamCoin) -> Self {
        let md = c.market_data;
        Self {
            id: c.id,
            name: c.name,
            description: c.description.en.unwrap_or_default(),
            current_price: md.current_price.usd,
            price_change_percentage_24h: md.price_change_percentage_24h,
            price_change_percentage_7d: md.price_change_percentage_7d,
            price_change_percentage_14d: md.price_change_percentage_14d,
            price_change_percentage_30d: md.price_change_percentage_30d,
            price_change_percentage_60d: md.price_change_percentage_60d,
            price_change_percentage_200d: md.price_change_percentage_200d,
            price_change_percentage_1y: md.price_change_percentage_1y,
            high_24h: md.high_24h.usd,
            low_24h: md.low_24h.usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn market_projection_keeps_only_listed_fields() {
        let upstream: UpstreamMarket = serde_json::from_value(json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://img/btc.png",
            "current_price": 64000.5,
            "market_cap": 1_260_000_000_000u64,
            "market_cap_rank": 1,
            "high_24h": 65000.0,
            "low_24h": 63000.0,
            "price_change_percentage_24h": -1.25,
            "ath": 73000.0,
            "roi": null
        }))
        .unwrap();

        let value = serde_json::to_value(MarketListItem::from(upstream)).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        let mut expected = vec![
            "id",
            "name",
            "symbol",
            "current_price",
            "high_24h",
            "low_24h",
            "price_change_percentage_24h",
            "image",
        ];
        expected.sort();
        assert_eq!(keys, expected);
        assert_eq!(value["price_change_percentage_24h"], json!(-1.25));
    }

    #[test]
    fn missing_market_numbers_become_null() {
        let upstream: UpstreamMarket = serde_json::from_value(json!({
            "id": "newcoin",
            "symbol": "new",
            "name": "New Coin",
            "image": "https://img/new.png",
            "current_price": null
        }))
        .unwrap();

        let value = serde_json::to_value(MarketListItem::from(upstream)).unwrap();
        assert!(value["current_price"].is_null());
        assert!(value["high_24h"].is_null());
        assert!(value["price_change_percentage_24h"].is_null());
    }

    #[test]
    fn detail_projection_reads_english_description_and_usd() {
        let upstream: UpstreamCoin = serde_json::from_value(json!({
            "id": "ethereum",
            "name": "Ethereum",
            "symbol": "eth",
            "description": { "en": "<b>Ethereum</b> is a platform", "de": "Plattform" },
            "market_data": {
                "current_price": { "usd": 3100.0, "eur": 2900.0 },
                "high_24h": { "usd": 3200.0 },
                "low_24h": { "usd": 3000.0 },
                "price_change_percentage_24h": 2.1,
                "price_change_percentage_7d": -3.456,
                "price_change_percentage_14d": 0.0,
                "price_change_percentage_30d": 10.0,
                "price_change_percentage_60d": 12.5,
                "price_change_percentage_200d": -40.0,
                "price_change_percentage_1y": 80.0,
                "market_cap": { "usd": 1.0 }
            }
        }))
        .unwrap();

        let detail = CoinDetail::from(upstream);
        assert_eq!(detail.description, "<b>Ethereum</b> is a platform");
        assert_eq!(detail.current_price, Some(3100.0));
        assert_eq!(detail.high_24h, Some(3200.0));
        assert_eq!(detail.low_24h, Some(3000.0));
        assert_eq!(detail.price_change_percentage_7d, Some(-3.456));
        assert_eq!(detail.price_change_percentage_1y, Some(80.0));
    }

    #[test]
    fn detail_without_market_data_does_not_parse() {
        let result = serde_json::from_value::<UpstreamCoin>(json!({
            "id": "ghost",
            "name": "Ghost",
            "description": { "en": "" }
        }));

        assert!(result.is_err());
    }
}
