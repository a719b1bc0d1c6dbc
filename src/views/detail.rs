use super::format::{price, price_change};
use super::html::{document, escape, status_title};
use super::{CoinSource, ViewState};
use crate::models::CoinDetail;

const LOAD_FAILED: &str = "Failed to load coin details. Please try again later.";

pub struct DetailController<S> {
    source: S,
    id: Option<String>,
    state: ViewState<CoinDetail>,
}

impl<S: CoinSource> DetailController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            id: None,
            state: ViewState::Idle,
        }
    }

    /// The id of the last `load`, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &ViewState<CoinDetail> {
        &self.state
    }

    pub async fn load(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.state = ViewState::Loading;

        self.state = match self.source.load_coin(&id).await {
            Ok(coin) => ViewState::Success(coin),
            Err(e) => {
                tracing::warn!("detail view failed to load {}: {}", id, e);
                ViewState::Error(LOAD_FAILED.to_string())
            }
        };
        self.id = Some(id);
    }

    pub fn render(&self) -> String {
        render(&self.state)
    }
}

pub fn render(state: &ViewState<CoinDetail>) -> String {
    match state {
        ViewState::Idle => document("Coin details", &status_title("No coin data found.", None)),
        ViewState::Loading => {
            document("Coin details", &status_title("Loading coin details...", None))
        }
        ViewState::Error(message) => document(
            "Coin details",
            &status_title(&format!("Error: {message}"), Some("error")),
        ),
        ViewState::Success(coin) => document(&coin.name, &render_coin(coin)),
    }
}

fn render_coin(coin: &CoinDetail) -> String {
    let mut cards = vec![
        value_card("Current Price", &price(coin.current_price)),
        value_card("24h High", &price(coin.high_24h)),
        value_card("24h Low", &price(coin.low_24h)),
    ];

    let changes = [
        ("24h Change", coin.price_change_percentage_24h),
        ("7d Change", coin.price_change_percentage_7d),
        ("14d Change", coin.price_change_percentage_14d),
        ("1m Change", coin.price_change_percentage_30d),
        ("2m Change", coin.price_change_percentage_60d),
        ("200d Change", coin.price_change_percentage_200d),
        ("1y Change", coin.price_change_percentage_1y),
    ];
    cards.extend(changes.iter().map(|(label, value)| change_card(label, *value)));

    // The description is upstream HTML and goes in unescaped.
    format!(
        r#"<button class="back-button" onclick="history.back()">← Back to List</button>
{title}
<div class="description">{description}</div>
<div class="data-grid">
{cards}</div>"#,
        title = status_title(&coin.name, None),
        description = coin.description,
        cards = cards.concat(),
    )
}

fn value_card(label: &str, value: &str) -> String {
    format!(
        "<div class=\"data-card\"><p class=\"data-label\">{label}</p><p class=\"data-value\">{value}</p></div>\n"
    )
}

fn change_card(label: &str, value: Option<f64>) -> String {
    let change = price_change(value);
    format!(
        "<div class=\"data-card\"><p class=\"data-label\">{label}</p><p class=\"data-value {}\">{} {}</p></div>\n",
        change.direction.css_class(),
        change.direction.arrow(),
        escape(&change.text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::models::MarketListItem;
    use async_trait::async_trait;

    struct FakeSource;

    fn detail(id: &str) -> CoinDetail {
        CoinDetail {
            id: id.to_string(),
            name: "Bitcoin".to_string(),
            description: r#"Bitcoin is the <a href="https://bitcoin.org">first</a> coin."#.to_string(),
            current_price: Some(64000.5),
            price_change_percentage_24h: Some(-3.456),
            price_change_percentage_7d: Some(2.1),
            price_change_percentage_14d: Some(0.0),
            price_change_percentage_30d: None,
            price_change_percentage_60d: Some(10.0),
            price_change_percentage_200d: Some(-1.0),
            price_change_percentage_1y: Some(120.0),
            high_24h: Some(65000.0),
            low_24h: Some(63000.0),
        }
    }

    #[async_trait]
    impl CoinSource for FakeSource {
        async fn load_markets(
            &self,
            _page: u32,
            _per_page: u32,
        ) -> Result<Vec<MarketListItem>, ApiError> {
            unreachable!("detail view never loads the list")
        }

        async fn load_coin(&self, id: &str) -> Result<CoinDetail, ApiError> {
            match id {
                "bitcoin" => Ok(detail(id)),
                _ => Err(ApiError::NotFound(format!("Coin with ID \"{id}\" not found."))),
            }
        }
    }

    #[tokio::test]
    async fn idle_until_an_id_is_loaded() {
        let view = DetailController::new(FakeSource);
        assert_eq!(view.id(), None);
        assert!(view.render().contains("No coin data found."));
    }

    #[tokio::test]
    async fn loads_and_renders_the_coin() {
        let mut view = DetailController::new(FakeSource);

        view.load("bitcoin").await;

        assert_eq!(view.id(), Some("bitcoin"));
        assert_eq!(view.state(), &ViewState::Success(detail("bitcoin")));

        let html = view.render();
        assert!(html.contains(r#"<a href="https://bitcoin.org">first</a>"#));
        assert!(html.contains("history.back()"));
        assert!(html.contains("$64000.50"));
        assert!(html.contains(r#"<p class="data-value down">↘️ -3.46%</p>"#));
        assert!(html.contains(r#"<p class="data-value up">↗️ +2.10%</p>"#));
        assert!(html.contains(r#"<p class="data-value up">↗️ +0.00%</p>"#));
        assert!(html.contains("1m Change"));
        assert!(html.contains("N/A"));
    }

    #[tokio::test]
    async fn failure_is_reported_generically() {
        let mut view = DetailController::new(FakeSource);

        view.load("nope").await;

        assert_eq!(view.id(), Some("nope"));
        assert_eq!(
            view.state(),
            &ViewState::Error("Failed to load coin details. Please try again later.".into())
        );
        assert!(!view.render().contains("not found"));
    }

    #[test]
    fn seven_change_cards_in_order() {
        let html = render(&ViewState::Success(detail("bitcoin")));
        let labels = [
            "24h Change",
            "7d Change",
            "14d Change",
            "1m Change",
            "2m Change",
            "200d Change",
            "1y Change",
        ];

        let positions: Vec<_> = labels.iter().map(|l| html.find(l).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
