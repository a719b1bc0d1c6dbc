use super::format::{price, price_change};
use super::html::{coin_path, document, escape, status_title};
use super::{CoinSource, ViewState};
use crate::models::MarketListItem;

/// Fixed page size of the list view.
pub const COINS_PER_PAGE: u32 = 12;

pub const PLACEHOLDER_ICON: &str = "/api/placeholder/32/32";

const LOAD_FAILED: &str = "Failed to load cryptocurrency data. Please try again later.";

/// Paginated market list. Each `load` replaces the whole set; there is no
/// known last page, so `next` always moves forward.
pub struct ListController<S> {
    source: S,
    page: u32,
    state: ViewState<Vec<MarketListItem>>,
}

impl<S: CoinSource> ListController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            page: 1,
            state: ViewState::Idle,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn state(&self) -> &ViewState<Vec<MarketListItem>> {
        &self.state
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    /// Fetches `page` (clamped to 1) and replaces the current state with
    /// the result.
    pub async fn load(&mut self, page: u32) {
        self.page = page.max(1);
        self.state = ViewState::Loading;

        self.state = match self.source.load_markets(self.page, COINS_PER_PAGE).await {
            Ok(items) => ViewState::Success(items),
            Err(e) => {
                tracing::warn!("list view failed to load page {}: {}", self.page, e);
                ViewState::Error(LOAD_FAILED.to_string())
            }
        };
    }

    pub async fn next(&mut self) {
        self.load(self.page.saturating_add(1)).await;
    }

    pub async fn previous(&mut self) {
        self.load(self.page.saturating_sub(1)).await;
    }

    pub fn render(&self) -> String {
        render(self.page, &self.state)
    }
}

/// Renders the list page for the given page number and state.
pub fn render(page: u32, state: &ViewState<Vec<MarketListItem>>) -> String {
    let body = match state {
        ViewState::Idle | ViewState::Loading => status_title("Loading cryptocurrencies...", None),
        ViewState::Error(message) => status_title(&format!("Error: {message}"), Some("error")),
        ViewState::Success(items) => {
            let cards: String = items.iter().map(render_card).collect();
            format!(
                "{}\n<div class=\"coin-list\">\n{}</div>\n{}",
                status_title("Top Cryptocurrencies", None),
                cards,
                render_pagination(page)
            )
        }
    };

    document("Top Cryptocurrencies", &body)
}

fn render_card(coin: &MarketListItem) -> String {
    let change = price_change(coin.price_change_percentage_24h);
    let name = escape(&coin.name);

    format!(
        r#"<a class="coin-card" href="{href}">
  <div class="coin-header">
    <img class="coin-icon" src="{image}" alt="{name} icon" onerror="this.onerror=null;this.src='{PLACEHOLDER_ICON}'">
    <div>
      <h2 class="coin-name">{name}</h2>
      <p class="coin-symbol">{symbol}</p>
    </div>
  </div>
  <p class="coin-price">{price}</p>
  <div class="price-change {class}"><span class="price-change-icon">{arrow}</span>{change}</div>
  <p class="price-range">High (24h): {high}</p>
  <p class="price-range">Low (24h): {low}</p>
</a>
"#,
        href = escape(&coin_path(&coin.id)),
        image = escape(&coin.image),
        symbol = escape(&coin.symbol),
        price = price(coin.current_price),
        class = change.direction.css_class(),
        arrow = change.direction.arrow(),
        change = change.text,
        high = price(coin.high_24h),
        low = price(coin.low_24h),
    )
}

fn render_pagination(page: u32) -> String {
    let previous = if page > 1 {
        format!(r#"<a class="page-button" href="/?page={}">Previous</a>"#, page - 1)
    } else {
        r#"<span class="page-button disabled" aria-disabled="true">Previous</span>"#.to_string()
    };
    let next = format!(
        r#"<a class="page-button" href="/?page={}">Next</a>"#,
        page.saturating_add(1)
    );

    format!("<nav class=\"pagination\">{previous}{next}</nav>")
}
