/// Raw query pairs in request order. Deserializing into pairs instead of a
/// struct keeps repeated keys from being rejected.
pub type QueryPairs = Vec<(String, String)>;

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Query for GET /api/coins/markets. Values stay strings so that whatever
/// the caller sent reaches upstream unchanged; a repeated key keeps its
/// first value.
#[derive(Debug, Default, PartialEq)]
pub struct MarketsQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl MarketsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            per_page: first_value(pairs, "per_page"),
        }
    }
}

/// Query for GET /
#[derive(Debug, Default)]
pub struct ListPageQuery {
    pub page: Option<String>,
}

impl ListPageQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
        }
    }

    /// Positive page number, 1 for anything unparsable.
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}
