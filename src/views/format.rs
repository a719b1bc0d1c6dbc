/// Colour/arrow of a percentage change. Zero counts as up, and so does a
/// missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn of(change: Option<f64>) -> Self {
        if change.unwrap_or(0.0) >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "↗️",
            Direction::Down => "↘️",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceChange {
    pub direction: Direction,
    pub text: String,
}

/// `2.1` -> `+2.10%`, `-3.456` -> `-3.46%`, `None` -> `N/A`.
pub fn price_change(change: Option<f64>) -> PriceChange {
    let direction = Direction::of(change);
    let text = match change {
        // + 0.0 turns -0.0 into 0.0 so it never prints as "+-0.00%"
        Some(v) if direction == Direction::Up => format!("+{:.2}%", v + 0.0),
        Some(v) => format!("{:.2}%", v),
        None => "N/A".to_string(),
    };
    PriceChange { direction, text }
}

/// `64000.5` -> `$64000.50`
pub fn price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => "N/A".to_string(),
    }
}
