//! Request criteria for narrowing and decorating a product catalog.

use rust_decimal::Decimal;

/// Optional constraints supplied with a product search.
///
/// `sizes` and `highlight` carry the raw comma-separated strings as received; they are parsed
/// with [`parse_csv_list`] by the stages that consume them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sizes: Option<String>,
    pub highlight: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_price(mut self, min_price: Decimal) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: Decimal) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlight = Some(highlight.into());
        self
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_csv_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
