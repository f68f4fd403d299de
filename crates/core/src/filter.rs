//! Price and size filtering of a product collection.

use crate::criteria::parse_csv_list;
use crate::Product;
use rust_decimal::Decimal;

/// Narrow `products` by inclusive price bounds and a comma-separated size list.
///
/// Each bound applies independently when present. A size list that is blank after trimming is
/// ignored; otherwise a product is kept when any of its sizes matches any parsed entry,
/// compared case-insensitively. A list of only separators (`" , "`) is active and matches
/// nothing. Products without sizes never match an active size filter.
///
/// The input is left untouched and relative order is preserved.
pub fn filter_products(
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    sizes: Option<&str>,
    products: &[Product],
) -> Vec<Product> {
    let requested_sizes = sizes
        .filter(|raw| !raw.trim().is_empty())
        .map(parse_csv_list);

    products
        .iter()
        .filter(|p| min_price.map_or(true, |min| p.price >= min))
        .filter(|p| max_price.map_or(true, |max| p.price <= max))
        .filter(|p| {
            requested_sizes
                .as_deref()
                .map_or(true, |requested| has_any_size(p, requested))
        })
        .cloned()
        .collect()
}

fn has_any_size(product: &Product, requested: &[String]) -> bool {
    product
        .size_labels()
        .iter()
        .any(|size| requested.iter().any(|r| eq_ignore_case(size, r)))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
