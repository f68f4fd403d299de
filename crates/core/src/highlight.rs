//! Keyword highlighting in product descriptions.
//!
//! Every case-insensitive occurrence of a keyword is wrapped in [`HIGHLIGHT_OPEN`] and
//! [`HIGHLIGHT_CLOSE`], keeping the casing of the matched text.
//!
//! Keywords are applied one after another, each pass searching the output of the previous one.
//! Markup inserted by an earlier keyword is therefore visible to later keywords: highlighting
//! `"em"` after `"green"` also wraps the `em` inside `<em>`. Callers relying on clean markup
//! should pass keywords that cannot occur in it.

use crate::constants::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use crate::criteria::parse_csv_list;
use crate::Product;

/// Highlight each keyword of a comma-separated list in every product description.
///
/// Returns new products; title, price and sizes are carried over unchanged. An absent
/// description stays absent. When `keywords` parses to nothing the products are returned as-is.
pub fn highlight_products(keywords: Option<&str>, products: &[Product]) -> Vec<Product> {
    let words = keywords.map(parse_csv_list).unwrap_or_default();

    let mut highlighted = products.to_vec();
    for word in &words {
        highlighted = highlighted
            .iter()
            .map(|p| Product {
                title: p.title.clone(),
                price: p.price,
                sizes: p.sizes.clone(),
                description: p
                    .description
                    .as_deref()
                    .map(|text| highlight_word(text, word)),
            })
            .collect();
    }

    highlighted
}

/// Wrap every case-insensitive occurrence of `word` in `description`.
///
/// Matches are found left to right without overlap. An empty `word` leaves the text unchanged.
pub fn highlight_word(description: &str, word: &str) -> String {
    if word.is_empty() {
        return description.to_owned();
    }

    let mut out = String::with_capacity(description.len());
    let mut rest = description;

    while let Some(ch) = rest.chars().next() {
        match match_len_ignore_case(rest, word) {
            Some(len) => {
                out.push_str(HIGHLIGHT_OPEN);
                out.push_str(&rest[..len]);
                out.push_str(HIGHLIGHT_CLOSE);
                rest = &rest[len..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

/// Byte length of the prefix of `haystack` that equals `needle` ignoring case.
fn match_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    let mut consumed = 0;

    for n in needle.chars() {
        let (idx, h) = hay.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
        consumed = idx + h.len_utf8();
    }

    Some(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(description: Option<&str>) -> Product {
        Product {
            title: Some("Test Product".into()),
            price: Decimal::from(10),
            sizes: Some(vec!["small".into()]),
            description: description.map(str::to_owned),
        }
    }

    #[test]
    fn test_highlight_with_valid_words_returns_highlighted_descriptions() {
        let products = vec![product(Some("This is a green product."))];

        let result = highlight_products(Some("green"), &products);

        assert_eq!(
            result[0].description.as_deref(),
            Some("This is a <em>green</em> product.")
        );
    }

    #[test]
    fn test_highlight_no_words_returns_original_descriptions() {
        let products = vec![product(Some("This is a red product."))];

        assert_eq!(highlight_products(Some(""), &products), products);
        assert_eq!(highlight_products(Some(" , "), &products), products);
        assert_eq!(highlight_products(None, &products), products);
    }

    #[test]
    fn test_highlight_word_case_insensitive_keeps_original_casing() {
        let result = highlight_word("This is a green product.", "Green");
        assert_eq!(result, "This is a <em>green</em> product.");
    }

    #[test]
    fn test_highlight_word_wraps_every_occurrence() {
        let result = highlight_word("Green shirt, GREEN socks, greenish hat", "green");
        assert_eq!(
            result,
            "<em>Green</em> shirt, <em>GREEN</em> socks, <em>green</em>ish hat"
        );
    }

    #[test]
    fn test_highlight_word_handles_multibyte_text() {
        let result = highlight_word("Café CAFÉ café", "café");
        assert_eq!(result, "<em>Café</em> <em>CAFÉ</em> <em>café</em>");
    }

    #[test]
    fn test_highlight_word_empty_word_is_noop() {
        assert_eq!(highlight_word("anything", ""), "anything");
    }

    #[test]
    fn test_highlight_multiple_keywords_in_order() {
        let products = vec![product(Some("A green shirt and red trousers."))];

        let result = highlight_products(Some("green, red"), &products);

        assert_eq!(
            result[0].description.as_deref(),
            Some("A <em>green</em> shirt and <em>red</em> trousers.")
        );
    }

    #[test]
    fn test_highlight_later_keywords_see_earlier_markup() {
        let products = vec![product(Some("green"))];

        let result = highlight_products(Some("green,em"), &products);

        assert_eq!(
            result[0].description.as_deref(),
            Some("<<em>em</em>>green</<em>em</em>>")
        );
    }

    #[test]
    fn test_highlight_repeated_application_rewraps() {
        let once = highlight_word("green", "green");
        let twice = highlight_word(&once, "green");

        assert_eq!(twice, "<em><em>green</em></em>");
    }

    #[test]
    fn test_highlight_keeps_other_fields_and_input() {
        let products = vec![product(Some("green")), product(None)];

        let result = highlight_products(Some("green"), &products);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, products[0].title);
        assert_eq!(result[0].price, products[0].price);
        assert_eq!(result[0].sizes, products[0].sizes);
        assert_eq!(result[1].description, None);
        assert_eq!(products[0].description.as_deref(), Some("green"));
    }
}
