//! Summary statistics over a filtered product set.

use crate::constants::{COMMON_WORDS_SKIP, COMMON_WORDS_TAKE, WORD_SEPARATORS};
use crate::{Product, ProductsDetails};
use std::collections::{HashMap, HashSet};

/// Compute price range, distinct sizes and common words for `products`.
///
/// An empty set yields the default details (zero prices, no sizes, no words). Descriptions must
/// be un-highlighted, otherwise markup is counted as words.
pub fn summarize(products: &[Product]) -> ProductsDetails {
    let Some(first) = products.first() else {
        return ProductsDetails::default();
    };

    let (min_price, max_price) = products
        .iter()
        .fold((first.price, first.price), |(min, max), p| {
            (min.min(p.price), max.max(p.price))
        });

    ProductsDetails {
        min_price,
        max_price,
        sizes: distinct_sizes(products),
        common_words: common_words(products),
    }
}

/// Every declared size once, in the order first seen.
fn distinct_sizes(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sizes = Vec::new();
    for size in products.iter().flat_map(Product::size_labels) {
        if seen.insert(size.as_str()) {
            sizes.push(size.clone());
        }
    }
    sizes
}

/// Lower-cased description tokens ranked by frequency, skipping the most frequent ones.
///
/// Ties keep the order in which tokens were first seen.
fn common_words(products: &[Product]) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let tokens = products.iter().flat_map(|p| {
        p.description_text()
            .split(WORD_SEPARATORS)
            .filter(|token| !token.is_empty())
    });

    for token in tokens {
        let word = token.to_lowercase();
        match index.get(&word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .skip(COMMON_WORDS_SKIP)
        .take(COMMON_WORDS_TAKE)
        .map(|(word, _)| word)
        .collect()
}
