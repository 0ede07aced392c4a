//! Tag search
//!
//! A product matches a term when any of its tag titles contains the term,
//! ignoring case. Products without tags never match a non-empty term.

use crate::core::product::Product;

/// Normalize a raw search term for matching
///
/// Surrounding whitespace is dropped, so a blank term behaves like an empty one.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Check a product against an already normalized, non-empty term
pub fn matches(product: &Product, needle: &str) -> bool {
    product
        .tag_titles()
        .any(|title| title.to_lowercase().contains(needle))
}

/// Indices of the products matching `term`, in dataset order
///
/// An empty term selects every product.
pub fn filter_indices(products: &[Product], term: &str) -> Vec<usize> {
    let needle = normalize_term(term);
    if needle.is_empty() {
        return (0..products.len()).collect();
    }

    products
        .iter()
        .enumerate()
        .filter(|(_, product)| matches(product, &needle))
        .map(|(i, _)| i)
        .collect()
}
