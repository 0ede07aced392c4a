//! Search-filtered, paginated product list
//!
//! `CardList` owns the dataset plus the two pieces of mutable state: the
//! filtered view and the page offset. The visible page is always derived
//! from that state on demand, never stored.

use std::fmt;

use tracing::debug;

use crate::core::catalog::Catalog;
use crate::core::product::Product;
use crate::core::search;

/// Number of cards on one page
pub const PAGE_SIZE: usize = 10;

/// Pagination direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Range summary shown under the list, 1-indexed and inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} - {} of {} products",
            self.start, self.end, self.total
        )
    }
}

/// List state: dataset, active filter and page offset
#[derive(Debug, Clone)]
pub struct CardList {
    catalog: Catalog,
    /// Indices into the catalog, in catalog order
    filtered: Vec<usize>,
    offset: usize,
    term: String,
}

impl CardList {
    /// Start unfiltered on the first page
    pub fn new(catalog: Catalog) -> Self {
        let filtered = (0..catalog.len()).collect();
        Self {
            catalog,
            filtered,
            offset: 0,
            term: String::new(),
        }
    }

    /// Replace the filtered view with the products matching `term`
    ///
    /// Always returns to the first page. An empty term restores the full dataset.
    pub fn filter(&mut self, term: &str) {
        self.filtered = search::filter_indices(self.catalog.products(), term);
        self.term = term.to_string();
        self.offset = 0;
        debug!(term, matches = self.filtered.len(), "Applied tag filter");
    }

    /// Move one page in `direction`
    ///
    /// Returns `false` and leaves the offset alone when already at that boundary.
    pub fn paginate(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Next if self.is_at_end() => {
                debug!(offset = self.offset, "Ignoring next page at end of list");
                false
            }
            Direction::Previous if self.is_at_start() => {
                debug!("Ignoring previous page at start of list");
                false
            }
            Direction::Next => {
                self.offset += PAGE_SIZE;
                debug!(offset = self.offset, "Moved to next page");
                true
            }
            Direction::Previous => {
                self.offset -= PAGE_SIZE;
                debug!(offset = self.offset, "Moved to previous page");
                true
            }
        }
    }

    /// Jump to the first page
    pub fn first_page(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.offset = 0;
        true
    }

    /// Jump to the last page
    pub fn last_page(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.offset = (self.page_count() - 1) * PAGE_SIZE;
        true
    }

    /// Jump to a 1-based page number, refusing pages that do not exist
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.page_count() {
            return false;
        }
        self.offset = (page - 1) * PAGE_SIZE;
        true
    }

    /// The products currently visible
    pub fn page(&self) -> Vec<&Product> {
        let products = self.catalog.products();
        self.filtered
            .iter()
            .skip(self.offset)
            .take(PAGE_SIZE)
            .map(|&i| &products[i])
            .collect()
    }

    /// All products in the filtered view
    pub fn filtered(&self) -> impl Iterator<Item = &Product> {
        let products = self.catalog.products();
        self.filtered.iter().map(move |&i| &products[i])
    }

    pub fn is_at_start(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.offset + PAGE_SIZE >= self.filtered.len()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            start: self.offset + 1,
            end: (self.offset + PAGE_SIZE).min(self.filtered.len()),
            total: self.filtered.len(),
        }
    }

    /// 1-based number of the current page
    pub fn page_number(&self) -> usize {
        self.offset / PAGE_SIZE + 1
    }

    /// Number of pages, at least one even when nothing matches
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The term passed to the last `filter` call
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_len(&self) -> usize {
        self.catalog.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: u64) -> CardList {
        let products = (1..=count)
            .map(|i| Product::new(i).with_tags([format!("tag-{}", i)]))
            .collect();
        CardList::new(Catalog::new(products))
    }

    fn page_ids(list: &CardList) -> Vec<String> {
        list.page().iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_first_page_of_25() {
        let list = numbered(25);
        assert_eq!(page_ids(&list), (1..=10).map(|i| i.to_string()).collect::<Vec<_>>());
        assert_eq!(list.summary().to_string(), "Showing 1 - 10 of 25 products");
        assert!(list.is_at_start());
        assert!(!list.is_at_end());
    }

    #[test]
    fn test_next_twice_reaches_last_page() {
        let mut list = numbered(25);
        assert!(list.paginate(Direction::Next));
        assert!(list.paginate(Direction::Next));

        assert_eq!(page_ids(&list), vec!["21", "22", "23", "24", "25"]);
        assert_eq!(list.summary().to_string(), "Showing 21 - 25 of 25 products");
        assert!(list.is_at_end());
        assert_eq!(list.page_number(), 3);
        assert_eq!(list.page_count(), 3);
    }

    #[test]
    fn test_paginate_refuses_past_bounds() {
        let mut list = numbered(25);
        assert!(!list.paginate(Direction::Previous));
        assert_eq!(list.offset(), 0);

        list.paginate(Direction::Next);
        list.paginate(Direction::Next);
        assert!(!list.paginate(Direction::Next));
        assert_eq!(list.offset(), 20);

        assert!(list.paginate(Direction::Previous));
        assert_eq!(list.offset(), 10);
    }

    #[test]
    fn test_filter_resets_offset() {
        let mut list = CardList::new(Catalog::new(
            (1..=30u64)
                .map(|i| {
                    let colour = if i % 10 == 0 { "Red" } else { "green" };
                    Product::new(i).with_tags([colour])
                })
                .collect(),
        ));
        list.paginate(Direction::Next);
        list.filter("red");

        assert_eq!(list.offset(), 0);
        assert_eq!(page_ids(&list), vec!["10", "20", "30"]);
        assert_eq!(list.summary().to_string(), "Showing 1 - 3 of 3 products");
        assert!(list.is_at_start());
        assert!(list.is_at_end());
    }

    #[test]
    fn test_empty_filter_restores_dataset() {
        let mut list = numbered(12);
        list.filter("tag-1");
        assert_eq!(list.filtered_len(), 4); // 1, 10, 11, 12
        list.filter("");
        assert_eq!(list.filtered_len(), 12);
        assert_eq!(list.term(), "");
    }

    #[test]
    fn test_no_matches() {
        let mut list = numbered(5);
        list.filter("nothing");
        assert!(list.page().is_empty());
        assert!(list.is_at_start());
        assert!(list.is_at_end());
        assert_eq!(list.page_count(), 1);
        assert_eq!(list.summary().to_string(), "Showing 1 - 0 of 0 products");
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let mut list = numbered(20);
        assert!(list.paginate(Direction::Next));
        assert!(list.is_at_end());
        assert_eq!(list.summary().to_string(), "Showing 11 - 20 of 20 products");
    }

    #[test]
    fn test_first_and_last_page_jumps() {
        let mut list = numbered(35);
        assert!(list.last_page());
        assert_eq!(list.offset(), 30);
        assert!(!list.last_page());
        assert!(list.first_page());
        assert_eq!(list.offset(), 0);
        assert!(!list.first_page());
    }

    #[test]
    fn test_go_to_page() {
        let mut list = numbered(25);
        assert!(list.go_to_page(3));
        assert_eq!(list.offset(), 20);
        assert!(!list.go_to_page(0));
        assert!(!list.go_to_page(4));
        assert_eq!(list.offset(), 20);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product(id: u64) -> impl Strategy<Value = Product> {
            proptest::option::of(proptest::collection::vec("[a-zA-Z ]{0,8}", 0..4)).prop_map(
                move |tags| {
                    let product = Product::new(id);
                    match tags {
                        Some(tags) => product.with_tags(tags),
                        None => product,
                    }
                },
            )
        }

        fn arb_catalog() -> impl Strategy<Value = Catalog> {
            (0usize..40)
                .prop_flat_map(|n| (0..n as u64).map(arb_product).collect::<Vec<_>>())
                .prop_map(Catalog::new)
        }

        proptest! {
            /// Property: the empty term returns the dataset unchanged on page one.
            #[test]
            fn empty_term_is_identity(catalog in arb_catalog(), moves in 0usize..5) {
                let mut list = CardList::new(catalog.clone());
                for _ in 0..moves {
                    list.paginate(Direction::Next);
                }
                list.filter("");
                prop_assert_eq!(list.offset(), 0);
                let all: Vec<&Product> = list.filtered().collect();
                let expected: Vec<&Product> = catalog.products().iter().collect();
                prop_assert_eq!(all, expected);
            }

            /// Property: included products match and excluded products do not.
            #[test]
            fn filter_partitions_dataset(catalog in arb_catalog(), term in "[a-zA-Z]{1,3}") {
                let mut list = CardList::new(catalog.clone());
                list.filter(&term);
                let needle = term.to_lowercase();
                let has_match = |p: &Product| {
                    p.tag_titles().any(|t| t.to_lowercase().contains(&needle))
                };

                let included: Vec<&Product> = list.filtered().collect();
                for product in &included {
                    prop_assert!(has_match(product));
                }
                let excluded = catalog
                    .products()
                    .iter()
                    .filter(|p| !included.iter().any(|q| std::ptr::eq(*q, *p)));
                for product in excluded {
                    prop_assert!(!has_match(product));
                }
            }

            /// Property: the page is the window F[o..o+10] and the flags match the offset.
            #[test]
            fn page_is_window_of_filtered(catalog in arb_catalog(), steps in proptest::collection::vec(any::<bool>(), 0..12)) {
                let mut list = CardList::new(catalog);
                for forward in steps {
                    let direction = if forward { Direction::Next } else { Direction::Previous };
                    list.paginate(direction);

                    let filtered: Vec<&Product> = list.filtered().collect();
                    let o = list.offset();
                    let end = (o + PAGE_SIZE).min(filtered.len());
                    prop_assert!(o == 0 || o < filtered.len());
                    prop_assert_eq!(list.page(), filtered[o..end].to_vec());
                    prop_assert_eq!(list.is_at_start(), o == 0);
                    prop_assert_eq!(list.is_at_end(), o + PAGE_SIZE >= filtered.len());
                }
            }
        }
    }
}
