// src/domain/collection.rs
use std::collections::HashSet;

use rand::Rng;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::{DomainError, Quote};

/// All loaded quotes plus the pagination cursor.
///
/// `current_page` is 1-based and always within `1..=max(1, total_pages())`.
#[derive(Debug, Clone)]
pub struct QuoteCollection {
    items: Vec<Quote>,
    page_size: usize,
    current_page: usize,
}

impl QuoteCollection {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }

    pub fn with_page_size(page_size: usize) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::InvalidPageSize(page_size));
        }
        Ok(Self {
            page_size,
            ..Self::new()
        })
    }

    /// Append a quote. Duplicate ids are kept as-is.
    pub fn add(&mut self, quote: Quote) {
        self.items.push(quote);
    }

    /// Swap in a freshly loaded quote set and rewind to the first page.
    pub fn replace_all(&mut self, quotes: Vec<Quote>) {
        self.items = quotes;
        self.current_page = 1;
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// First quote carrying `id`.
    pub fn find(&self, id: i64) -> Option<&Quote> {
        self.items.iter().find(|q| q.id == id)
    }

    /// Every tag across all quotes, deduplicated, in first-seen order.
    pub fn unique_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .flat_map(|q| q.tags.iter())
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect()
    }

    /// Quotes whose tags contain `tag` exactly (case-sensitive), in load order.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Quote> {
        self.items
            .iter()
            .filter(|q| q.has_tag(tag))
            .cloned()
            .collect()
    }

    pub fn random_sample(&self, count: usize) -> Vec<Quote> {
        self.random_sample_with(count, &mut rand::thread_rng())
    }

    /// Up to `count` distinct quotes drawn without replacement.
    ///
    /// Draws random indices and rejects ones already used until either
    /// `count` quotes are collected or every index has been taken.
    pub fn random_sample_with<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Quote> {
        if self.items.is_empty() {
            return Vec::new();
        }

        let target = count.min(self.items.len());
        let mut used = HashSet::with_capacity(target);
        let mut sample = Vec::with_capacity(target);
        while sample.len() < target && used.len() < self.items.len() {
            let index = rng.gen_range(0..self.items.len());
            if used.insert(index) {
                sample.push(self.items[index].clone());
            }
        }
        sample
    }

    pub fn random_one(&self) -> Option<Quote> {
        self.random_one_with(&mut rand::thread_rng())
    }

    pub fn random_one_with<R: Rng>(&self, rng: &mut R) -> Option<Quote> {
        self.random_sample_with(1, rng).into_iter().next()
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Slice of the current page, clipped to the data. Empty past the end.
    pub fn current_page_items(&self) -> &[Quote] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn advance_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            return true;
        }
        false
    }

    pub fn retreat_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            return true;
        }
        false
    }
}

impl Default for QuoteCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::sample_quote as quote;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn collection_of(n: i64) -> QuoteCollection {
        let mut collection = QuoteCollection::new();
        for id in 1..=n {
            collection.add(quote(id, &[]));
        }
        collection
    }

    fn ids(quotes: &[Quote]) -> Vec<i64> {
        quotes.iter().map(|q| q.id).collect()
    }

    #[test]
    fn given_zero_page_size_when_constructing_then_returns_error() {
        let result = QuoteCollection::with_page_size(0);

        assert!(matches!(result, Err(DomainError::InvalidPageSize(0))));
    }

    #[test]
    fn given_new_collection_when_inspecting_then_starts_empty_on_page_one() {
        let collection = QuoteCollection::new();

        assert!(collection.is_empty());
        assert_eq!(collection.current_page(), 1);
        assert_eq!(collection.page_size(), 10);
        assert_eq!(collection.total_pages(), 0);
        assert!(collection.current_page_items().is_empty());
    }

    #[test]
    fn given_duplicate_ids_when_adding_then_keeps_both() {
        let mut collection = QuoteCollection::new();

        collection.add(quote(7, &[]));
        collection.add(quote(7, &[]));

        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn given_wisdom_and_life_quotes_when_listing_tags_then_preserves_first_seen_order() {
        // Arrange
        let mut collection = QuoteCollection::new();
        collection.add(quote(1, &["wisdom"]));
        collection.add(quote(2, &["wisdom", "life"]));
        collection.add(quote(3, &["life"]));

        // Act
        let tags = collection.unique_tags();
        let life = collection.filter_by_tag("life");

        // Assert
        assert_eq!(tags, vec!["wisdom".to_string(), "life".to_string()]);
        assert_eq!(ids(&life), vec![2, 3]);
    }

    #[test]
    fn given_tag_with_different_case_when_filtering_then_does_not_match() {
        let mut collection = QuoteCollection::new();
        collection.add(quote(1, &["Life"]));

        assert!(collection.filter_by_tag("life").is_empty());
        assert!(collection.filter_by_tag("unknown").is_empty());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 1)]
    #[case(11, 2)]
    #[case(25, 3)]
    fn test_total_pages(#[case] items: i64, #[case] expected: usize) {
        assert_eq!(collection_of(items).total_pages(), expected);
    }

    #[test]
    fn given_25_quotes_when_paging_then_last_page_holds_remaining_five() {
        // Arrange
        let mut collection = collection_of(25);

        // Act & Assert
        assert_eq!(ids(collection.current_page_items()), (1..=10).collect::<Vec<_>>());
        assert!(collection.advance_page());
        assert!(collection.advance_page());
        assert_eq!(collection.current_page(), 3);
        assert_eq!(ids(collection.current_page_items()), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn given_last_page_when_advancing_then_returns_false_and_stays() {
        let mut collection = collection_of(25);
        while collection.advance_page() {}

        assert!(!collection.advance_page());
        assert_eq!(collection.current_page(), 3);
    }

    #[test]
    fn given_first_page_when_retreating_then_returns_false_and_stays() {
        let mut collection = collection_of(25);

        assert!(!collection.retreat_page());
        assert_eq!(collection.current_page(), 1);

        collection.advance_page();
        assert!(collection.retreat_page());
        assert_eq!(collection.current_page(), 1);
    }

    #[test]
    fn given_empty_collection_when_advancing_then_returns_false() {
        let mut collection = QuoteCollection::new();

        assert!(!collection.advance_page());
        assert_eq!(collection.current_page(), 1);
    }

    #[test]
    fn given_custom_page_size_when_paging_then_uses_it() {
        let mut collection = QuoteCollection::with_page_size(4).unwrap();
        for id in 1..=9 {
            collection.add(quote(id, &[]));
        }

        assert_eq!(collection.total_pages(), 3);
        collection.advance_page();
        collection.advance_page();
        assert_eq!(ids(collection.current_page_items()), vec![9]);
    }

    #[test]
    fn given_advanced_cursor_when_replacing_all_then_rewinds_and_drops_old_items() {
        // Arrange
        let mut collection = collection_of(25);
        collection.advance_page();

        // Act
        collection.replace_all(vec![quote(100, &[]), quote(101, &[])]);

        // Assert
        assert_eq!(collection.current_page(), 1);
        assert_eq!(ids(collection.quotes()), vec![100, 101]);
    }

    #[test]
    fn given_empty_collection_when_sampling_then_returns_empty() {
        let collection = QuoteCollection::new();

        assert!(collection.random_sample(5).is_empty());
        assert!(collection.random_one().is_none());
    }

    #[test]
    fn given_sample_smaller_than_collection_when_sampling_then_returns_distinct_quotes() {
        // Arrange
        let collection = collection_of(25);
        let mut rng = StdRng::seed_from_u64(42);

        // Act
        let sample = collection.random_sample_with(10, &mut rng);

        // Assert
        let unique: HashSet<i64> = sample.iter().map(|q| q.id).collect();
        assert_eq!(sample.len(), 10);
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn given_count_above_size_when_sampling_then_returns_every_quote_once() {
        let collection = collection_of(6);
        let mut rng = StdRng::seed_from_u64(7);

        let sample = collection.random_sample_with(50, &mut rng);

        let mut sorted = ids(&sample);
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn given_zero_count_when_sampling_then_returns_empty() {
        assert!(collection_of(3).random_sample(0).is_empty());
    }

    #[test]
    fn given_repeated_draws_when_sampling_then_orders_can_differ() {
        let collection = collection_of(20);
        let mut rng = StdRng::seed_from_u64(1);

        let draws: HashSet<Vec<i64>> = (0..20)
            .map(|_| ids(&collection.random_sample_with(5, &mut rng)))
            .collect();

        assert!(draws.len() > 1);
    }

    #[test]
    fn given_single_quote_when_picking_one_then_returns_it() {
        let collection = collection_of(1);

        assert_eq!(collection.random_one().map(|q| q.id), Some(1));
    }
}
