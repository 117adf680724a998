// src/application/quote_loader.rs
use crate::domain::{LoadError, Quote, QuoteCollection};
use tracing::{error, info};

pub trait QuoteSource {
    /// Retrieve every quote record from the underlying resource.
    fn fetch(&self) -> Result<Vec<Quote>, LoadError>;

    /// Human-readable location, for logging.
    fn describe(&self) -> String;
}

pub struct QuoteLoader<S: QuoteSource> {
    source: S,
}

impl<S: QuoteSource> QuoteLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Replace the collection's contents with a fresh fetch.
    ///
    /// On failure the collection is left untouched.
    pub fn load(&self, collection: &mut QuoteCollection) -> Result<usize, LoadError> {
        let quotes = self.source.fetch()?;
        let count = quotes.len();
        collection.replace_all(quotes);
        info!(source = %self.source.describe(), count, "Loaded quotes");
        Ok(count)
    }

    /// Load, logging and swallowing any failure. No retry.
    pub fn load_or_empty(&self, collection: &mut QuoteCollection) -> usize {
        match self.load(collection) {
            Ok(count) => count,
            Err(e) => {
                error!(source = %self.source.describe(), error = %e, "Error loading quotes");
                0
            }
        }
    }
}
