// src/util/testing.rs

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::QuoteSource;
use crate::domain::{LoadError, Quote};

/// Quote with predictable text and author derived from its id.
pub fn sample_quote(id: i64, tags: &[&str]) -> Quote {
    Quote {
        id,
        text: format!("Quote {id}"),
        author: format!("Author {id}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Shared mock source for testing code that depends on QuoteSource
///
/// # Examples
///
/// ```
/// use vichaar::application::QuoteSource;
/// use vichaar::util::testing::{sample_quote, MockQuoteSource};
///
/// let source = MockQuoteSource::builder()
///     .with_quote(sample_quote(1, &["wisdom"]))
///     .build();
/// assert_eq!(source.fetch().unwrap().len(), 1);
/// ```
pub struct MockQuoteSource {
    quotes: Vec<Quote>,
    failure: Option<u16>,
}

impl MockQuoteSource {
    pub fn builder() -> MockQuoteSourceBuilder {
        MockQuoteSourceBuilder::new()
    }
}

impl QuoteSource for MockQuoteSource {
    fn fetch(&self) -> Result<Vec<Quote>, LoadError> {
        match self.failure {
            Some(status) => Err(LoadError::Status(status)),
            None => Ok(self.quotes.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// Builder for MockQuoteSource
pub struct MockQuoteSourceBuilder {
    quotes: Vec<Quote>,
    failure: Option<u16>,
}

impl MockQuoteSourceBuilder {
    pub fn new() -> Self {
        Self {
            quotes: vec![],
            failure: None,
        }
    }

    /// Add a quote returned by every fetch
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quotes.push(quote);
        self
    }

    /// Make every fetch fail as if the server answered with `status`
    pub fn with_failure(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn build(self) -> MockQuoteSource {
        MockQuoteSource {
            quotes: self.quotes,
            failure: self.failure,
        }
    }
}

impl Default for MockQuoteSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let noisy_modules = ["reqwest", "hyper", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
