// src/infrastructure/http_source.rs
use crate::application::QuoteSource;
use crate::domain::{LoadError, Quote, QuoteDocument};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client used for the document fetch. The blocking client's default request
/// timeout is switched off; a fetch waits until the server answers or fails.
pub fn build_client() -> Result<Client, LoadError> {
    Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| LoadError::Network(e.to_string()))
}

/// Fetches the quote document once per call. No retry.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl QuoteSource for HttpSource {
    #[instrument(level = "debug", skip(self), fields(url = %self.url))]
    fn fetch(&self) -> Result<Vec<Quote>, LoadError> {
        let response = build_client()?
            .get(&self.url)
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| LoadError::Network(e.to_string()))?;
        let document: QuoteDocument = serde_json::from_str(&body)?;
        debug!(count = document.quotes.len(), "Fetched quote document");
        Ok(document.quotes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
