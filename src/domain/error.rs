// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Quote not found: {0}")]
    QuoteNotFound(i64),
    #[error("Page size must be positive, got {0}")]
    InvalidPageSize(usize),
    #[error("Unknown share site: {0}")]
    UnknownShareSite(String),
}

/// Failure while fetching the quote document. The only failure class the
/// loader surfaces; callers decide whether to swallow it.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read quote document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Request for quote document failed: {0}")]
    Network(String),
    #[error("Quote document request returned status {0}")]
    Status(u16),
    #[error("Malformed quote document: {0}")]
    Malformed(#[from] serde_json::Error),
}
