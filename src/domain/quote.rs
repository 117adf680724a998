// src/domain/quote.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl Quote {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Top-level shape of the static quote resource.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuoteDocument {
    pub quotes: Vec<Quote>,
}
