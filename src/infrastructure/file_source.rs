// src/infrastructure/file_source.rs
use crate::application::QuoteSource;
use crate::domain::{LoadError, Quote, QuoteDocument};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl QuoteSource for FileSource {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn fetch(&self) -> Result<Vec<Quote>, LoadError> {
        let content = std::fs::read_to_string(&self.path)?;
        let document: QuoteDocument = serde_json::from_str(&content)?;
        debug!(count = document.quotes.len(), "Parsed quote document");
        Ok(document.quotes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
