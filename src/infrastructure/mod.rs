// src/infrastructure/mod.rs
pub mod config;
pub mod file_source;
pub mod http_source;
pub mod markdown;
pub mod renderer;

pub use config::Config;
pub use file_source::FileSource;
pub use http_source::HttpSource;

use crate::application::QuoteSource;
use crate::domain::{LoadError, Quote};

/// Either kind of source, chosen from the location string.
#[derive(Debug)]
pub enum AnySource {
    File(FileSource),
    Http(HttpSource),
}

/// `http://` and `https://` locations are fetched over the network, anything
/// else is treated as a local path.
pub fn source_for(location: &str) -> AnySource {
    if location.starts_with("http://") || location.starts_with("https://") {
        AnySource::Http(HttpSource::new(location))
    } else {
        AnySource::File(FileSource::new(location))
    }
}

impl QuoteSource for AnySource {
    fn fetch(&self) -> Result<Vec<Quote>, LoadError> {
        match self {
            AnySource::File(source) => source.fetch(),
            AnySource::Http(source) => source.fetch(),
        }
    }

    fn describe(&self) -> String {
        match self {
            AnySource::File(source) => source.describe(),
            AnySource::Http(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.org/data.json", true)]
    #[case("http://localhost:8000/data.json", true)]
    #[case("data.json", false)]
    #[case("/srv/quotes/https.json", false)]
    fn test_source_selection(#[case] location: &str, #[case] is_http: bool) {
        assert_eq!(matches!(source_for(location), AnySource::Http(_)), is_http);
    }
}
