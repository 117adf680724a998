// src/application/mod.rs
pub mod browser;
pub mod quote_loader;

pub use browser::{Event, PageIndicator, QuoteBrowser, Screen, ShareSettings};
pub use quote_loader::{QuoteLoader, QuoteSource};

/// Turns a [`Screen`] into output for some medium.
pub trait Presenter {
    fn present(&self, screen: &Screen) -> String;
}
