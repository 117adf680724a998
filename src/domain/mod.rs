// src/domain/mod.rs
pub mod collection;
pub mod error;
pub mod quote;
pub mod share;

pub use collection::QuoteCollection;
pub use error::{DomainError, LoadError};
pub use quote::{Quote, QuoteDocument};
pub use share::{ClientPlatform, ShareAction, ShareSite};
