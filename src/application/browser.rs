// src/application/browser.rs
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::constants::PROMOTION_URL;
use crate::domain::share::share_link;
use crate::domain::{ClientPlatform, DomainError, Quote, QuoteCollection, ShareAction, ShareSite};
use crate::infrastructure::markdown::plain_text;

/// Discrete user interactions. Each one maps to a collection call followed
/// by a fresh [`Screen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Show,
    NextPage,
    PrevPage,
    SelectTag(String),
    Random(usize),
    RandomOne,
    Tags,
    Share { site: ShareSite, quote_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageIndicator {
    pub current: usize,
    pub total: usize,
}

impl std::fmt::Display for PageIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Page {} of {}", self.current, self.total)
    }
}

/// Everything a presenter needs to draw one state of the widget.
#[derive(Debug, Clone, Serialize)]
pub struct Screen {
    pub quotes: Vec<Quote>,
    pub tags: Vec<String>,
    pub page: PageIndicator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<ShareAction>,
}

#[derive(Debug, Clone)]
pub struct ShareSettings {
    pub promotion: String,
    pub platform: ClientPlatform,
    /// Render the quote body as markdown before stripping it to plain text.
    pub markdown: bool,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            promotion: PROMOTION_URL.to_string(),
            platform: ClientPlatform::current(),
            markdown: true,
        }
    }
}

pub struct QuoteBrowser {
    collection: QuoteCollection,
    share: ShareSettings,
}

impl QuoteBrowser {
    pub fn new(collection: QuoteCollection, share: ShareSettings) -> Self {
        Self { collection, share }
    }

    pub fn collection(&self) -> &QuoteCollection {
        &self.collection
    }

    #[instrument(level = "debug", skip(self))]
    pub fn dispatch(&mut self, event: Event) -> Screen {
        match event {
            Event::Show => self.page_screen(),
            Event::Tags => self.screen_with(Vec::new()),
            Event::NextPage => {
                if !self.collection.advance_page() {
                    debug!(page = self.collection.current_page(), "Already on last page");
                }
                self.page_screen()
            }
            Event::PrevPage => {
                if !self.collection.retreat_page() {
                    debug!(page = self.collection.current_page(), "Already on first page");
                }
                self.page_screen()
            }
            Event::SelectTag(tag) => {
                let quotes = self.collection.filter_by_tag(&tag);
                debug!(%tag, matches = quotes.len(), "Filtered by tag");
                Screen {
                    active_tag: Some(tag),
                    ..self.screen_with(quotes)
                }
            }
            Event::Random(count) => {
                let quotes = self.collection.random_sample(count);
                self.screen_with(quotes)
            }
            Event::RandomOne => {
                let quotes = self.collection.random_one().into_iter().collect();
                self.screen_with(quotes)
            }
            Event::Share { site, quote_id } => self.share_screen(site, quote_id),
        }
    }

    fn page_screen(&self) -> Screen {
        self.screen_with(self.collection.current_page_items().to_vec())
    }

    fn screen_with(&self, quotes: Vec<Quote>) -> Screen {
        Screen {
            quotes,
            tags: self.collection.unique_tags(),
            page: PageIndicator {
                current: self.collection.current_page(),
                total: self.collection.total_pages(),
            },
            active_tag: None,
            notice: None,
            share: None,
        }
    }

    fn share_screen(&self, site: ShareSite, quote_id: i64) -> Screen {
        let Some(quote) = self.collection.find(quote_id).cloned() else {
            warn!(quote_id, "Share requested for unknown quote");
            return Screen {
                notice: Some(DomainError::QuoteNotFound(quote_id).to_string()),
                ..self.screen_with(Vec::new())
            };
        };

        let action = share_link(
            site,
            &plain_text(&quote.text, self.share.markdown),
            &format!("~{}", quote.author),
            &self.share.promotion,
            self.share.platform,
        );
        let notice = match &action {
            ShareAction::Notice(message) => Some(message.clone()),
            ShareAction::Open(_) => None,
        };
        Screen {
            notice,
            share: Some(action),
            ..self.screen_with(vec![quote])
        }
    }
}
