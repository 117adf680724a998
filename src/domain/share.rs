// src/domain/share.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::SHARE_ALL_NOTICE;
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareSite {
    WhatsApp,
    Twitter,
    Facebook,
    All,
}

impl ShareSite {
    /// Card button order.
    pub const BUTTONS: [ShareSite; 4] = [
        ShareSite::Facebook,
        ShareSite::Twitter,
        ShareSite::WhatsApp,
        ShareSite::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShareSite::WhatsApp => "whatsapp",
            ShareSite::Twitter => "twitter",
            ShareSite::Facebook => "facebook",
            ShareSite::All => "all",
        }
    }
}

impl fmt::Display for ShareSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShareSite {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whatsapp" => Ok(ShareSite::WhatsApp),
            "twitter" => Ok(ShareSite::Twitter),
            "facebook" => Ok(ShareSite::Facebook),
            "all" => Ok(ShareSite::All),
            _ => Err(DomainError::UnknownShareSite(s.to_string())),
        }
    }
}

/// Client the share link will be opened on. WhatsApp links differ between
/// the Android app and the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientPlatform {
    Android,
    #[default]
    Other,
}

impl ClientPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            ClientPlatform::Android
        } else {
            ClientPlatform::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ShareAction {
    /// Open this URL in a new browsing context.
    Open(String),
    /// Show this message to the user; nothing is opened.
    Notice(String),
}

pub fn share_message(text: &str, author: &str, promotion: &str) -> String {
    format!("{text}\n{author}\n\nQuote by: {promotion}")
}

pub fn share_link(
    site: ShareSite,
    text: &str,
    author: &str,
    promotion: &str,
    platform: ClientPlatform,
) -> ShareAction {
    let message = share_message(text, author, promotion);
    let encoded = urlencoding::encode(&message);
    match site {
        ShareSite::WhatsApp => match platform {
            ClientPlatform::Android => ShareAction::Open(format!("whatsapp://send?text={encoded}")),
            ClientPlatform::Other => {
                ShareAction::Open(format!("https://web.whatsapp.com/send?text={encoded}"))
            }
        },
        ShareSite::Twitter => {
            ShareAction::Open(format!("https://twitter.com/intent/tweet?text={encoded}"))
        }
        ShareSite::Facebook => {
            ShareAction::Open(format!("https://www.facebook.com/sharer/sharer.php?u={encoded}"))
        }
        ShareSite::All => ShareAction::Notice(SHARE_ALL_NOTICE.to_string()),
    }
}
