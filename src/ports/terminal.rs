// src/ports/terminal.rs
use crate::application::{Presenter, Screen};
use crate::domain::ShareAction;
use crate::infrastructure::markdown::plain_text;

/// Plain-text output for the terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalPresenter {
    markdown: bool,
}

impl TerminalPresenter {
    pub fn new(markdown: bool) -> Self {
        Self { markdown }
    }
}

impl Presenter for TerminalPresenter {
    fn present(&self, screen: &Screen) -> String {
        let mut out = Vec::new();

        if let Some(notice) = &screen.notice {
            out.push(format!("! {notice}"));
        }
        if let Some(ShareAction::Open(url)) = &screen.share {
            out.push(url.clone());
            return out.join("\n");
        }

        match &screen.active_tag {
            Some(tag) => out.push(format!("Tag: {tag} ({} quotes)", screen.quotes.len())),
            None if !screen.tags.is_empty() => out.push(format!("Tags: {}", screen.tags.join(", "))),
            None => {}
        }

        for quote in &screen.quotes {
            out.push(String::new());
            out.push(format!("#{}", quote.id));
            out.push(plain_text(&quote.text, self.markdown));
            out.push(format!("    ~{}", quote.author));
            if !quote.tags.is_empty() {
                out.push(format!("    [{}]", quote.tags.join(", ")));
            }
        }

        out.push(String::new());
        out.push(screen.page.to_string());
        out.join("\n")
    }
}
