// src/infrastructure/markdown.rs
use crate::util::text::strip_html_tags;
use html_escape::encode_text;
use pulldown_cmark::{html, Event, Options, Parser};

pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Raw HTML inside a quote body is shown as text, never injected.
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output.trim_end().to_string()
}

/// HTML for a quote body: formatted when markdown is enabled, otherwise the
/// raw text escaped as-is.
pub fn render_body(text: &str, markdown: bool) -> String {
    if markdown {
        markdown_to_html(text)
    } else {
        encode_text(text).into_owned()
    }
}

/// Text a reader sees on the card, used for sharing.
pub fn plain_text(text: &str, markdown: bool) -> String {
    if markdown {
        strip_html_tags(&markdown_to_html(text))
    } else {
        text.to_string()
    }
}
