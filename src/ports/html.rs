// src/ports/html.rs
use crate::application::{Presenter, Screen, ShareSettings};
use crate::domain::share::share_link;
use crate::domain::{Quote, ShareAction, ShareSite};
use crate::infrastructure::markdown::{plain_text, render_body};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

/// JavaScript string literal for `value`.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[derive(Debug, Clone)]
pub struct HtmlPresenter {
    share: ShareSettings,
}

impl HtmlPresenter {
    pub fn new(share: ShareSettings) -> Self {
        Self { share }
    }

    fn render_tags(&self, screen: &Screen) -> String {
        screen
            .tags
            .iter()
            .map(|tag| {
                let active = if screen.active_tag.as_deref() == Some(tag.as_str()) {
                    " active"
                } else {
                    ""
                };
                format!(
                    r#"<span class="tags{active}">{}</span>"#,
                    encode_text(tag)
                )
            })
            .collect::<Vec<_>>()
            .join("\n            ")
    }

    fn render_share_links(&self, quote: &Quote) -> String {
        let text = plain_text(&quote.text, self.share.markdown);
        let author = format!("~{}", quote.author);
        ShareSite::BUTTONS
            .iter()
            .map(|site| {
                match share_link(*site, &text, &author, &self.share.promotion, self.share.platform) {
                    ShareAction::Open(url) => format!(
                        r#"<a class="shareBtn" href="{}" target="_blank" rel="noopener">{}</a>"#,
                        encode_double_quoted_attribute(&url),
                        site
                    ),
                    ShareAction::Notice(message) => format!(
                        r#"<button class="shareBtn" type="button" onclick="{}">{}</button>"#,
                        encode_double_quoted_attribute(&format!("alert({})", js_string(&message))),
                        site
                    ),
                }
            })
            .collect::<Vec<_>>()
            .join("\n                        ")
    }

    #[instrument(level = "trace", skip(self))]
    fn render_card(&self, quote: &Quote) -> String {
        format!(
            r#"<div class="quoteCard" id="quote-{id}">
                <blockquote class="quoteText">{body}</blockquote>
                <div class="row">
                    <p class="extraText">~{author}</p>
                    <div class="row share">
                        {links}
                    </div>
                </div>
            </div>"#,
            id = quote.id,
            body = render_body(&quote.text, self.share.markdown),
            author = encode_text(&quote.author),
            links = self.render_share_links(quote),
        )
    }
}

impl Presenter for HtmlPresenter {
    fn present(&self, screen: &Screen) -> String {
        let cards = screen
            .quotes
            .iter()
            .map(|q| self.render_card(q))
            .collect::<Vec<_>>()
            .join("\n        ");
        let notice = screen
            .notice
            .as_deref()
            .map(|n| format!(r#"<div class="notice">{}</div>"#, encode_text(n)))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Vichaar</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .quoteCard {{
            background: white;
            border-radius: 8px;
            padding: 1.5rem 2rem;
            margin-bottom: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .quoteText {{
            margin: 0;
            font-size: 1.2em;
        }}
        .row {{
            display: flex;
            justify-content: space-between;
            align-items: center;
        }}
        .extraText {{
            color: #666;
            font-style: italic;
        }}
        .shareBtn {{
            margin-left: 0.5rem;
            font-size: 0.8em;
        }}
        .tags {{
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            margin: 0 4px 4px 0;
            font-size: 0.8em;
        }}
        .tags.active {{
            background: #343a40;
            color: white;
        }}
        .notice {{
            background: #fff3cd;
            padding: 0.5rem 1rem;
            border-radius: 4px;
            margin-bottom: 1rem;
        }}
    </style>
</head>
<body>
    {notice}
    <div id="tagsContainer">
            {tags}
    </div>
    <div id="quotesContainer">
        {cards}
    </div>
    <div id="paginationContainer">
        <span>{page}</span>
    </div>
</body>
</html>"#,
            notice = notice,
            tags = self.render_tags(screen),
            cards = cards,
            page = screen.page,
        )
    }
}
