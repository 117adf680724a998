// src/util/text.rs
use html_escape::decode_html_entities;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK_TAG_REGEX: Regex =
        Regex::new(r"</?(p|div|br|li|blockquote|h[1-6])[^>]*>").expect("Failed to compile block tag regex");
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").expect("Failed to compile tag regex");
}

/// Reduce rendered HTML to the text a reader sees.
///
/// Block-level tags become line breaks, all other tags are dropped, entities
/// are decoded last so escaped angle brackets survive. Blank lines are removed
/// and each line is trimmed.
///
/// # Examples
///
/// ```
/// use vichaar::util::text::strip_html_tags;
///
/// let html = "<p>Stay <em>hungry</em> &amp; foolish</p>";
/// assert_eq!(strip_html_tags(html), "Stay hungry & foolish");
/// ```
pub fn strip_html_tags(html: &str) -> String {
    let with_newlines = BLOCK_TAG_REGEX.replace_all(html, "\n");
    let no_tags = TAG_REGEX.replace_all(&with_newlines, "");
    let decoded = decode_html_entities(&no_tags);

    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
