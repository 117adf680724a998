// src/cli/repl.rs
use crate::application::{Event, Presenter, QuoteBrowser};
use crate::domain::ShareSite;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

pub const HELP: &str = "\
n            next page
p            previous page
t <TAG>      quotes with tag
l            list tags
r [COUNT]    random quotes
o            one random quote
s <SITE> <ID> share quote (whatsapp, twitter, facebook, all)
h            this help
q            quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    Help,
    Quit,
}

/// Parse one line typed at the browse prompt.
pub fn parse_line(line: &str, default_count: usize) -> Result<Input, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Input::Event(Event::Show));
    };
    let rest: Vec<&str> = parts.collect();

    match (command, rest.as_slice()) {
        ("n", []) => Ok(Input::Event(Event::NextPage)),
        ("p", []) => Ok(Input::Event(Event::PrevPage)),
        ("l", []) => Ok(Input::Event(Event::Tags)),
        ("o", []) => Ok(Input::Event(Event::RandomOne)),
        ("h", []) => Ok(Input::Help),
        ("q", []) => Ok(Input::Quit),
        // tags may contain spaces
        ("t", words) if !words.is_empty() => Ok(Input::Event(Event::SelectTag(words.join(" ")))),
        ("r", []) => Ok(Input::Event(Event::Random(default_count))),
        ("r", [count]) => count
            .parse()
            .map(|n| Input::Event(Event::Random(n)))
            .map_err(|_| format!("Invalid count: {count}")),
        ("s", [site, id]) => {
            let site: ShareSite = site.parse().map_err(|e: crate::domain::DomainError| e.to_string())?;
            let quote_id = id.parse().map_err(|_| format!("Invalid quote id: {id}"))?;
            Ok(Input::Event(Event::Share { site, quote_id }))
        }
        _ => Err(format!("Unknown command: {}", line.trim())),
    }
}

/// Read commands until `q` or end of input, rendering after each one.
pub fn run<R, W, P>(
    browser: &mut QuoteBrowser,
    presenter: &P,
    default_count: usize,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: Presenter,
{
    writeln!(output, "{}", presenter.present(&browser.dispatch(Event::Show)))?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        debug!(%line, "Browse input");
        match parse_line(&line, default_count) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => writeln!(output, "{HELP}")?,
            Ok(Input::Event(event)) => {
                writeln!(output, "{}", presenter.present(&browser.dispatch(event)))?
            }
            Err(message) => writeln!(output, "{message}\n{HELP}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ShareSettings;
    use crate::domain::{ClientPlatform, QuoteCollection};
    use crate::ports::TerminalPresenter;
    use crate::util::testing::sample_quote;
    use rstest::rstest;

    #[rstest]
    #[case("", Input::Event(Event::Show))]
    #[case("n", Input::Event(Event::NextPage))]
    #[case(" p ", Input::Event(Event::PrevPage))]
    #[case("t self help", Input::Event(Event::SelectTag("self help".into())))]
    #[case("r", Input::Event(Event::Random(10)))]
    #[case("r 3", Input::Event(Event::Random(3)))]
    #[case("o", Input::Event(Event::RandomOne))]
    #[case("l", Input::Event(Event::Tags))]
    #[case("s twitter 42", Input::Event(Event::Share { site: ShareSite::Twitter, quote_id: 42 }))]
    #[case("q", Input::Quit)]
    #[case("h", Input::Help)]
    fn test_parse_line(#[case] line: &str, #[case] expected: Input) {
        assert_eq!(parse_line(line, 10).unwrap(), expected);
    }

    #[rstest]
    #[case("x")]
    #[case("t")]
    #[case("r many")]
    #[case("s myspace 1")]
    #[case("s twitter abc")]
    fn test_parse_line_rejects(#[case] line: &str) {
        assert!(parse_line(line, 10).is_err());
    }

    #[test]
    fn given_session_script_when_running_then_renders_each_step() {
        // Arrange
        let mut collection = QuoteCollection::with_page_size(1).unwrap();
        collection.add(sample_quote(1, &["wisdom"]));
        collection.add(sample_quote(2, &["life"]));
        let settings = ShareSettings {
            promotion: "promo".into(),
            platform: ClientPlatform::Other,
            markdown: true,
        };
        let mut browser = QuoteBrowser::new(collection, settings);
        let presenter = TerminalPresenter::new(true);
        let script = "n\nn\nbogus\nq\nn\n";
        let mut output = Vec::new();

        // Act
        run(&mut browser, &presenter, 10, script.as_bytes(), &mut output).unwrap();

        // Assert
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Page 1 of 2"));
        assert_eq!(text.matches("Page 2 of 2").count(), 2);
        assert!(text.contains("Unknown command: bogus"));
        assert_eq!(browser.collection().current_page(), 2);
    }
}
