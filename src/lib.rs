// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{Event, Presenter, QuoteBrowser, QuoteLoader, Screen, ShareSettings};
use cli::args::{Args, Command};
use domain::{ClientPlatform, QuoteCollection, ShareAction, ShareSite};
use infrastructure::renderer::BrowserLauncher;
use infrastructure::Config;
use ports::{HtmlPresenter, TerminalPresenter};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting vichaar with arguments");

    let config = Config::resolve(args.config.as_deref())?;
    debug!(?config, "Resolved configuration");

    let page_size = args.page_size.unwrap_or(config.display.page_size);
    let location = args.data.clone().unwrap_or_else(|| config.source.data.clone());
    let settings = ShareSettings {
        promotion: config.share.promotion.clone(),
        platform: ClientPlatform::current(),
        markdown: config.display.markdown,
    };

    // Load failures leave the collection empty
    let mut collection = QuoteCollection::with_page_size(page_size)?;
    let loader = QuoteLoader::new(infrastructure::source_for(&location));
    loader.load_or_empty(&mut collection);

    let mut browser = QuoteBrowser::new(collection, settings.clone());

    if matches!(args.command, Command::Browse) {
        let presenter = TerminalPresenter::new(settings.markdown);
        let stdin = std::io::stdin();
        return cli::repl::run(
            &mut browser,
            &presenter,
            config.display.random_count,
            stdin.lock(),
            std::io::stdout(),
        );
    }

    let event = event_for(&args.command, config.display.random_count)?;
    info!(?event, "Dispatching");
    let screen = match (&args.command, event) {
        (Command::Page { page }, _) => go_to_page(&mut browser, *page),
        (_, event) => browser.dispatch(event),
    };

    output(&args, &settings, &screen)
}

/// Map a one-shot subcommand onto a browser event.
fn event_for(command: &Command, default_count: usize) -> Result<Event> {
    Ok(match command {
        Command::Page { .. } | Command::Browse => Event::Show,
        Command::Random { count } => Event::Random(count.unwrap_or(default_count)),
        Command::One => Event::RandomOne,
        Command::Tags => Event::Tags,
        Command::Filter { tag } => Event::SelectTag(tag.clone()),
        Command::Share { site, quote_id } => Event::Share {
            site: site.parse::<ShareSite>()?,
            quote_id: *quote_id,
        },
    })
}

/// Advance from the first page until `page` is reached or there is no next page.
pub fn go_to_page(browser: &mut QuoteBrowser, page: usize) -> Screen {
    let mut screen = browser.dispatch(Event::Show);
    while screen.page.current < page {
        let next = browser.dispatch(Event::NextPage);
        if next.page.current == screen.page.current {
            debug!(requested = page, last = screen.page.current, "Page past the end");
            break;
        }
        screen = next;
    }
    screen
}

fn output(args: &Args, settings: &ShareSettings, screen: &Screen) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(screen).context("Failed to serialize screen to JSON")?;
        println!("{json}");
        return Ok(());
    }

    if args.open {
        let mut launcher = BrowserLauncher::new();
        if let Some(ShareAction::Open(url)) = &screen.share {
            launcher.open_url(url)?;
            return Ok(());
        }
        let html = HtmlPresenter::new(settings.clone()).present(screen);
        let path = launcher.create_temp_file(&html)?;
        launcher.open_file(&path)?;
        return Ok(());
    }

    println!("{}", TerminalPresenter::new(settings.markdown).present(screen));
    Ok(())
}
