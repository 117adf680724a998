// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Quote document: local path or http(s) URL (default from config, else data.json)
    #[arg(short, long, value_name = "DATA", global = true)]
    pub data: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Quotes per page (overrides config)
    #[arg(long, value_name = "N", global = true)]
    pub page_size: Option<usize>,

    /// Output the screen as JSON instead of text
    #[arg(long, global = true, conflicts_with = "open")]
    pub json: bool,

    /// Render an HTML page and open it in the browser
    #[arg(long, global = true)]
    pub open: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show one page of quotes
    Page {
        /// 1-based page number; stops at the last page
        #[arg(value_name = "PAGE", default_value_t = 1)]
        page: usize,
    },

    /// Show a random selection of distinct quotes
    Random {
        /// How many quotes to draw (default from config)
        #[arg(short = 'n', long, value_name = "COUNT")]
        count: Option<usize>,
    },

    /// Show a single random quote
    One,

    /// List all tags in first-seen order
    Tags,

    /// Show quotes carrying a tag (exact, case-sensitive)
    Filter {
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Build a share link for a quote
    Share {
        /// whatsapp, twitter, facebook or all
        #[arg(value_name = "SITE")]
        site: String,

        #[arg(value_name = "QUOTE_ID")]
        quote_id: i64,
    },

    /// Interactive browsing on stdin
    Browse,
}
