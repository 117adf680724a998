// src/constants.rs
//
// Application-wide defaults. Configuration and CLI flags override the
// tunable ones.

/// Quotes shown per page when nothing else is configured.
///
/// Used in: `domain/collection.rs`, `infrastructure/config.rs`
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Quotes drawn by the `random` command and the initial random view.
///
/// Used in: `infrastructure/config.rs`, `cli/args.rs`
pub const DEFAULT_RANDOM_COUNT: usize = 10;

/// Where quotes are loaded from when neither config nor flags name a source.
pub const DEFAULT_DATA_LOCATION: &str = "data.json";

/// Footer appended to every shared message.
///
/// Used in: `domain/share.rs`, `infrastructure/config.rs`
pub const PROMOTION_URL: &str = "https://koustubh1234g.github.io/Vichaar/";

/// Notice shown for the catch-all share target, which has no link.
pub const SHARE_ALL_NOTICE: &str = "This feature is not yet Implemented.";

/// Delay in milliseconds after launching the browser before returning.
///
/// The HTML page lives in a temporary directory that is removed when the
/// process exits; the browser needs a moment to read it first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
