// filtergen/src/logger.rs
//! Logger initialization for the filtergen CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger. An explicit `level` overrides `RUST_LOG`;
/// `None` defers to the environment with `info` as the default filter.
/// Logs go to stderr so they never mix with artifact or report output.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    // A second init (e.g. in tests) is not an error worth surfacing.
    let _ = builder.try_init();
}
