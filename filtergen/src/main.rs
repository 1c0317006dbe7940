// filtergen/src/main.rs
//! Filtergen entry point.
//!
//! Parses the CLI, initializes logging and the output theme, and dispatches
//! to the selected command.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use filtergen::cli::{Cli, Commands};
use filtergen::commands;
use filtergen::logger;
use filtergen::ui::theme::build_theme_map;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    info!("filtergen started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = build_theme_map(args.theme.as_ref()).context("Theme error")?;

    match args.command {
        Commands::Generate(cmd) => commands::generate::run(cmd, &theme_map, args.quiet),
        Commands::Check(cmd) => commands::check::run(cmd, &theme_map, args.quiet),
    }
}
