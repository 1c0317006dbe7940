// filtergen/src/cli.rs
//! This file defines the command-line interface (CLI) for the filtergen
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "filtergen",
    author = "Filtergen Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate obfuscation-resistant chat filter rules",
    long_about = "Filtergen is a command-line utility that converts plain-text word lists into regular-expression filter rules for chat denylists. The generated rules keep matching a word when evaders insert color codes or separator characters between its letters, or swap letters for accented forms, homoglyphs, and digit look-alikes.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'filtergen' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `filtergen` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates filter rules and writes the artifact file.
    #[command(about = "Generates filter rules for a word list and writes the artifact file.")]
    Generate(GenerateCommand),

    /// Generates and verifies filter rules without writing anything.
    #[command(about = "Generates and verifies filter rules without writing the artifact.")]
    Check(CheckCommand),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Path to a word-list file (falls back to the configured default list if missing).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read candidate words from this file; a missing file falls back to the configured default list.")]
    pub input_file: Option<PathBuf>,

    /// Write the generated artifact to this file instead of the configured path.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the generated artifact to this file instead of the configured path.")]
    pub output: Option<PathBuf>,

    /// Path to a custom generator configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom generator configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Replacement literal written into every rule.
    #[arg(long = "replacement", short = 'r', value_name = "STR", help = "Replacement literal written into every rule.")]
    pub replacement: Option<String>,

    /// Omit the `# <word>` comment line above each rule.
    #[arg(long = "no-titles", help = "Omit the `# <word>` comment line above each rule.")]
    pub no_titles: bool,

    /// Also generate the `a`-ending form of every word ending in `o`.
    #[arg(long = "gender-variants", help = "Also generate the `a`-ending form of every word ending in `o` (Spanish word lists).")]
    pub gender_variants: bool,

    /// Tolerate hex (rainbow) color sequences in addition to classic color codes.
    #[arg(long = "hex-colors", help = "Tolerate hex (rainbow) color sequences in addition to classic color codes.")]
    pub hex_colors: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Path to a word-list file (falls back to the configured default list if missing).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read candidate words from this file; a missing file falls back to the configured default list.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom generator configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom generator configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Also generate the `a`-ending form of every word ending in `o`.
    #[arg(long = "gender-variants", help = "Also generate the `a`-ending form of every word ending in `o` (Spanish word lists).")]
    pub gender_variants: bool,

    /// Export the verification report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the verification report to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the verification report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Print the verification report as JSON to stdout.")]
    pub json_stdout: bool,
}
