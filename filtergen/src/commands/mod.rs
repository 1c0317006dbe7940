// filtergen/src/commands/mod.rs
//! Command implementations and the plumbing they share: configuration
//! resolution, word-list loading, and themed stderr messaging.

pub mod check;
pub mod generate;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

use filtergen_core::{
    config_candidate_paths, expand_gender_variants, parse_word_list, GeneratorConfig, WordEntry,
};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Resolves the run configuration: an explicit `--config` path is loaded (and
/// must exist), otherwise the candidate locations are probed, otherwise the
/// built-in defaults apply.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    if let Some(path) = explicit {
        return GeneratorConfig::load_from_file(path);
    }
    for candidate in config_candidate_paths() {
        if candidate.exists() {
            return GeneratorConfig::load_from_file(&candidate);
        }
    }
    debug!("No configuration file found; using built-in defaults.");
    Ok(GeneratorConfig::default())
}

/// Loads the word entries for a run. A missing or empty word-list file is
/// not an error: the configured default list is used instead.
pub(crate) fn load_word_entries(path: &Path, config: &GeneratorConfig) -> Result<Vec<WordEntry>> {
    let mut entries = if path.exists() {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let entries = parse_word_list(&text);
        info!("Loaded {} word(s) from {}.", entries.len(), path.display());
        entries
    } else {
        info!(
            "Word list {} not found; falling back to the configured default list.",
            path.display()
        );
        Vec::new()
    };

    if entries.is_empty() {
        entries = config
            .default_words
            .iter()
            .filter_map(|word| WordEntry::parse_line(word))
            .collect();
    }

    if config.gender_variants {
        entries = expand_gender_variants(entries);
        debug!("Gender expansion yielded {} entr(ies).", entries.len());
    }
    Ok(entries)
}
