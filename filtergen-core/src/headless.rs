// filtergen-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive generation.
//! Callers that do not need per-rule control can go from a raw word list to
//! the rendered artifact text in a single call.

use anyhow::Result;

use crate::config::GeneratorConfig;
use crate::document::FilterDocument;
use crate::generator::PatternGenerator;
use crate::wordlist::{expand_gender_variants, parse_word_list, WordEntry};

/// Generates and verifies a rule for every entry, returning the assembled
/// document.
pub fn generate_document(
    config: &GeneratorConfig,
    entries: &[WordEntry],
) -> Result<FilterDocument> {
    let generator = PatternGenerator::new(config)?;
    let mut rules = Vec::with_capacity(entries.len());
    for entry in entries {
        let rule = generator.generate_rule(entry);
        generator.verify_rule(&rule)?;
        rules.push(rule);
    }
    Ok(FilterDocument::new(rules, config.emit_titles))
}

/// Fully processes a raw word list into artifact text. This function is the
/// primary entry point for non-interactive use.
///
/// # Arguments
///
/// * `config` - The merged generator configuration.
/// * `word_list` - Raw word-list text, one candidate word per line.
pub fn generate_filters_text(config: &GeneratorConfig, word_list: &str) -> Result<String> {
    let mut entries = parse_word_list(word_list);
    if config.gender_variants {
        entries = expand_gender_variants(entries);
    }
    Ok(generate_document(config, &entries)?.render())
}
