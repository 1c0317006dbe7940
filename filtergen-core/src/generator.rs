// filtergen-core/src/generator.rs
//! The pattern generator: maps a word to a single regex that matches any
//! noisy rendition of that word as a whole token inside larger text.
//!
//! Each character of the word becomes a block of
//! `COLOR class COLOR SEP?`, so a run of color codes is tolerated on both
//! sides of every letter and an optional separator run after it. The
//! concatenated blocks are wrapped in a boundary assertion, an optional
//! leading color run, a capture group, and the trailing counterparts. Every
//! noise segment is an optional bounded class rather than a greedy wildcard,
//! which keeps the match anchored character by character and avoids
//! catastrophic backtracking.
//!
//! Generation is a pure, single linear pass over the word and never fails:
//! characters without a variant entry degrade to their own escaped literal.
//!
//! License: MIT OR Apache-2.0

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::compiler::{get_or_compile_table, CompiledVariantMap};
use crate::config::GeneratorConfig;
use crate::errors::FilterGenError;
use crate::fragments::NoiseFragments;
use crate::wordlist::{BoundaryMode, WordEntry};

/// Words longer than this still generate, but the resulting pattern grows
/// linearly and downstream filter plugins tend to choke on it.
pub const MAX_WORD_CHARS: usize = 15;

/// A single generated filter rule: the source word, its noise-tolerant
/// pattern, and the replacement literal the downstream filter substitutes on
/// a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    pub word: String,
    pub pattern: String,
    pub replace_with: String,
    pub mode: BoundaryMode,
}

/// Deterministically maps words to noise-tolerant regex patterns.
///
/// Holds a shared reference to the compiled variant map and the structural
/// fragments for the run; both are read-only after construction, so the
/// generator is a pure function of its input.
#[derive(Debug)]
pub struct PatternGenerator {
    map: Arc<CompiledVariantMap>,
    fragments: NoiseFragments,
    replacement: String,
}

impl PatternGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let map = get_or_compile_table(&config.variants)
            .context("Failed to compile variant table for PatternGenerator")?;
        Ok(Self {
            map,
            fragments: config.effective_fragments(),
            replacement: config.replacement.clone(),
        })
    }

    /// Builds a generator from pre-compiled parts, bypassing configuration.
    pub fn from_parts(
        map: Arc<CompiledVariantMap>,
        fragments: NoiseFragments,
        replacement: impl Into<String>,
    ) -> Self {
        Self { map, fragments, replacement: replacement.into() }
    }

    /// Builds the noise-tolerant pattern for `word`.
    ///
    /// Pure and infallible: every character either resolves to its variant
    /// class or falls back to an escaped literal of itself.
    pub fn generate_pattern(&self, word: &str, mode: BoundaryMode) -> String {
        let color = &self.fragments.color;
        let separator = &self.fragments.separator;

        let mut body = String::new();
        for ch in word.chars() {
            body.push_str(color);
            body.push_str(&self.class_for(ch));
            body.push_str(color);
            body.push_str(separator);
            body.push('?');
        }

        let (prefix, suffix) = match mode {
            BoundaryMode::Normal => (&self.fragments.prefix, &self.fragments.suffix),
            BoundaryMode::Strong => (&self.fragments.strong_prefix, &self.fragments.strong_suffix),
        };

        format!("{prefix}({color}{body}{color}){suffix}")
    }

    /// Generates the full rule for a word-list entry.
    pub fn generate_rule(&self, entry: &WordEntry) -> FilterRule {
        if entry.word.chars().count() > MAX_WORD_CHARS {
            warn!(
                "Word '{}' exceeds {} characters; the generated pattern will be large.",
                entry.word, MAX_WORD_CHARS
            );
        }
        let pattern = self.generate_pattern(&entry.word, entry.mode);
        debug!(
            "Generated {} pattern for '{}' ({} bytes).",
            entry.mode,
            entry.word,
            pattern.len()
        );
        FilterRule {
            word: entry.word.clone(),
            pattern,
            replace_with: self.replacement.clone(),
            mode: entry.mode,
        }
    }

    /// Compiles the rule's pattern to prove it is valid regex text.
    ///
    /// With the default fragments this cannot fail; user-supplied fragment
    /// overrides are the only way to produce an uncompilable pattern.
    pub fn verify_rule(&self, rule: &FilterRule) -> Result<(), FilterGenError> {
        fancy_regex::Regex::new(&rule.pattern)
            .map(|_| ())
            .map_err(|e| FilterGenError::PatternVerificationError(rule.word.clone(), e))
    }

    /// Resolves the matcher fragment for one character: the variant class for
    /// its case-folded form, or the escaped literal when unmapped.
    fn class_for(&self, ch: char) -> String {
        for lower in ch.to_lowercase() {
            if let Some(class) = self.map.class_for(lower) {
                return class.to_string();
            }
        }
        regex::escape(&ch.to_string())
    }
}
