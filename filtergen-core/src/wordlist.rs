// filtergen-core/src/wordlist.rs
//! Word-list parsing.
//!
//! A word list is plain text, one candidate word per line. Lines are trimmed;
//! blank lines and `#` comments are skipped. A leading `!` marks the word for
//! strong-boundary generation and is not part of the word itself.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which boundary pair wraps a generated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Rejects alphanumeric or color-sentinel neighbors.
    Normal,
    /// Additionally rejects matches deep inside longer words.
    Strong,
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoundaryMode::Normal => write!(f, "normal"),
            BoundaryMode::Strong => write!(f, "strong"),
        }
    }
}

/// One parsed word-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub mode: BoundaryMode,
}

impl WordEntry {
    pub fn normal(word: impl Into<String>) -> Self {
        Self { word: word.into(), mode: BoundaryMode::Normal }
    }

    pub fn strong(word: impl Into<String>) -> Self {
        Self { word: word.into(), mode: BoundaryMode::Strong }
    }

    /// Parses a single word-list line. Returns `None` for blank lines and
    /// comments.
    pub fn parse_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        if let Some(rest) = trimmed.strip_prefix('!') {
            let word = rest.trim();
            if word.is_empty() {
                return None;
            }
            Some(Self::strong(word))
        } else {
            Some(Self::normal(trimmed))
        }
    }
}

/// Parses a full word-list document into entries, preserving order.
pub fn parse_word_list(text: &str) -> Vec<WordEntry> {
    let entries: Vec<WordEntry> = text.lines().filter_map(WordEntry::parse_line).collect();
    debug!("Parsed {} word-list entr(ies).", entries.len());
    entries
}

/// Expands Spanish gender variants: every word ending in `o` also yields its
/// `a`-ending form, keeping the original's boundary mode. First-seen order is
/// preserved and duplicates are dropped.
pub fn expand_gender_variants(entries: Vec<WordEntry>) -> Vec<WordEntry> {
    let mut seen: HashSet<(BoundaryMode, String)> = HashSet::new();
    let mut expanded = Vec::with_capacity(entries.len() * 2);

    for entry in entries {
        let feminine = entry.word.strip_suffix('o').map(|stem| WordEntry {
            word: format!("{stem}a"),
            mode: entry.mode,
        });
        push_unique(&mut expanded, &mut seen, entry);
        if let Some(feminine) = feminine {
            push_unique(&mut expanded, &mut seen, feminine);
        }
    }

    expanded
}

fn push_unique(
    out: &mut Vec<WordEntry>,
    seen: &mut HashSet<(BoundaryMode, String)>,
    entry: WordEntry,
) {
    if seen.insert((entry.mode, entry.word.clone())) {
        out.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let entries = parse_word_list("# header\n\n  cow  \n   \n# another\nbull\n");
        assert_eq!(entries, vec![WordEntry::normal("cow"), WordEntry::normal("bull")]);
    }

    #[test]
    fn bang_prefix_selects_strong_mode() {
        assert_eq!(WordEntry::parse_line("!hard"), Some(WordEntry::strong("hard")));
        assert_eq!(WordEntry::parse_line("! hard "), Some(WordEntry::strong("hard")));
        assert_eq!(WordEntry::parse_line("!"), None);
    }

    #[test]
    fn gender_expansion_preserves_mode_and_order() {
        let entries = vec![
            WordEntry::normal("perro"),
            WordEntry::strong("malo"),
            WordEntry::normal("gata"),
        ];
        let expanded = expand_gender_variants(entries);
        assert_eq!(
            expanded,
            vec![
                WordEntry::normal("perro"),
                WordEntry::normal("perra"),
                WordEntry::strong("malo"),
                WordEntry::strong("mala"),
                WordEntry::normal("gata"),
            ]
        );
    }

    #[test]
    fn gender_expansion_drops_duplicates() {
        let entries = vec![WordEntry::normal("perro"), WordEntry::normal("perra")];
        let expanded = expand_gender_variants(entries);
        assert_eq!(
            expanded,
            vec![WordEntry::normal("perro"), WordEntry::normal("perra")]
        );
    }
}
