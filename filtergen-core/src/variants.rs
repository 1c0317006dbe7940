// filtergen-core/src/variants.rs
//! The letter-variant equivalence table.
//!
//! A [`VariantTable`] maps each lowercase base letter to the string of glyphs
//! treated as equivalent during matching (the letter itself, accented forms,
//! homoglyphs, digit look-alikes). The default table is embedded as YAML and
//! parsed once; custom tables from a configuration file are merged over it
//! letter by letter.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static DEFAULT_TABLE: Lazy<VariantTable> = Lazy::new(|| {
    serde_yml::from_str(include_str!("../config/default_variants.yaml"))
        .expect("embedded default variant table must parse")
});

/// Ordered mapping from lowercase base letter to its equivalence glyphs.
///
/// The ordering makes hashing and iteration deterministic, which the compiled
/// map cache relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VariantTable {
    entries: BTreeMap<char, String>,
}

impl Default for VariantTable {
    /// Returns the embedded default table.
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl VariantTable {
    /// An empty table, useful as a merge target or in tests.
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new() }
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// Looks up the glyph string for a base letter.
    pub fn get(&self, letter: char) -> Option<&str> {
        self.entries.get(&letter).map(String::as_str)
    }

    pub fn set(&mut self, letter: char, glyphs: impl Into<String>) {
        self.entries.insert(letter, glyphs.into());
    }

    /// Merges `other` into `self`; entries in `other` win.
    pub fn merge(&mut self, other: &VariantTable) {
        for (letter, glyphs) in &other.entries {
            self.entries.insert(*letter, glyphs.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&char, &String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
