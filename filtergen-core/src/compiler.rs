// filtergen-core/src/compiler.rs
//! compiler.rs - Manages the compilation and caching of variant tables.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! [`VariantTable`] into a [`CompiledVariantMap`] of per-letter character
//! class fragments, ready for substitution into generated patterns. It uses
//! a global, shared cache to avoid redundant compilation: the table never
//! changes after startup, so every generator run for the same table shares
//! one compiled map.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::errors::FilterGenError;
use crate::variants::VariantTable;

/// Per-letter character-class fragments derived from a [`VariantTable`].
///
/// Each class is the meta-escaped glyph string wrapped in `[...]`, so it can
/// be concatenated directly into a larger pattern.
#[derive(Debug)]
pub struct CompiledVariantMap {
    classes: HashMap<char, String>,
}

impl CompiledVariantMap {
    /// Returns the character-class fragment for a base letter, if the table
    /// had an entry for it.
    pub fn class_for(&self, letter: char) -> Option<&str> {
        self.classes.get(&letter).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled variant maps.
    /// The key is a hash of the source table.
    static ref COMPILED_MAP_CACHE: RwLock<HashMap<u64, Arc<CompiledVariantMap>>> =
        RwLock::new(HashMap::new());
}

/// Hashes a `VariantTable` to create a stable, unique key for the cache.
/// Tables iterate in letter order, so the hash is deterministic.
fn hash_table(table: &VariantTable) -> u64 {
    let mut hasher = DefaultHasher::new();
    table.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a `VariantTable` into a `CompiledVariantMap`.
/// This is the low-level function that performs the actual class building.
pub fn compile_table(table: &VariantTable) -> Result<CompiledVariantMap, FilterGenError> {
    debug!("Starting compilation of {} variant entries.", table.len());

    let mut classes = HashMap::new();
    let mut compilation_errors = Vec::new();

    for (letter, glyphs) in table.iter() {
        if glyphs.is_empty() {
            compilation_errors.push(FilterGenError::EmptyVariantEntry(*letter));
            continue;
        }

        let class = format!("[{}]", regex::escape(glyphs));

        // Every class must stand alone as a valid pattern.
        match fancy_regex::Regex::new(&class) {
            Ok(_) => {
                classes.insert(*letter, class);
            }
            Err(e) => {
                compilation_errors.push(FilterGenError::ClassCompilationError(*letter, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(FilterGenError::Fatal(format!(
            "Failed to compile {} variant entr(ies):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling variant table. Total classes: {}.", classes.len());
        Ok(CompiledVariantMap { classes })
    }
}

/// Gets a `CompiledVariantMap` from the cache or compiles it if not found.
///
/// This is the public entry point for retrieving a compiled map. It returns an
/// `Arc`, allowing for cheap sharing across generators.
pub fn get_or_compile_table(table: &VariantTable) -> Result<Arc<CompiledVariantMap>> {
    let cache_key = hash_table(table);

    {
        let cache = COMPILED_MAP_CACHE.read().unwrap();
        if let Some(map) = cache.get(&cache_key) {
            debug!("Serving compiled variant map from cache for key: {}", &cache_key);
            return Ok(Arc::clone(map));
        }
    }

    debug!("Compiled variant map not found in cache. Compiling now.");
    let compiled = compile_table(table)?;
    let compiled_arc = Arc::new(compiled);

    COMPILED_MAP_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached variant map for key: {}", &cache_key);
    Ok(compiled_arc)
}
