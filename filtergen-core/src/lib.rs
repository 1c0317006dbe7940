// filtergen-core/src/lib.rs
//! # Filtergen Core Library
//!
//! `filtergen-core` provides the fundamental, platform-independent logic for
//! turning plain-text words into obfuscation-resistant chat filter rules. It
//! defines the letter-variant equivalence table, the structural regex
//! fragments for color-code and separator noise, and the pattern generator
//! that assembles them into whole-token matching rules.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of words into pattern text, without concerns for I/O or
//! application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `GeneratorConfig` and overlay loading/merging/validation.
//! * `variants`: The letter-variant equivalence table and its embedded default.
//! * `fragments`: The structural regex fragments as configuration data.
//! * `compiler`: Compiles variant tables into shared, cached character-class maps.
//! * `generator`: The `PatternGenerator` and the `FilterRule` it produces.
//! * `wordlist`: Word-list parsing, strong markers, gender-variant expansion.
//! * `document`: Rendering rules into the `filters:` artifact text.
//! * `headless`: Convenience wrappers for one-shot, non-interactive use.
//!
//! ## Usage Example
//!
//! ```rust
//! use filtergen_core::{generate_filters_text, GeneratorConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Start from the built-in defaults (standard variant table and
//!     //    fragments, replacement literal "x").
//!     let config = GeneratorConfig::default();
//!
//!     // 2. One candidate word per line; `!` requests strong boundaries.
//!     let artifact = generate_filters_text(&config, "cow\n!bull\n")?;
//!
//!     assert!(artifact.starts_with("filters:\n"));
//!     assert!(artifact.contains("# cow"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations and defines the
//! structured [`FilterGenError`] type for programmatic handling. Pattern
//! generation itself never fails: characters without a variant entry degrade
//! to escaped-literal matching.
//!
//! ## Design Principles
//!
//! * **Stateless:** generation is a pure function of the word and the
//!   configured tables.
//! * **Shared read-only data:** compiled variant maps are built once and
//!   shared by reference across every generator that uses the same table.
//! * **Configuration over code:** color-code and separator dialects live in
//!   data, so new noise dialects need no algorithm changes.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod document;
pub mod errors;
pub mod fragments;
pub mod generator;
pub mod headless;
pub mod variants;
pub mod wordlist;

/// Re-exports the public configuration types and helpers.
pub use config::{
    config_candidate_paths,
    merge_config,
    validate_config,
    ConfigOverlay,
    GeneratorConfig,
    CONFIG_FILE_NAME,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterGenError;

/// Re-exports the variant table and its compiled form.
pub use compiler::{compile_table, get_or_compile_table, CompiledVariantMap};
pub use variants::VariantTable;

/// Re-exports the structural fragments and their canonical values.
pub use fragments::{FragmentOverrides, NoiseFragments};

/// Re-exports the generator and its output type.
pub use generator::{FilterRule, PatternGenerator, MAX_WORD_CHARS};

/// Re-exports word-list handling.
pub use wordlist::{expand_gender_variants, parse_word_list, BoundaryMode, WordEntry};

/// Re-exports artifact rendering.
pub use document::{FilterDocument, DOCUMENT_HEADER};

/// Re-exports the one-shot helpers for non-interactive use.
pub use headless::{generate_document, generate_filters_text};
