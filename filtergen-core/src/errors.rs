//! errors.rs - Custom error types for the filtergen-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `filtergen-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterGenError {
    #[error("Variant entry for letter '{0}' is empty")]
    EmptyVariantEntry(char),

    #[error("Character class for letter '{0}' failed to compile: {1}")]
    ClassCompilationError(char, fancy_regex::Error),

    #[error("Generated pattern for word '{0}' failed to compile: {1}")]
    PatternVerificationError(String, fancy_regex::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
