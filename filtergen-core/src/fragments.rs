// filtergen-core/src/fragments.rs
//! Structural regex fragments used to assemble noise-tolerant patterns.
//!
//! The generator interleaves these fragments with per-letter character
//! classes. They are domain data tied to the target chat system's color-code
//! syntax and to the separator superset evaders are known to use, so they are
//! carried as configuration rather than hard-coded into the algorithm. The
//! defaults below are the canonical sets and must be preserved verbatim:
//! downstream filter consumers depend on the exact matching footprint,
//! including the overlap between the separator class and the boundary
//! assertions.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// Optional run of color codes: the sentinel `§` followed by one hex or
/// format digit, repeated any number of times.
pub const COLOR: &str = r"(?:§[a-f0-9x])*";

/// Color run that also tolerates hex ("rainbow") sequences, where `§x`
/// introduces six `§<hexdigit>` pairs. Used when `hex_colors` is enabled.
pub const COLOR_HEX: &str = r"(?:§x(?=(?:§[0-9a-f]){6})(?:§[0-9a-f]){6}|§[0-9a-f])*";

/// Optional run of separator characters inserted between letters to break
/// naive substring matching.
pub const SEPARATOR: &str = r#"(?:[\s._@%\":;()¿?=!&/\^*_\-<>]*)"#;

/// Zero-width left boundary: the match must not be preceded by an
/// alphanumeric character or the color-code sentinel.
pub const PREFIX: &str = r"(?<![A-Za-z0-9§])";

/// Zero-width right boundary, mirroring [`PREFIX`].
pub const SUFFIX: &str = r"(?![A-Za-z0-9§])";

/// Strong left boundary: rejects a match preceded by three word characters,
/// used for words that must not fire inside longer benign tokens at all.
pub const STRONG_PREFIX: &str = r"(?<![a-záéíóúüñ]{3})";

/// Strong right boundary.
pub const STRONG_SUFFIX: &str = r"(?![a-záéíóúüñ])";

/// The full set of structural fragments a [`crate::PatternGenerator`] works
/// with. Field values are raw regex text; they are substituted into the
/// generated pattern without further escaping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoiseFragments {
    pub color: String,
    pub separator: String,
    pub prefix: String,
    pub suffix: String,
    pub strong_prefix: String,
    pub strong_suffix: String,
}

impl Default for NoiseFragments {
    fn default() -> Self {
        Self {
            color: COLOR.to_string(),
            separator: SEPARATOR.to_string(),
            prefix: PREFIX.to_string(),
            suffix: SUFFIX.to_string(),
            strong_prefix: STRONG_PREFIX.to_string(),
            strong_suffix: STRONG_SUFFIX.to_string(),
        }
    }
}

impl NoiseFragments {
    /// Swaps the color run for the hex-aware form, leaving everything else
    /// untouched.
    pub fn with_hex_colors(mut self) -> Self {
        self.color = COLOR_HEX.to_string();
        self
    }
}

/// Per-fragment overlay parsed from a user configuration file. Absent fields
/// keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FragmentOverrides {
    pub color: Option<String>,
    pub separator: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub strong_prefix: Option<String>,
    pub strong_suffix: Option<String>,
}

impl FragmentOverrides {
    /// Applies this overlay on top of `base`, field by field.
    pub fn apply(&self, base: NoiseFragments) -> NoiseFragments {
        NoiseFragments {
            color: self.color.clone().unwrap_or(base.color),
            separator: self.separator.clone().unwrap_or(base.separator),
            prefix: self.prefix.clone().unwrap_or(base.prefix),
            suffix: self.suffix.clone().unwrap_or(base.suffix),
            strong_prefix: self.strong_prefix.clone().unwrap_or(base.strong_prefix),
            strong_suffix: self.strong_suffix.clone().unwrap_or(base.strong_suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_canonical_fragments() {
        let fragments = NoiseFragments::default();
        assert_eq!(fragments.color, COLOR);
        assert_eq!(fragments.separator, SEPARATOR);
        assert_eq!(fragments.prefix, PREFIX);
        assert_eq!(fragments.suffix, SUFFIX);
    }

    #[test]
    fn hex_colors_only_swap_the_color_run() {
        let fragments = NoiseFragments::default().with_hex_colors();
        assert_eq!(fragments.color, COLOR_HEX);
        assert_eq!(fragments.separator, SEPARATOR);
    }

    #[test]
    fn overrides_apply_field_by_field() {
        let overrides = FragmentOverrides {
            separator: Some(r"(?:[\s]*)".to_string()),
            ..Default::default()
        };
        let fragments = overrides.apply(NoiseFragments::default());
        assert_eq!(fragments.separator, r"(?:[\s]*)");
        assert_eq!(fragments.color, COLOR);
    }
}
