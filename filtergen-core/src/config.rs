//! Configuration management for `filtergen-core`.
//!
//! This module defines the immutable configuration object the generator is
//! constructed from: the replacement literal, word-list and artifact paths,
//! the default word list, rendering and expansion flags, the variant table,
//! and the structural fragments. It handles deserialization of YAML overlay
//! files and provides utilities for merging and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::fragments::{FragmentOverrides, NoiseFragments};
use crate::variants::VariantTable;

/// File name probed for in the candidate configuration directories.
pub const CONFIG_FILE_NAME: &str = "filtergen.yaml";

/// The complete, immutable configuration for a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Replacement literal written into every rule line.
    pub replacement: String,
    /// Word-list path; a missing file silently falls back to `default_words`.
    pub input_file: PathBuf,
    /// Artifact path written by the generate command.
    pub output_file: PathBuf,
    /// Built-in word list used when the input file does not exist. Entries
    /// use word-list syntax, so a leading `!` selects strong boundaries.
    pub default_words: Vec<String>,
    /// Emit a `# <word>` comment line above each rule.
    pub emit_titles: bool,
    /// Expand Spanish gender variants (`o` endings also yield `a` forms).
    pub gender_variants: bool,
    /// Tolerate hex ("rainbow") color sequences in addition to classic codes.
    pub hex_colors: bool,
    /// Letter-variant equivalence table.
    pub variants: VariantTable,
    /// Structural regex fragments.
    pub fragments: NoiseFragments,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            replacement: "x".to_string(),
            input_file: PathBuf::from("words.txt"),
            output_file: PathBuf::from("generated_filters.yml"),
            default_words: vec!["cow".to_string()],
            emit_titles: true,
            gender_variants: false,
            hex_colors: false,
            variants: VariantTable::default(),
            fragments: NoiseFragments::default(),
        }
    }
}

/// Overlay parsed from a user configuration file; every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub replacement: Option<String>,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub default_words: Option<Vec<String>>,
    pub emit_titles: Option<bool>,
    pub gender_variants: Option<bool>,
    pub hex_colors: Option<bool>,
    /// Merged over the default table letter by letter.
    pub variants: Option<VariantTable>,
    pub fragments: FragmentOverrides,
}

impl GeneratorConfig {
    /// Loads a configuration overlay from a YAML file and merges it over the
    /// built-in defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading generator configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let overlay: ConfigOverlay = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let config = merge_config(GeneratorConfig::default(), Some(overlay));
        validate_config(&config)?;
        debug!("Loaded configuration with {} variant entries.", config.variants.len());

        Ok(config)
    }

    /// The fragments actually used for generation, with the hex color swap
    /// applied when configured.
    pub fn effective_fragments(&self) -> NoiseFragments {
        if self.hex_colors {
            self.fragments.clone().with_hex_colors()
        } else {
            self.fragments.clone()
        }
    }
}

/// Merges a user overlay over a base configuration. Scalars replace; the
/// variant table merges per letter; fragments merge per field.
pub fn merge_config(base: GeneratorConfig, overlay: Option<ConfigOverlay>) -> GeneratorConfig {
    let Some(overlay) = overlay else {
        return base;
    };
    debug!("Merging user configuration overlay over defaults.");

    let mut variants = base.variants;
    if let Some(user_table) = &overlay.variants {
        debug!("Merging {} user variant entr(ies).", user_table.len());
        variants.merge(user_table);
    }

    GeneratorConfig {
        replacement: overlay.replacement.unwrap_or(base.replacement),
        input_file: overlay.input_file.unwrap_or(base.input_file),
        output_file: overlay.output_file.unwrap_or(base.output_file),
        default_words: overlay.default_words.unwrap_or(base.default_words),
        emit_titles: overlay.emit_titles.unwrap_or(base.emit_titles),
        gender_variants: overlay.gender_variants.unwrap_or(base.gender_variants),
        hex_colors: overlay.hex_colors.unwrap_or(base.hex_colors),
        variants,
        fragments: overlay.fragments.apply(base.fragments),
    }
}

/// Candidate locations probed for a configuration file when none is given
/// explicitly: the working directory first, then the user config directory.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("filtergen").join(CONFIG_FILE_NAME));
    }
    paths
}

/// Validates configuration integrity, collecting every problem into a single
/// error so the user can fix them all at once.
pub fn validate_config(config: &GeneratorConfig) -> Result<()> {
    let mut errors = Vec::new();

    if config.replacement.is_empty() {
        errors.push("`replacement` must not be empty.".to_string());
    }

    for word in &config.default_words {
        if word.trim().is_empty() {
            errors.push("`default_words` contains a blank entry.".to_string());
        }
    }

    for (letter, glyphs) in config.variants.iter() {
        if glyphs.is_empty() {
            errors.push(format!("Variant entry for '{letter}' is empty."));
        }
    }

    // The fragments must assemble into compilable patterns. A one-letter
    // probe exercises the same wrap the generator emits.
    let fragments = config.effective_fragments();
    let probes = [
        ("normal", &fragments.prefix, &fragments.suffix),
        ("strong", &fragments.strong_prefix, &fragments.strong_suffix),
    ];
    for (mode_name, prefix, suffix) in probes {
        let probe = format!(
            "{prefix}({color}{color}[a]{color}{separator}?{color}){suffix}",
            color = fragments.color,
            separator = fragments.separator,
        );
        if let Err(e) = fancy_regex::Regex::new(&probe) {
            errors.push(format!(
                "The {mode_name} boundary fragments do not assemble into a valid pattern: {e}"
            ));
        }
    }

    if !errors.is_empty() {
        Err(anyhow!(format!(
            "Configuration validation failed:\n{}",
            errors.join("\n")
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_config(&GeneratorConfig::default()).unwrap();
    }

    #[test]
    fn empty_replacement_is_rejected() {
        let config = GeneratorConfig { replacement: String::new(), ..Default::default() };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("replacement"));
    }

    #[test]
    fn broken_fragment_override_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.fragments.prefix = "(?<![unclosed".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn merge_without_overlay_is_identity() {
        let merged = merge_config(GeneratorConfig::default(), None);
        assert_eq!(merged, GeneratorConfig::default());
    }

    #[test]
    fn candidate_paths_start_with_the_working_directory() {
        let paths = config_candidate_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE_NAME));
    }
}
