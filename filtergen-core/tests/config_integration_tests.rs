// filtergen-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use filtergen_core::config::{merge_config, ConfigOverlay, GeneratorConfig};
use filtergen_core::{generate_filters_text, VariantTable};

#[test]
fn test_default_config_values() {
    let config = GeneratorConfig::default();
    assert_eq!(config.replacement, "x");
    assert_eq!(config.input_file.to_str(), Some("words.txt"));
    assert_eq!(config.output_file.to_str(), Some("generated_filters.yml"));
    assert_eq!(config.default_words, vec!["cow".to_string()]);
    assert!(config.emit_titles);
    assert!(!config.gender_variants);
    assert_eq!(config.variants.len(), 26);
}

#[test]
fn test_load_from_file_overrides_scalars() -> Result<()> {
    let yaml_content = r#"
replacement: "***"
output_file: "custom_filters.yml"
emit_titles: false
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let config = GeneratorConfig::load_from_file(file.path())?;
    assert_eq!(config.replacement, "***");
    assert_eq!(config.output_file.to_str(), Some("custom_filters.yml"));
    assert!(!config.emit_titles);
    // Untouched fields keep their defaults.
    assert_eq!(config.input_file.to_str(), Some("words.txt"));
    assert_eq!(config.variants.len(), 26);
    Ok(())
}

#[test]
fn test_load_from_file_merges_variants_per_letter() -> Result<()> {
    let yaml_content = r#"
variants:
  'i': "iI1"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let config = GeneratorConfig::load_from_file(file.path())?;
    assert_eq!(config.variants.get('i'), Some("iI1"));
    assert_eq!(config.variants.get('o'), VariantTable::default().get('o'));
    assert_eq!(config.variants.len(), 26);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_empty_replacement() -> Result<()> {
    let yaml_content = r#"
replacement: ""
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let err = GeneratorConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("validation failed"));
    Ok(())
}

#[test]
fn test_load_from_file_missing_path_is_fatal() {
    let err = GeneratorConfig::load_from_file("/nonexistent/filtergen.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_fragment_override_reaches_generated_patterns() -> Result<()> {
    let yaml_content = r#"
fragments:
  separator: '(?:[\s]*)'
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let config = GeneratorConfig::load_from_file(file.path())?;
    let artifact = generate_filters_text(&config, "cow\n")?;
    assert!(artifact.contains(r"(?:[\s]*)?"));
    Ok(())
}

#[test]
fn test_merge_config_overlay_wins() {
    let overlay = ConfigOverlay {
        replacement: Some("#".to_string()),
        gender_variants: Some(true),
        ..Default::default()
    };
    let merged = merge_config(GeneratorConfig::default(), Some(overlay));
    assert_eq!(merged.replacement, "#");
    assert!(merged.gender_variants);
    assert!(merged.emit_titles);
}

#[test]
fn test_hex_colors_swap_the_color_fragment() -> Result<()> {
    let config = GeneratorConfig { hex_colors: true, ..Default::default() };
    let artifact = generate_filters_text(&config, "cow\n")?;
    assert!(artifact.contains("§x"));
    Ok(())
}
