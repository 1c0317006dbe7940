//! Generate command implementation: the full word-list to artifact path.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use filtergen_core::{validate_config, FilterDocument, GeneratorConfig, PatternGenerator};

use crate::cli::GenerateCommand;
use crate::commands::{info_msg, load_word_entries, resolve_config, success_msg, warn_msg};
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Applies command-line overrides on top of the resolved configuration.
fn apply_cli_overrides(mut config: GeneratorConfig, cmd: &GenerateCommand) -> GeneratorConfig {
    if let Some(replacement) = &cmd.replacement {
        config.replacement = replacement.clone();
    }
    if let Some(input_file) = &cmd.input_file {
        config.input_file = input_file.clone();
    }
    if let Some(output) = &cmd.output {
        config.output_file = output.clone();
    }
    if cmd.no_titles {
        config.emit_titles = false;
    }
    if cmd.gender_variants {
        config.gender_variants = true;
    }
    if cmd.hex_colors {
        config.hex_colors = true;
    }
    config
}

/// The main operation runner for the `generate` command.
pub fn run(cmd: GenerateCommand, theme_map: &ThemeMap, quiet: bool) -> Result<()> {
    info!("Starting generate operation.");

    let config = apply_cli_overrides(resolve_config(cmd.config.as_deref())?, &cmd);
    validate_config(&config)?;

    let entries = load_word_entries(&config.input_file, &config)?;
    if entries.is_empty() && !quiet {
        warn_msg("No words to process; the artifact will contain only the header.", theme_map);
    }
    let generator = PatternGenerator::new(&config)?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    let mut rules = Vec::with_capacity(entries.len());
    for entry in &entries {
        let rule = generator.generate_rule(entry);
        generator.verify_rule(&rule)?;
        if !quiet {
            output_format::print_rule_preview(
                &mut writer,
                &rule,
                config.emit_titles,
                theme_map,
                supports_color,
            )?;
        }
        rules.push(rule);
    }
    writer.flush()?;

    let document = FilterDocument::new(rules, config.emit_titles);
    let artifact = document.render();
    debug!(
        "Rendered artifact for {} rule(s) ({} bytes).",
        document.len(),
        artifact.len()
    );

    if !quiet {
        info_msg(
            format!("Writing filter artifact to {}.", config.output_file.display()),
            theme_map,
        );
    }
    fs::write(&config.output_file, artifact)
        .with_context(|| format!("Failed to write output file {}", config.output_file.display()))?;

    if !quiet {
        success_msg(
            format!(
                "{} filter rule(s) written to {}.",
                document.len(),
                config.output_file.display()
            ),
            theme_map,
        );
    }

    info!("Generate operation completed.");
    Ok(())
}
