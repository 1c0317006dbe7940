//! Check command implementation: generate and verify every pattern without
//! writing the artifact, then report the results.

use anyhow::{bail, Context, Result};
use comfy_table::Table;
use log::info;
use serde::Serialize;
use std::fs;

use filtergen_core::{validate_config, BoundaryMode, GeneratorConfig, PatternGenerator};

use crate::cli::CheckCommand;
use crate::commands::{load_word_entries, resolve_config, success_msg};
use crate::ui::theme::ThemeMap;

/// One row of the verification report.
#[derive(Debug, Serialize)]
pub struct CheckReportItem {
    pub word: String,
    pub mode: BoundaryMode,
    pub pattern: String,
    pub pattern_bytes: usize,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn apply_cli_overrides(mut config: GeneratorConfig, cmd: &CheckCommand) -> GeneratorConfig {
    if let Some(input_file) = &cmd.input_file {
        config.input_file = input_file.clone();
    }
    if cmd.gender_variants {
        config.gender_variants = true;
    }
    config
}

/// The main operation runner for the `check` command.
pub fn run(cmd: CheckCommand, theme_map: &ThemeMap, quiet: bool) -> Result<()> {
    info!("Starting check operation.");

    let config = apply_cli_overrides(resolve_config(cmd.config.as_deref())?, &cmd);
    validate_config(&config)?;

    let entries = load_word_entries(&config.input_file, &config)?;
    let generator = PatternGenerator::new(&config)?;

    let mut report = Vec::with_capacity(entries.len());
    for entry in &entries {
        let rule = generator.generate_rule(entry);
        let verification = generator.verify_rule(&rule);
        report.push(CheckReportItem {
            word: rule.word,
            mode: rule.mode,
            pattern_bytes: rule.pattern.len(),
            pattern: rule.pattern,
            ok: verification.is_ok(),
            error: verification.err().map(|e| e.to_string()),
        });
    }

    if cmd.json_stdout {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(path) = &cmd.json_file {
            let json = serde_json::to_string_pretty(&report)?;
            fs::write(path, json)
                .with_context(|| format!("Failed to write JSON report {}", path.display()))?;
            info!("JSON report written to {}.", path.display());
        }
        if !quiet {
            print_report_table(&report);
        }
    }

    let failed = report.iter().filter(|item| !item.ok).count();
    if failed > 0 {
        bail!("{failed} of {} generated pattern(s) failed verification", report.len());
    }

    if !quiet {
        success_msg(
            format!("All {} generated pattern(s) verified.", report.len()),
            theme_map,
        );
    }
    info!("Check operation completed.");
    Ok(())
}

fn print_report_table(report: &[CheckReportItem]) {
    let mut table = Table::new();
    table.set_header(vec!["Word", "Mode", "Pattern bytes", "Status"]);
    for item in report {
        let status = if item.ok {
            "ok".to_string()
        } else {
            item.error.clone().unwrap_or_else(|| "failed".to_string())
        };
        table.add_row(vec![
            item.word.clone(),
            item.mode.to_string(),
            item.pattern_bytes.to_string(),
            status,
        ]);
    }
    println!("{table}");
}
