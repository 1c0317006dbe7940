// filtergen/src/ui/output_format.rs
//! Themed writers for console messages and the rule preview.
//!
//! Every helper takes an explicit `enable_color` flag so callers can gate
//! styling on terminal detection and keep piped output plain.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use filtergen_core::FilterRule;

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme's foreground color for `entry` when color is enabled.
fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_color: bool) -> String {
    if !enable_color {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

pub fn print_info_message(
    writer: &mut impl Write,
    message: &str,
    theme: &ThemeMap,
    enable_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", styled(message, ThemeEntry::Info, theme, enable_color))?;
    Ok(())
}

pub fn print_success_message(
    writer: &mut impl Write,
    message: &str,
    theme: &ThemeMap,
    enable_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", styled(message, ThemeEntry::Success, theme, enable_color))?;
    Ok(())
}

pub fn print_warn_message(
    writer: &mut impl Write,
    message: &str,
    theme: &ThemeMap,
    enable_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", styled(message, ThemeEntry::Warn, theme, enable_color))?;
    Ok(())
}

pub fn print_error_message(
    writer: &mut impl Write,
    message: &str,
    theme: &ThemeMap,
    enable_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", styled(message, ThemeEntry::Error, theme, enable_color))?;
    Ok(())
}

/// Echoes one generated rule the way it appears in the artifact: the comment
/// line (when titles are enabled) and the rule line.
pub fn print_rule_preview(
    writer: &mut impl Write,
    rule: &FilterRule,
    emit_titles: bool,
    theme: &ThemeMap,
    enable_color: bool,
) -> Result<()> {
    if emit_titles {
        let comment = format!("# {}", rule.word);
        writeln!(writer, "{}", styled(&comment, ThemeEntry::RuleComment, theme, enable_color))?;
    }
    let line = format!("- {}, {}", rule.pattern, rule.replace_with);
    writeln!(writer, "{}", styled(&line, ThemeEntry::RulePattern, theme, enable_color))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use filtergen_core::BoundaryMode;

    #[test]
    fn preview_is_plain_without_color() {
        let theme = ThemeStyle::default_theme_map();
        let rule = FilterRule {
            word: "cow".to_string(),
            pattern: "<p>".to_string(),
            replace_with: "x".to_string(),
            mode: BoundaryMode::Normal,
        };
        let mut buffer = Vec::new();
        print_rule_preview(&mut buffer, &rule, true, &theme, false).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "# cow\n- <p>, x\n");
    }

    #[test]
    fn colored_preview_wraps_in_ansi_escapes() {
        let theme = ThemeStyle::default_theme_map();
        let rule = FilterRule {
            word: "cow".to_string(),
            pattern: "<p>".to_string(),
            replace_with: "x".to_string(),
            mode: BoundaryMode::Normal,
        };
        let mut buffer = Vec::new();
        print_rule_preview(&mut buffer, &rule, false, &theme, true).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\u{1b}["));
    }
}
