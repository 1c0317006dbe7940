// filtergen-core/src/document.rs
//! Rendering of generated rules into the filter artifact.
//!
//! The artifact is line-oriented text: a `filters:` header, then per rule an
//! optional `# <word>` comment line and the `- <pattern>, <replacement>` rule
//! line. Rendering is pure; callers decide where the text goes.

use crate::generator::FilterRule;

/// The artifact's fixed header line.
pub const DOCUMENT_HEADER: &str = "filters:";

/// An ordered collection of generated rules plus rendering options.
#[derive(Debug, Clone)]
pub struct FilterDocument {
    rules: Vec<FilterRule>,
    emit_titles: bool,
}

impl FilterDocument {
    pub fn new(rules: Vec<FilterRule>, emit_titles: bool) -> Self {
        Self { rules, emit_titles }
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders the complete artifact text, trailing newline included.
    pub fn render(&self) -> String {
        let mut out = String::from(DOCUMENT_HEADER);
        out.push('\n');
        for rule in &self.rules {
            if self.emit_titles {
                out.push_str("# ");
                out.push_str(&rule.word);
                out.push('\n');
            }
            out.push_str("- ");
            out.push_str(&rule.pattern);
            out.push_str(", ");
            out.push_str(&rule.replace_with);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::BoundaryMode;

    fn rule(word: &str) -> FilterRule {
        FilterRule {
            word: word.to_string(),
            pattern: format!("<{word}>"),
            replace_with: "x".to_string(),
            mode: BoundaryMode::Normal,
        }
    }

    #[test]
    fn renders_header_comment_and_rule_lines() {
        let document = FilterDocument::new(vec![rule("cow")], true);
        assert_eq!(document.render(), "filters:\n# cow\n- <cow>, x\n");
    }

    #[test]
    fn titles_can_be_disabled() {
        let document = FilterDocument::new(vec![rule("cow"), rule("bull")], false);
        assert_eq!(document.render(), "filters:\n- <cow>, x\n- <bull>, x\n");
    }

    #[test]
    fn empty_document_is_just_the_header() {
        let document = FilterDocument::new(Vec::new(), true);
        assert_eq!(document.render(), "filters:\n");
        assert!(document.is_empty());
    }
}
