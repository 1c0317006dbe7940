// filtergen-core/tests/generator_tests.rs
//! Behavioral tests for the pattern generator.
//!
//! Generated patterns use lookbehind/lookahead boundaries, so `fancy_regex`
//! serves as the match oracle here: each test compiles the generated pattern
//! and exercises it against noisy and clean renditions of the source word.

use anyhow::Result;
use fancy_regex::Regex;
use test_log::test;

use filtergen_core::{
    BoundaryMode, FilterRule, GeneratorConfig, PatternGenerator, WordEntry,
};

fn generator() -> PatternGenerator {
    PatternGenerator::new(&GeneratorConfig::default()).unwrap()
}

fn compile(word: &str, mode: BoundaryMode) -> Regex {
    let pattern = generator().generate_pattern(word, mode);
    Regex::new(&pattern).expect("generated pattern must compile")
}

fn find<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.find(text).unwrap().map(|m| m.as_str())
}

#[test]
fn clean_word_matches_and_captures_itself() -> Result<()> {
    let re = compile("cow", BoundaryMode::Normal);
    let caps = re.captures("cow")?.expect("clean word must match");
    assert_eq!(caps.get(0).unwrap().as_str(), "cow");
    assert_eq!(caps.get(1).unwrap().as_str(), "cow");
    Ok(())
}

#[test]
fn word_matches_as_a_token_inside_larger_text() {
    let re = compile("cow", BoundaryMode::Normal);
    assert_eq!(find(&re, "the cow jumped"), Some("cow"));
}

#[test]
fn color_codes_between_letters_are_tolerated() {
    let re = compile("cow", BoundaryMode::Normal);
    assert_eq!(find(&re, "c§ao§1w"), Some("c§ao§1w"));
    assert_eq!(find(&re, "§1c§2o§3w"), Some("§1c§2o§3w"));
}

#[test]
fn separator_runs_between_letters_are_tolerated() {
    let re = compile("cow", BoundaryMode::Normal);
    assert_eq!(find(&re, "c.o w"), Some("c.o w"));
    assert_eq!(find(&re, "c--o__w"), Some("c--o__w"));
    assert_eq!(find(&re, "c . - o * w"), Some("c . - o * w"));
}

#[test]
fn case_permutations_match_through_the_variant_table() {
    let re = compile("cow", BoundaryMode::Normal);
    for permuted in ["Cow", "cOw", "coW", "COW"] {
        assert_eq!(find(&re, permuted), Some(permuted), "{permuted} must match");
    }
}

#[test]
fn leetspeak_substitutions_match() {
    let re = compile("cow", BoundaryMode::Normal);
    assert_eq!(find(&re, "c0w"), Some("c0w"));

    let re = compile("hi", BoundaryMode::Normal);
    assert_eq!(find(&re, "h1"), Some("h1"));
    assert_eq!(find(&re, "h!"), Some("h!"));
}

#[test]
fn alphanumeric_neighbors_block_the_match() {
    let re = compile("cow", BoundaryMode::Normal);
    assert_eq!(find(&re, "scow"), None);
    assert_eq!(find(&re, "cows"), None);
    assert_eq!(find(&re, "cow1"), None);
    assert_eq!(find(&re, "9cow"), None);
}

#[test]
fn color_sentinel_neighbors_block_the_match() {
    let re = compile("cow", BoundaryMode::Normal);
    assert_eq!(find(&re, "§cow"), None);
}

#[test]
fn separator_neighbors_do_not_block_the_match() {
    // The boundary assertions check raw alphanumeric adjacency only, so a
    // token framed by separator characters still matches. Downstream
    // consumers depend on this footprint.
    let re = compile("cow", BoundaryMode::Normal);
    assert_eq!(find(&re, "_cow_"), Some("cow"));
}

#[test]
fn unmapped_characters_still_produce_a_matching_pattern() {
    let re = compile("c4t", BoundaryMode::Normal);
    assert_eq!(find(&re, "c4t"), Some("c4t"));
}

#[test]
fn generation_is_idempotent() {
    let generator = generator();
    let first = generator.generate_pattern("cow", BoundaryMode::Normal);
    let second = generator.generate_pattern("cow", BoundaryMode::Normal);
    assert_eq!(first, second);
}

#[test]
fn strong_boundaries_reject_three_letter_prefixes() {
    let re = compile("hard", BoundaryMode::Strong);
    assert_eq!(find(&re, "hard"), Some("hard"));
    assert_eq!(find(&re, "die hard"), Some("hard"));
    assert_eq!(find(&re, "xyzhard"), None);
}

#[test]
fn generated_rules_carry_word_pattern_and_replacement() {
    let generator = generator();
    let rule: FilterRule = generator.generate_rule(&WordEntry::normal("cow"));
    assert_eq!(rule.word, "cow");
    assert_eq!(rule.replace_with, "x");
    assert_eq!(rule.mode, BoundaryMode::Normal);
    generator.verify_rule(&rule).unwrap();
}

#[test]
fn every_default_word_class_appears_in_order() {
    let pattern = generator().generate_pattern("cow", BoundaryMode::Normal);
    let c = pattern.find("[cC").expect("class for c");
    let o = pattern.find("[oO").expect("class for o");
    let w = pattern.find("[wW").expect("class for w");
    assert!(c < o && o < w, "classes must appear in word order");
}
