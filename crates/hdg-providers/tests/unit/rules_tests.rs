//! Unit tests for heading rules and the rule engine

use hdg_domain::Error;
use hdg_providers::chunking::{HeadingRule, LevelSpec, RuleEngine};

fn engine() -> RuleEngine {
    RuleEngine::new().expect("built-in rules")
}

#[test]
fn test_markdown_levels() {
    let engine = engine();
    for level in 1..=6 {
        let line = format!("{} Title {level}", "#".repeat(level));
        let heading = engine.try_match(&line).expect("markdown heading");
        assert_eq!(heading.level, level);
        assert_eq!(heading.rule_name, format!("markdown_h{level}"));
        assert_eq!(heading.raw_title, line);
        assert_eq!(heading.clean_title, format!("Title {level}"));
    }
}

#[test]
fn test_markdown_closing_hashes_are_stripped() {
    let heading = engine().try_match("## Setup ##").expect("heading");
    assert_eq!(heading.clean_title, "Setup");
    assert_eq!(heading.raw_title, "## Setup ##");
}

#[test]
fn test_non_headings_do_not_match() {
    let engine = engine();
    for line in [
        "",
        "   ",
        "#hashtag",
        "####### seven",
        "plain prose line",
        "2024 was a good year",
        "Appendix A is attached below.",
    ] {
        assert!(engine.try_match(line).is_none(), "unexpected match: {line:?}");
    }
}

#[test]
fn test_numeric_outline_levels() {
    let engine = engine();
    let level = |line: &str| engine.try_match(line).map(|m| (m.level, m.clean_title));
    assert_eq!(level("1. Introduction"), Some((1, "Introduction".to_string())));
    assert_eq!(level("1.1 Scope"), Some((2, "Scope".to_string())));
    assert_eq!(level("2.3.1. Limits"), Some((3, "Limits".to_string())));
    assert_eq!(
        engine.try_match("1.1 Scope").map(|m| m.rule_name),
        Some("numeric_outline".to_string())
    );
}

#[test]
fn test_legal_section() {
    let heading = engine().try_match("§ 12 Definitions").expect("legal heading");
    assert_eq!(heading.level, 2);
    assert_eq!(heading.rule_name, "legal_section");
    assert_eq!(heading.clean_title, "Definitions");

    let bare = engine().try_match("§3").expect("legal heading");
    assert_eq!(bare.clean_title, "§3");
}

#[test]
fn test_appendix_labels() {
    let engine = engine();
    let titled = engine.try_match("Appendix A: Glossary").expect("appendix");
    assert_eq!(titled.level, 1);
    assert_eq!(titled.rule_name, "appendix");
    assert_eq!(titled.clean_title, "Glossary");

    let bare = engine.try_match("ANNEX 2").expect("annex");
    assert_eq!(bare.clean_title, "ANNEX 2");
}

#[test]
fn test_roman_and_letter_sections() {
    let engine = engine();
    let roman = engine.try_match("IV. Results").expect("roman");
    assert_eq!((roman.level, roman.rule_name.as_str()), (1, "roman_section"));
    assert_eq!(roman.clean_title, "Results");

    let letter = engine.try_match("B. Methods").expect("letter");
    assert_eq!((letter.level, letter.rule_name.as_str()), (2, "letter_section"));
    assert_eq!(letter.clean_title, "Methods");
}

#[test]
fn test_first_priority_match_wins() {
    let engine = engine();
    // `I.` is both a roman numeral and a letter; roman has priority
    let heading = engine.try_match("I. Overview").expect("heading");
    assert_eq!(heading.rule_name, "roman_section");

    // markdown claims the line before the numeric outline rule
    let heading = engine.try_match("# 1. Intro").expect("heading");
    assert_eq!(heading.rule_name, "markdown_h1");
    assert_eq!(heading.clean_title, "1. Intro");
}

#[test]
fn test_default_rules_are_priority_ordered() {
    let engine = engine();
    let priorities: Vec<u32> = engine.rules().iter().map(HeadingRule::priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted);
    assert_eq!(engine.rules()[0].name(), "markdown_h1");
    assert_eq!(engine.rules().last().map(HeadingRule::name), Some("letter_section"));
}

#[test]
fn test_empty_rule_set_is_rejected() {
    let err = RuleEngine::with_rules(Vec::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let err = HeadingRule::new("broken", "^(unclosed", LevelSpec::Fixed(1), 1).unwrap_err();
    match err {
        Error::InvalidRule { rule, .. } => assert_eq!(rule, "broken"),
        other => panic!("expected InvalidRule, got {other:?}"),
    }
}

#[test]
fn test_level_zero_is_rejected() {
    let err = HeadingRule::new("root_like", "^x$", LevelSpec::Fixed(0), 1).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_custom_rules_sorted_by_priority() {
    let late = HeadingRule::new("late", r"^== (?P<title>.+)$", LevelSpec::Fixed(1), 50).expect("rule");
    let early = HeadingRule::new("early", r"^==", LevelSpec::Fixed(3), 5).expect("rule");
    let engine = RuleEngine::with_rules(vec![late, early]).expect("engine");

    let heading = engine.try_match("== Title").expect("heading");
    assert_eq!(heading.rule_name, "early");
    assert_eq!(heading.level, 3);
    // no `title` group: the trimmed line is the clean title
    assert_eq!(heading.clean_title, "== Title");
}

#[test]
fn test_equal_priorities_keep_given_order() {
    let first = HeadingRule::new("first", "^x", LevelSpec::Fixed(1), 1).expect("rule");
    let second = HeadingRule::new("second", "^x", LevelSpec::Fixed(2), 1).expect("rule");
    let engine = RuleEngine::with_rules(vec![first, second]).expect("engine");
    assert_eq!(engine.try_match("x").map(|m| m.rule_name), Some("first".to_string()));
}

#[test]
fn test_computed_level_is_at_least_one() {
    let rule = HeadingRule::new("zero", r"^>>", LevelSpec::Computed(|_| 0), 1).expect("rule");
    assert_eq!(rule.try_match(">> quoted").map(|m| m.level), Some(1));
}
