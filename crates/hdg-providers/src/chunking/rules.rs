//! Heading detection rules
//!
//! A [`RuleEngine`] holds an immutable, priority-ordered list of
//! [`HeadingRule`]s. Each rule pairs a line pattern with either a fixed level
//! or a level computed from the captures. The first rule in priority order
//! that matches a line claims it; there is no fallback composition.
//!
//! Patterns may define a `title` capture group. Its trimmed text becomes the
//! clean title; without it (or when it is empty) the trimmed line is used.

use std::fmt;

use hdg_domain::error::{Error, Result};
use hdg_domain::value_objects::HeadingMatch;
use regex::{Captures, Regex};

use crate::constants::{
    LEVEL_APPENDIX, LEVEL_LEGAL_SECTION, LEVEL_LETTER_SECTION, LEVEL_ROMAN_SECTION,
    MAX_MARKDOWN_LEVEL, PRIORITY_APPENDIX, PRIORITY_LEGAL_SECTION, PRIORITY_LETTER_SECTION,
    PRIORITY_MARKDOWN_BASE, PRIORITY_NUMERIC_OUTLINE, PRIORITY_ROMAN_SECTION,
};

/// Name of the capture group holding the heading title
const TITLE_GROUP: &str = "title";

/// How a rule assigns the level of a match
#[derive(Clone, Copy)]
pub enum LevelSpec {
    /// Same level for every match
    Fixed(usize),
    /// Level derived from the captures (clamped to at least 1)
    Computed(fn(&Captures<'_>) -> usize),
}

impl fmt::Debug for LevelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(level) => f.debug_tuple("Fixed").field(level).finish(),
            Self::Computed(_) => f.write_str("Computed"),
        }
    }
}

/// A single heading detection rule
#[derive(Debug, Clone)]
pub struct HeadingRule {
    name: String,
    pattern: Regex,
    level: LevelSpec,
    priority: u32,
}

impl HeadingRule {
    /// Create a rule, compiling its pattern
    ///
    /// Fails with [`Error::InvalidRule`] when the pattern does not compile and
    /// with [`Error::InvalidArgument`] for an empty name or a fixed level of 0
    /// (level 0 belongs to the synthetic root).
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        level: LevelSpec,
        priority: u32,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("Heading rule name cannot be empty"));
        }
        if let LevelSpec::Fixed(0) = level {
            return Err(Error::invalid_argument(format!(
                "Heading rule '{name}' has level 0, which is reserved for the root"
            )));
        }
        let pattern = Regex::new(pattern).map_err(|e| Error::invalid_rule(&name, e))?;
        Ok(Self {
            name,
            pattern,
            level,
            priority,
        })
    }

    /// Rule name, used as the chunk type of matched headings
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source of the compiled pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Ascending priority; lower values are tried first
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Level assignment of this rule
    pub fn level_spec(&self) -> LevelSpec {
        self.level
    }

    /// Match a single line (without its terminator)
    pub fn try_match(&self, line: &str) -> Option<HeadingMatch> {
        let captures = self.pattern.captures(line)?;
        let level = match self.level {
            LevelSpec::Fixed(level) => level,
            LevelSpec::Computed(compute) => compute(&captures).max(1),
        };
        let raw_title = line.trim();
        let clean_title = captures
            .name(TITLE_GROUP)
            .map(|m| m.as_str().trim())
            .filter(|title| !title.is_empty())
            .unwrap_or(raw_title);
        Some(HeadingMatch::new(level, &self.name, raw_title, clean_title))
    }
}

/// Ordered, immutable set of heading rules
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<HeadingRule>,
}

impl RuleEngine {
    /// Engine with the built-in rule set
    pub fn new() -> Result<Self> {
        Self::with_rules(default_rules()?)
    }

    /// Engine with a custom rule set, sorted by ascending priority
    ///
    /// The sort is stable, so rules sharing a priority keep their given order.
    pub fn with_rules(mut rules: Vec<HeadingRule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(Error::invalid_argument(
                "Rule engine requires at least one heading rule",
            ));
        }
        rules.sort_by_key(HeadingRule::priority);
        Ok(Self { rules })
    }

    /// Rules in the order they are tried
    pub fn rules(&self) -> &[HeadingRule] {
        &self.rules
    }

    /// First match in priority order, or `None` for blank and body lines
    pub fn try_match(&self, line: &str) -> Option<HeadingMatch> {
        if line.trim().is_empty() {
            return None;
        }
        self.rules.iter().find_map(|rule| rule.try_match(line))
    }
}

/// Built-in rules: markdown levels 1-6, numeric outlines, legal sections,
/// appendices, roman numeral sections and single-letter sections, in that
/// priority order
pub fn default_rules() -> Result<Vec<HeadingRule>> {
    let mut rules = Vec::with_capacity(MAX_MARKDOWN_LEVEL + 5);

    for level in 1..=MAX_MARKDOWN_LEVEL {
        rules.push(HeadingRule::new(
            format!("markdown_h{level}"),
            &format!(r"^ {{0,3}}#{{{level}}}[ \t]+(?P<title>\S.*?)(?:[ \t]+#+)?[ \t]*$"),
            LevelSpec::Fixed(level),
            PRIORITY_MARKDOWN_BASE + level as u32 - 1,
        )?);
    }

    rules.push(HeadingRule::new(
        "numeric_outline",
        r"^\s*(?P<number>\d+(?:\.\d+)+\.?|\d+\.)[ \t]+(?P<title>\S.*)$",
        LevelSpec::Computed(outline_depth),
        PRIORITY_NUMERIC_OUTLINE,
    )?);

    rules.push(HeadingRule::new(
        "legal_section",
        r"^\s*§+[ \t]*(?P<number>\d+[a-z]?(?:\.\d+)*)\.?(?:[ \t]+(?P<title>.*))?$",
        LevelSpec::Fixed(LEVEL_LEGAL_SECTION),
        PRIORITY_LEGAL_SECTION,
    )?);

    rules.push(HeadingRule::new(
        "appendix",
        r"^\s*(?i:appendix|annex)[ \t]+(?P<label>[A-Z]|\d+)(?:[.:)][ \t]*|[ \t]+[-–—][ \t]*|[ \t]*$)(?P<title>.*)$",
        LevelSpec::Fixed(LEVEL_APPENDIX),
        PRIORITY_APPENDIX,
    )?);

    rules.push(HeadingRule::new(
        "roman_section",
        r"^\s*(?P<numeral>X{1,3}(?:IX|IV|V?I{0,3})|IX|IV|V?I{1,3}|V)\.[ \t]+(?P<title>\S.*)$",
        LevelSpec::Fixed(LEVEL_ROMAN_SECTION),
        PRIORITY_ROMAN_SECTION,
    )?);

    rules.push(HeadingRule::new(
        "letter_section",
        r"^\s*(?P<letter>[A-Z])[.)][ \t]+(?P<title>\S.*)$",
        LevelSpec::Fixed(LEVEL_LETTER_SECTION),
        PRIORITY_LETTER_SECTION,
    )?);

    Ok(rules)
}

// `2.` -> 1, `1.2` -> 2, `1.2.3.` -> 3
fn outline_depth(captures: &Captures<'_>) -> usize {
    captures
        .name("number")
        .map(|m| m.as_str().split('.').filter(|s| !s.is_empty()).count())
        .unwrap_or(1)
}
