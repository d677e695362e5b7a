//! The rename rule table.
//!
//! A `RuleTable` is an ordered, immutable list of `Rule`s built once and
//! handed to the renamer. Construction validates the table: patterns must be
//! non-empty and unique, and no identifier pattern may occur inside another
//! identifier pattern at a position bounded by word boundaries.

use regex::Regex;
use std::collections::HashSet;

use super::matcher::{self, MatchKind, Substitution};
use crate::error::{Error, Result};

/// The theme → colorScheme rename policy, in application order.
pub const COLOR_SCHEME_RENAMES: &[(&str, &str)] = &[
    // Core identifiers
    ("theme", "colorScheme"),
    ("$theme", "$colorScheme"),
    ("currentTheme", "currentColorScheme"),
    ("themeKey", "colorSchemeKey"),
    ("setTheme", "setColorScheme"),
    ("setThemeKey", "setColorSchemeKey"),
    ("useTheme", "useColorScheme"),
    ("ThemeKey", "ColorSchemeKey"),
    ("GlobalTheme", "GlobalColorScheme"),
    ("globalThemes", "globalColorSchemes"),
    ("themeColors", "colorSchemeColors"),
    // Context & provider
    ("ThemeContext", "ColorSchemeContext"),
    ("ThemeContextType", "ColorSchemeContextType"),
    ("ThemeProvider", "ColorSchemeProvider"),
    ("ThemeProviderProps", "ColorSchemeProviderProps"),
    ("useThemeStyles", "useColorSchemeStyles"),
    // Storage & utilities
    ("getStoredTheme", "getStoredColorScheme"),
    ("setStoredTheme", "setStoredColorScheme"),
    ("getThemeValue", "getColorSchemeValue"),
    ("createThemeStyles", "createColorSchemeStyles"),
    ("getThemeVariables", "getColorSchemeVariables"),
    ("applyThemeVariables", "applyColorSchemeVariables"),
    ("createThemeTransition", "createColorSchemeTransition"),
    ("getThemeColor", "getColorSchemeColor"),
    // Components
    ("ThemeSelector", "ColorSchemeSelector"),
    ("ThemeSelectorContainer", "ColorSchemeSelectorContainer"),
    ("ThemeOption", "ColorSchemeOption"),
    ("ThemeName", "ColorSchemeName"),
    ("ThemePreview", "ColorSchemePreview"),
    // Storage keys
    ("'selectedTheme'", "'selectedColorScheme'"),
    ("\"selectedTheme\"", "\"selectedColorScheme\""),
    // Named schemes
    ("defaultTheme", "defaultColorScheme"),
    ("cyberpunkTheme", "cyberpunkColorScheme"),
    ("casinoFloorTheme", "casinoFloorColorScheme"),
    ("crystalTheme", "crystalColorScheme"),
    ("romanticDegenTheme", "romanticDegenColorScheme"),
    ("spaceTheme", "spaceColorScheme"),
    ("retroTheme", "retroColorScheme"),
    ("carnivalTheme", "carnivalColorScheme"),
];

/// A single pattern → replacement rule with its compiled matcher.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    replacement: String,
    kind: MatchKind,
    matcher: Regex,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::rule_table_invalid(pattern, "pattern is empty", None));
        }

        let kind = MatchKind::for_pattern(pattern);
        let matcher = matcher::compile(pattern, kind)?;

        Ok(Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            kind,
            matcher,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// Apply this rule to `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Substitution<'t> {
        matcher::substitute(text, &self.matcher, &self.replacement)
    }
}

/// Occurrences of one rule replaced in one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleChange {
    pub pattern: String,
    pub replacement: String,
    pub occurrences: usize,
}

/// Output of running the whole table over a buffer.
#[derive(Debug, Clone)]
pub struct TableOutcome {
    pub text: String,
    /// One entry per rule that matched at least once, in table order.
    pub changes: Vec<RuleChange>,
}

/// Ordered, validated collection of rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table from `(pattern, replacement)` pairs, keeping their order.
    pub fn new<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = pairs
            .into_iter()
            .map(|(pattern, replacement)| Rule::new(pattern, replacement))
            .collect::<Result<Vec<_>>>()?;

        validate(&rules)?;

        Ok(Self { rules })
    }

    /// The production theme → colorScheme table.
    pub fn color_scheme() -> Result<Self> {
        Self::new(COLOR_SCHEME_RENAMES.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order, each one seeing the previous rule's output.
    pub fn apply(&self, text: &str) -> TableOutcome {
        let mut current = text.to_string();
        let mut changes = Vec::new();

        for rule in &self.rules {
            let result = rule.apply(&current);
            if result.occurrences == 0 {
                continue;
            }
            changes.push(RuleChange {
                pattern: rule.pattern.clone(),
                replacement: rule.replacement.clone(),
                occurrences: result.occurrences,
            });
            current = result.text.into_owned();
        }

        TableOutcome {
            text: current,
            changes,
        }
    }
}

fn validate(rules: &[Rule]) -> Result<()> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.pattern.as_str()) {
            return Err(Error::rule_table_invalid(
                &rule.pattern,
                "duplicate pattern",
                Some(rule.pattern.clone()),
            ));
        }
    }

    let identifiers: Vec<&Rule> = rules
        .iter()
        .filter(|r| r.kind == MatchKind::PlainIdentifier)
        .collect();

    for inner in &identifiers {
        for outer in &identifiers {
            if inner.pattern == outer.pattern {
                continue;
            }
            if occurs_bounded(&inner.pattern, &outer.pattern) {
                return Err(Error::rule_table_invalid(
                    &inner.pattern,
                    "pattern matches inside another identifier pattern",
                    Some(outer.pattern.clone()),
                ));
            }
        }
    }

    Ok(())
}

/// True if `inner` occurs in `outer` where both neighbours inside `outer`
/// are non-word characters or the ends of `outer`.
fn occurs_bounded(inner: &str, outer: &str) -> bool {
    outer.match_indices(inner).any(|(start, _)| {
        let end = start + inner.len();
        let left_ok = outer[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let right_ok = outer[end..].chars().next().map_or(true, |c| !is_word_char(c));
        left_ok && right_ok
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
