//! Natural language query translation.
//!
//! A closed, ordered table of pattern rules maps free text such as
//! "single word palindromic strings longer than 3" onto a [`FilterSet`].
//! Every rule is tried against the lowercased query; a rule that fires
//! overwrites whatever earlier rules set for the same filter.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::filter::FilterSet;

/// Applies a matched rule to the filter set. Returns false if the match
/// could not be turned into a filter (e.g. an out-of-range number).
type Effect = fn(&Captures<'_>, &mut FilterSet) -> bool;

/// The outcome of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// One entry of the rule table.
#[derive(Clone)]
pub struct TranslationRule {
    name: &'static str,
    pattern: Regex,
    effect: Effect,
}

impl std::fmt::Debug for TranslationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl TranslationRule {
    pub fn new(
        name: &'static str,
        pattern: &str,
        effect: Effect,
    ) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            effect,
        })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Run the rule against already-lowercased text.
    ///
    /// Returns true if the rule matched and contributed a filter.
    pub fn apply(&self, text: &str, filters: &mut FilterSet) -> bool {
        self.pattern
            .captures(text)
            .is_some_and(|caps| (self.effect)(&caps, filters))
    }
}

/// Digit runs beyond `i64` saturate rather than dropping the rule.
fn number(caps: &Captures<'_>) -> Option<i64> {
    caps.get(1).map(|m| m.as_str().parse().unwrap_or(i64::MAX))
}

fn letter(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().to_string())
}

fn single_word(_: &Captures<'_>, filters: &mut FilterSet) -> bool {
    filters.word_count = Some(1);
    true
}

fn palindrome(_: &Captures<'_>, filters: &mut FilterSet) -> bool {
    filters.is_palindrome = Some(true);
    true
}

fn longer_than(caps: &Captures<'_>, filters: &mut FilterSet) -> bool {
    let Some(n) = number(caps) else {
        return false;
    };
    filters.min_length = Some(n.saturating_add(1));
    true
}

fn shorter_than(caps: &Captures<'_>, filters: &mut FilterSet) -> bool {
    let Some(n) = number(caps) else {
        return false;
    };
    filters.max_length = Some(n.saturating_sub(1).max(0));
    true
}

fn at_least(caps: &Captures<'_>, filters: &mut FilterSet) -> bool {
    let Some(n) = number(caps) else {
        return false;
    };
    filters.min_length = Some(n);
    true
}

fn contains_letter(caps: &Captures<'_>, filters: &mut FilterSet) -> bool {
    let Some(c) = letter(caps) else {
        return false;
    };
    filters.contains_character = Some(c);
    true
}

fn first_vowel(_: &Captures<'_>, filters: &mut FilterSet) -> bool {
    filters.contains_character = Some("a".to_string());
    true
}

/// Rule name, pattern, effect. Order matters: later rules win.
const RULE_TABLE: &[(&str, &str, Effect)] = &[
    ("single_word", r"single word|one word|single-word", single_word),
    ("palindrome", r"palindrom", palindrome),
    ("longer_than", r"longer than ([0-9]+)", longer_than),
    ("shorter_than", r"shorter than ([0-9]+)", shorter_than),
    ("at_least", r"at least ([0-9]+)", at_least),
    ("more_than_characters", r"more than ([0-9]+) characters", longer_than),
    (
        "contains_letter",
        r"contains(?: the)? (?:letter |char |character )?([a-z])",
        contains_letter,
    ),
    ("first_vowel", r"first vowel", first_vowel),
    (
        "containing_the_letter",
        r"containing the letter ([a-z])",
        contains_letter,
    ),
];

static DEFAULT_RULES: Lazy<Vec<TranslationRule>> = Lazy::new(|| {
    RULE_TABLE
        .iter()
        .filter_map(|&(name, pattern, effect)| TranslationRule::new(name, pattern, effect).ok())
        .collect()
});

/// The built-in rule table, in evaluation order.
#[must_use]
pub fn default_rules() -> Vec<TranslationRule> {
    DEFAULT_RULES.clone()
}

/// Translates natural language queries into filter sets.
#[derive(Debug, Clone)]
pub struct QueryTranslator {
    rules: Vec<TranslationRule>,
}

impl QueryTranslator {
    /// Create a translator with a custom rule table, evaluated in order.
    #[must_use]
    pub const fn new(rules: Vec<TranslationRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_rules())
    }

    #[must_use]
    pub fn rules(&self) -> &[TranslationRule] {
        &self.rules
    }

    /// Translate a query.
    ///
    /// Fails with [`Error::UnparseableQuery`] when no rule contributes and
    /// with [`Error::ConflictingQuery`] when the result bounds the length
    /// from both sides with `min_length > max_length`.
    pub fn translate(&self, query: &str) -> Result<InterpretedQuery> {
        let lower = query.to_lowercase();
        let mut filters = FilterSet::default();

        for rule in &self.rules {
            if rule.apply(&lower, &mut filters) {
                debug!("Query rule matched: {}", rule.name);
            }
        }

        if filters.is_empty() {
            return Err(Error::UnparseableQuery);
        }
        if filters.has_conflicting_bounds() {
            return Err(Error::ConflictingQuery);
        }

        Ok(InterpretedQuery {
            original: query.to_string(),
            parsed_filters: filters,
        })
    }
}

impl Default for QueryTranslator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
