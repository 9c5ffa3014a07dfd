//! Typed filters over stored records.
//!
//! Filters arrive as untyped name/value pairs (a query string). Only the
//! names in [`FilterParam::ALL`] are accepted; anything else rejects the
//! whole request. The resulting [`FilterSet`] is both the echo returned to
//! callers and the predicate applied to the store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::FilterError;
use crate::record::AnalyzedRecord;

/// A filter parameter recognized by the filter engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterParam {
    IsPalindrome,
    MinLength,
    MaxLength,
    WordCount,
    ContainsCharacter,
}

impl FilterParam {
    pub const ALL: [Self; 5] = [
        Self::IsPalindrome,
        Self::MinLength,
        Self::MaxLength,
        Self::WordCount,
        Self::ContainsCharacter,
    ];

    /// Returns the query-string name of the parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IsPalindrome => "is_palindrome",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::WordCount => "word_count",
            Self::ContainsCharacter => "contains_character",
        }
    }

    /// Look a parameter up by its exact query-string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl std::fmt::Display for FilterParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a boolean filter token.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" => Some(true),
        "0" | "false" | "f" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Parse an integer filter value, tolerating surrounding whitespace.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// A validated set of filters. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl FilterSet {
    /// True when no filter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count.is_none()
            && self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.contains_character.is_none()
    }

    /// True when both length bounds are set and cannot both hold.
    #[must_use]
    pub fn has_conflicting_bounds(&self) -> bool {
        matches!((self.min_length, self.max_length), (Some(min), Some(max)) if min > max)
    }

    /// Parse `raw` and set the filter for `param`.
    pub fn set(&mut self, param: FilterParam, raw: &str) -> Result<(), FilterError> {
        let invalid_int = || FilterError::InvalidValue {
            parameter: param.as_str(),
            expected: "integer",
        };
        match param {
            FilterParam::IsPalindrome => {
                let value = parse_bool(raw).ok_or(FilterError::InvalidValue {
                    parameter: param.as_str(),
                    expected: "boolean",
                })?;
                self.is_palindrome = Some(value);
            }
            FilterParam::MinLength => {
                self.min_length = Some(parse_int(raw).ok_or_else(invalid_int)?);
            }
            FilterParam::MaxLength => {
                self.max_length = Some(parse_int(raw).ok_or_else(invalid_int)?);
            }
            FilterParam::WordCount => {
                self.word_count = Some(parse_int(raw).ok_or_else(invalid_int)?);
            }
            FilterParam::ContainsCharacter => {
                self.contains_character = Some(raw.to_string());
            }
        }
        Ok(())
    }

    /// Test a record against every set filter.
    #[must_use]
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        let length = i64::try_from(record.length).unwrap_or(i64::MAX);
        let word_count = i64::try_from(record.word_count).unwrap_or(i64::MAX);

        if self.is_palindrome.is_some_and(|p| p != record.is_palindrome) {
            return false;
        }
        if self.min_length.is_some_and(|min| length < min) {
            return false;
        }
        if self.max_length.is_some_and(|max| length > max) {
            return false;
        }
        if self.word_count.is_some_and(|wc| wc != word_count) {
            return false;
        }
        if let Some(needle) = &self.contains_character {
            return record
                .value
                .to_lowercase()
                .contains(&needle.to_lowercase());
        }
        true
    }
}

/// A filter request: the typed filters plus the raw parameters they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pub filters: FilterSet,
    /// Raw parameters as received; for repeated names the last value wins.
    pub applied: BTreeMap<String, String>,
}

impl FilterRequest {
    /// Validate raw name/value pairs into a filter request.
    ///
    /// Unknown names are rejected before any value is parsed.
    pub fn parse<'a, I>(params: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut applied = BTreeMap::new();
        for (name, value) in params {
            if FilterParam::from_name(name).is_none() {
                return Err(FilterError::UnknownParameter(name.to_string()));
            }
            applied.insert(name.to_string(), value.to_string());
        }

        let mut filters = FilterSet::default();
        for (name, value) in &applied {
            if let Some(param) = FilterParam::from_name(name) {
                filters.set(param, value)?;
            }
        }

        if filters.has_conflicting_bounds() {
            return Err(FilterError::ConflictingBounds);
        }

        Ok(Self { filters, applied })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use chrono::Utc;

    fn record(value: &str) -> AnalyzedRecord {
        AnalyzedRecord::new(analyze(value), Utc::now())
    }

    #[test]
    fn test_param_names_round_trip() {
        for param in FilterParam::ALL {
            assert_eq!(FilterParam::from_name(param.as_str()), Some(param));
        }
        assert_eq!(FilterParam::from_name("IS_PALINDROME"), None);
    }

    #[test]
    fn test_parse_bool_tokens() {
        for token in ["1", "true", "T", "Yes", "y"] {
            assert_eq!(parse_bool(token), Some(true), "{token}");
        }
        for token in ["0", "FALSE", "f", "no", "N"] {
            assert_eq!(parse_bool(token), Some(false), "{token}");
        }
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int(" -3 "), Some(-3));
        assert_eq!(parse_int("4.5"), None);
        assert_eq!(parse_int("ten"), None);
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let err = FilterRequest::parse([("min_length", "1"), ("colour", "red")]).unwrap_err();
        assert_eq!(err, FilterError::UnknownParameter("colour".to_string()));
    }

    #[test]
    fn test_unknown_parameter_checked_before_values() {
        let err = FilterRequest::parse([("min_length", "abc"), ("bogus", "1")]).unwrap_err();
        assert_eq!(err, FilterError::UnknownParameter("bogus".to_string()));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            FilterRequest::parse([("is_palindrome", "perhaps")]).unwrap_err(),
            FilterError::InvalidValue {
                parameter: "is_palindrome",
                expected: "boolean"
            }
        );
        assert_eq!(
            FilterRequest::parse([("word_count", "two")]).unwrap_err(),
            FilterError::InvalidValue {
                parameter: "word_count",
                expected: "integer"
            }
        );
    }

    #[test]
    fn test_conflicting_bounds() {
        let err = FilterRequest::parse([("min_length", "20"), ("max_length", "10")]).unwrap_err();
        assert_eq!(err, FilterError::ConflictingBounds);

        let ok = FilterRequest::parse([("min_length", "10"), ("max_length", "10")]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_last_value_wins() {
        let request =
            FilterRequest::parse([("word_count", "1"), ("word_count", "3")]).unwrap();
        assert_eq!(request.filters.word_count, Some(3));
        assert_eq!(request.applied.get("word_count").map(String::as_str), Some("3"));
        assert_eq!(request.applied.len(), 1);
    }

    #[test]
    fn test_empty_request_matches_everything() {
        let request = FilterRequest::parse(std::iter::empty()).unwrap();
        assert!(request.filters.is_empty());
        assert!(request.filters.matches(&record("anything")));
    }

    #[test]
    fn test_matches_length_bounds_inclusive() {
        let mut filters = FilterSet::default();
        filters.min_length = Some(5);
        filters.max_length = Some(5);
        assert!(filters.matches(&record("hello")));
        assert!(!filters.matches(&record("hell")));
        assert!(!filters.matches(&record("hello!")));
    }

    #[test]
    fn test_matches_palindrome_and_word_count() {
        let mut filters = FilterSet::default();
        filters.is_palindrome = Some(true);
        filters.word_count = Some(1);
        assert!(filters.matches(&record("level")));
        assert!(!filters.matches(&record("race car")));
        assert!(!filters.matches(&record("hello")));
    }

    #[test]
    fn test_contains_character_is_case_insensitive() {
        let mut filters = FilterSet::default();
        filters.contains_character = Some("Z".to_string());
        assert!(filters.matches(&record("pizza")));
        assert!(!filters.matches(&record("pasta")));

        filters.contains_character = Some("ZZ".to_string());
        assert!(filters.matches(&record("PIZZA")));
    }

    #[test]
    fn test_filter_set_serializes_only_set_fields() {
        let mut filters = FilterSet::default();
        filters.word_count = Some(1);
        filters.is_palindrome = Some(true);
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"word_count": 1, "is_palindrome": true})
        );
    }
}
