use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::Analysis;

/// An analyzed string as persisted by a [`crate::RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    pub id: String,
    pub value: String,
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub character_frequency_map: BTreeMap<char, usize>,
    pub created_at: DateTime<Utc>,
}

impl AnalyzedRecord {
    /// Stamp an analysis with its creation time.
    #[must_use]
    pub fn new(analysis: Analysis, created_at: DateTime<Utc>) -> Self {
        Self {
            id: analysis.id,
            value: analysis.value,
            length: analysis.length,
            is_palindrome: analysis.is_palindrome,
            unique_characters: analysis.unique_characters,
            word_count: analysis.word_count,
            character_frequency_map: analysis.character_frequency_map,
            created_at,
        }
    }
}
