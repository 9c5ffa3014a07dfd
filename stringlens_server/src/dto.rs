//! Response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use stringlens_core::{AnalyzedRecord, FilterOutcome, InterpretedQuery, NaturalLanguageOutcome};

#[derive(Debug, Clone, Serialize)]
pub struct Properties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub character_frequency_map: BTreeMap<char, usize>,
    pub sha256_hash: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub id: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub properties: Properties,
}

impl From<AnalyzedRecord> for RecordResponse {
    fn from(record: AnalyzedRecord) -> Self {
        Self {
            properties: Properties {
                length: record.length,
                is_palindrome: record.is_palindrome,
                unique_characters: record.unique_characters,
                word_count: record.word_count,
                character_frequency_map: record.character_frequency_map,
                sha256_hash: record.id.clone(),
            },
            id: record.id,
            value: record.value,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub data: Vec<RecordResponse>,
    pub count: usize,
    pub filter_applied: BTreeMap<String, String>,
}

impl From<FilterOutcome> for ListResponse {
    fn from(outcome: FilterOutcome) -> Self {
        Self {
            data: outcome.data.into_iter().map(RecordResponse::from).collect(),
            count: outcome.count,
            filter_applied: outcome.filter_applied,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<RecordResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl From<NaturalLanguageOutcome> for NaturalLanguageResponse {
    fn from(outcome: NaturalLanguageOutcome) -> Self {
        Self {
            data: outcome.data.into_iter().map(RecordResponse::from).collect(),
            count: outcome.count,
            interpreted_query: outcome.interpreted_query,
        }
    }
}
