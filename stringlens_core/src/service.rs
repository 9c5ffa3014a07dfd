//! Request-level operations over a record store.

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::analysis::analyze;
use crate::error::{Error, Result};
use crate::filter::{FilterRequest, FilterSet};
use crate::query::{InterpretedQuery, QueryTranslator};
use crate::record::AnalyzedRecord;
use crate::store::RecordStore;

/// Result of a parameter-filtered listing.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub data: Vec<AnalyzedRecord>,
    pub count: usize,
    pub filter_applied: BTreeMap<String, String>,
}

/// Result of a natural language listing.
#[derive(Debug, Clone)]
pub struct NaturalLanguageOutcome {
    pub data: Vec<AnalyzedRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Analyzes, stores, and queries strings.
///
/// Owns the store handle; construct one per store rather than sharing
/// global state, so tests can run against isolated stores.
pub struct StringService {
    store: Arc<dyn RecordStore>,
    translator: QueryTranslator,
}

impl StringService {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_translator(store, QueryTranslator::with_defaults())
    }

    #[must_use]
    pub fn with_translator(store: Arc<dyn RecordStore>, translator: QueryTranslator) -> Self {
        Self { store, translator }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    #[must_use]
    pub const fn translator(&self) -> &QueryTranslator {
        &self.translator
    }

    /// Create a record from a request body of the form `{"value": "..."}`.
    pub async fn create(&self, body: &Value) -> Result<AnalyzedRecord> {
        let raw = match body.get("value") {
            None | Some(Value::Null) => {
                warn!("Rejected create: missing value");
                return Err(Error::Validation("Missing 'value' field"));
            }
            Some(Value::String(raw)) => raw,
            Some(other) => {
                warn!("Rejected create: value is not a string: {other}");
                return Err(Error::Validation("Input must be a string."));
            }
        };
        self.create_value(raw).await
    }

    /// Analyze and store a raw string.
    pub async fn create_value(&self, raw: &str) -> Result<AnalyzedRecord> {
        if raw.trim().is_empty() {
            warn!("Rejected create: blank value");
            return Err(Error::Validation("Input string cannot be empty."));
        }

        let analysis = analyze(raw);
        let record = self.store.insert_if_absent(analysis).await?;
        info!(
            "Created string {} (length={}, palindrome={})",
            record.id, record.length, record.is_palindrome
        );
        Ok(record)
    }

    pub async fn get(&self, value: &str) -> Result<AnalyzedRecord> {
        debug!("Retrieving string: {value:?}");
        self.store.get_by_value(value).await
    }

    pub async fn delete(&self, value: &str) -> Result<()> {
        self.store.delete_by_value(value).await?;
        info!("Deleted string: {value:?}");
        Ok(())
    }

    /// List records matching raw filter parameters.
    pub async fn list(&self, params: &[(String, String)]) -> Result<FilterOutcome> {
        let request = FilterRequest::parse(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        let data = self.filtered(&request.filters).await?;
        debug!("Filter matched {} records", data.len());

        Ok(FilterOutcome {
            count: data.len(),
            data,
            filter_applied: request.applied,
        })
    }

    /// List records matching a natural language query.
    pub async fn natural_language(&self, query: Option<&str>) -> Result<NaturalLanguageOutcome> {
        let query = query.ok_or(Error::UnparseableQuery)?;
        let interpreted_query = self.translator.translate(query)?;
        let data = self.filtered(&interpreted_query.parsed_filters).await?;
        debug!(
            "Natural language query {:?} matched {} records",
            interpreted_query.original,
            data.len()
        );

        Ok(NaturalLanguageOutcome {
            count: data.len(),
            data,
            interpreted_query,
        })
    }

    async fn filtered(&self, filters: &FilterSet) -> Result<Vec<AnalyzedRecord>> {
        self.store
            .scan(&|record: &AnalyzedRecord| filters.matches(record))
            .await
    }
}
