use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::{Predicate, RecordStore};
use crate::analysis::Analysis;
use crate::error::{Error, Result};
use crate::record::AnalyzedRecord;

/// In-process record store.
///
/// Records are kept in insertion order behind a single lock, so the
/// identifier check and the insert happen under the same write guard.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<AnalyzedRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_if_absent(&self, analysis: Analysis) -> Result<AnalyzedRecord> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == analysis.id) {
            return Err(Error::Duplicate);
        }

        let record = AnalyzedRecord::new(analysis, Utc::now());
        records.push(record.clone());

        info!("Stored string: {}", record.id);
        Ok(record)
    }

    async fn get_by_value(&self, value: &str) -> Result<AnalyzedRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.value == value)
            .cloned()
            .ok_or(Error::NotFound)
    }

    async fn delete_by_value(&self, value: &str) -> Result<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.value == value)
            .ok_or(Error::NotFound)?;
        let removed = records.remove(index);

        info!("Deleted string: {}", removed.id);
        Ok(())
    }

    async fn scan(&self, predicate: Predicate<'_>) -> Result<Vec<AnalyzedRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}
