//! Record persistence.
//!
//! Records are keyed by their content identifier. Implementations must make
//! [`RecordStore::insert_if_absent`] atomic: two concurrent inserts of the
//! same identifier yield exactly one success.

mod memory;

use async_trait::async_trait;

use crate::analysis::Analysis;
use crate::error::Result;
use crate::record::AnalyzedRecord;

pub use memory::MemoryStore;

/// Predicate evaluated against stored records during a scan.
pub type Predicate<'a> = &'a (dyn Fn(&AnalyzedRecord) -> bool + Send + Sync);

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new record, stamping its creation time.
    ///
    /// Fails with [`crate::Error::Duplicate`] if the identifier is taken.
    async fn insert_if_absent(&self, analysis: Analysis) -> Result<AnalyzedRecord>;

    /// Look a record up by its exact raw value.
    async fn get_by_value(&self, value: &str) -> Result<AnalyzedRecord>;

    /// Delete a record by its exact raw value.
    async fn delete_by_value(&self, value: &str) -> Result<()>;

    /// All records accepted by `predicate`, in insertion order.
    async fn scan(&self, predicate: Predicate<'_>) -> Result<Vec<AnalyzedRecord>>;

    async fn count(&self) -> Result<usize>;
}
