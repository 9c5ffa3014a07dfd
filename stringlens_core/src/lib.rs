#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod analysis;
mod error;
pub mod filter;
pub mod query;
mod record;
pub mod service;
pub mod store;

pub use analysis::{Analysis, analyze, content_hash, normalize};
pub use error::{Error, FilterError, Result};
pub use filter::{FilterParam, FilterRequest, FilterSet};
pub use query::{InterpretedQuery, QueryTranslator, TranslationRule};
pub use record::AnalyzedRecord;
pub use service::{FilterOutcome, NaturalLanguageOutcome, StringService};
pub use store::{MemoryStore, RecordStore};
