//! Database entities for persisted string analyses.

pub mod analyzed_strings;
