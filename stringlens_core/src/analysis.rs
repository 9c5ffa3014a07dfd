//! String analysis and content-addressed identity.
//!
//! Everything derived from a string is computed from its *normalized form*:
//! the value with surrounding whitespace stripped, every remaining whitespace
//! character removed, and lowercased. The one exception is [`Analysis::length`],
//! which counts the stripped value with its internal whitespace intact.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};

/// Derived properties of a raw string, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// SHA-256 of the normalized form, hex encoded.
    pub id: String,
    pub value: String,
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Normalize a raw string for identity and character statistics.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Compute the content identifier of an already-normalized string.
///
/// Returns the hex-encoded SHA-256 digest of its UTF-8 bytes.
#[must_use]
pub fn content_hash(normalized: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Analyze a raw string.
#[must_use]
pub fn analyze(raw: &str) -> Analysis {
    let normalized = normalize(raw);
    let chars: Vec<char> = normalized.chars().collect();

    let is_palindrome = chars.iter().eq(chars.iter().rev());
    let unique_characters = chars.iter().collect::<HashSet<_>>().len();

    let mut character_frequency_map = BTreeMap::new();
    for c in &chars {
        *character_frequency_map.entry(*c).or_insert(0) += 1;
    }

    Analysis {
        id: content_hash(&normalized),
        value: raw.to_string(),
        length: raw.trim().chars().count(),
        is_palindrome,
        unique_characters,
        word_count: raw.split_whitespace().count(),
        character_frequency_map,
    }
}
