//! Integration tests for the string service.
//!
//! These tests verify that:
//! - Creation validates input and rejects duplicate normalized forms
//! - Retrieval and deletion are exact on the raw value
//! - Parameter filters and natural language queries select the same records

use serde_json::json;
use std::sync::Arc;
use stringlens_core::{Error, FilterError, MemoryStore, StringService};

fn service() -> StringService {
    StringService::new(Arc::new(MemoryStore::new()))
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

async fn seeded() -> StringService {
    let service = service();
    for value in [
        "racecar",
        "hello world",
        "level",
        "a quick brown fox",
        "Noon",
        "zebra",
    ] {
        service
            .create(&json!({ "value": value }))
            .await
            .expect("seed value should be created");
    }
    service
}

#[tokio::test]
async fn test_create_returns_analysis() {
    let service = service();
    let record = service.create(&json!({"value": "race car"})).await.unwrap();

    assert_eq!(record.value, "race car");
    assert_eq!(record.length, 8);
    assert!(record.is_palindrome);
    assert_eq!(record.unique_characters, 4);
    assert_eq!(record.word_count, 2);
    assert_eq!(record.character_frequency_map.get(&'r'), Some(&2));
    assert_eq!(record.id, stringlens_core::content_hash("racecar"));
}

#[tokio::test]
async fn test_create_duplicate() {
    let service = service();
    service.create(&json!({"value": "hello"})).await.unwrap();

    let err = service.create(&json!({"value": "hello"})).await.unwrap_err();
    assert!(matches!(err, Error::Duplicate));

    let err = service.create(&json!({"value": "  HeLLo "})).await.unwrap_err();
    assert!(matches!(err, Error::Duplicate));
}

#[tokio::test]
async fn test_create_validation() {
    let service = service();

    let err = service.create(&json!({"value": "   "})).await.unwrap_err();
    assert!(matches!(err, Error::Validation("Input string cannot be empty.")));

    let err = service.create(&json!({"value": 42})).await.unwrap_err();
    assert!(matches!(err, Error::Validation("Input must be a string.")));

    let err = service.create(&json!({"value": ["a"]})).await.unwrap_err();
    assert!(matches!(err, Error::Validation("Input must be a string.")));

    let err = service.create(&json!({})).await.unwrap_err();
    assert!(matches!(err, Error::Validation("Missing 'value' field")));

    let err = service.create(&json!({"value": null})).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert_eq!(service.store().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_then_get() {
    let service = service();
    service.create(&json!({"value": "hello"})).await.unwrap();
    assert!(service.get("hello").await.is_ok());

    service.delete("hello").await.unwrap();
    assert!(matches!(service.get("hello").await, Err(Error::NotFound)));
    assert!(matches!(service.delete("hello").await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_list_without_filters() {
    let service = seeded().await;
    let outcome = service.list(&[]).await.unwrap();
    assert_eq!(outcome.count, 6);
    assert_eq!(outcome.data[0].value, "racecar");
    assert!(outcome.filter_applied.is_empty());
}

#[tokio::test]
async fn test_list_with_filters() {
    let service = seeded().await;
    let outcome = service
        .list(&params(&[("is_palindrome", "true"), ("word_count", "1")]))
        .await
        .unwrap();

    let values: Vec<_> = outcome.data.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, ["racecar", "level", "Noon"]);
    assert_eq!(outcome.count, 3);
    assert_eq!(
        outcome.filter_applied.get("is_palindrome").map(String::as_str),
        Some("true")
    );
}

#[tokio::test]
async fn test_list_contains_character_case_insensitive() {
    let service = seeded().await;
    let outcome = service
        .list(&params(&[("contains_character", "N")]))
        .await
        .unwrap();
    let values: Vec<_> = outcome.data.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, ["a quick brown fox", "Noon"]);
}

#[tokio::test]
async fn test_list_rejects_bad_filters() {
    let service = seeded().await;

    let err = service
        .list(&params(&[("min_length", "20"), ("max_length", "10")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Filter(FilterError::ConflictingBounds)));

    let err = service
        .list(&params(&[("sort", "asc")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Filter(FilterError::UnknownParameter(ref p)) if p == "sort"));

    let err = service
        .list(&params(&[("is_palindrome", "sometimes")]))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid boolean for is_palindrome");
}

#[tokio::test]
async fn test_conflicting_bounds_rejected_on_empty_store() {
    let service = service();
    let err = service
        .list(&params(&[("min_length", "20"), ("max_length", "10")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Filter(FilterError::ConflictingBounds)));
}

#[tokio::test]
async fn test_natural_language_query() {
    let service = seeded().await;
    let outcome = service
        .natural_language(Some("all single word palindromic strings"))
        .await
        .unwrap();

    assert_eq!(outcome.count, 3);
    assert_eq!(outcome.interpreted_query.parsed_filters.word_count, Some(1));
    assert_eq!(
        outcome.interpreted_query.parsed_filters.is_palindrome,
        Some(true)
    );
}

#[tokio::test]
async fn test_natural_language_matches_parameter_filters() {
    let service = seeded().await;
    let nl = service
        .natural_language(Some("strings longer than 5 containing the letter o"))
        .await
        .unwrap();
    let direct = service
        .list(&params(&[("min_length", "6"), ("contains_character", "o")]))
        .await
        .unwrap();

    assert_eq!(nl.data, direct.data);
    assert_eq!(nl.count, 2);
}

#[tokio::test]
async fn test_natural_language_errors() {
    let service = seeded().await;

    let err = service
        .natural_language(Some("strings longer than 20 and shorter than 10"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ConflictingQuery));

    let err = service
        .natural_language(Some("gibberish qwerty asdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnparseableQuery));

    let err = service.natural_language(None).await.unwrap_err();
    assert!(matches!(err, Error::UnparseableQuery));
}
