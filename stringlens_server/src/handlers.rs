use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use stringlens_core::StringService;
use tracing::debug;

use crate::dto::{ListResponse, NaturalLanguageResponse, RecordResponse};
use crate::error::ApiError;

pub type AppState = Arc<StringService>;

#[derive(Debug, Default, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// `POST /strings`
pub async fn create_string(
    State(service): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    debug!("Create string");
    let record = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// `GET /strings/{value}`
pub async fn get_string(
    State(service): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    debug!("Get string: {}", value);
    let record = service.get(&value).await?;
    Ok(Json(record.into()))
}

/// `DELETE /strings/{value}`
pub async fn delete_string(
    State(service): State<AppState>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!("Delete string: {}", value);
    service.delete(&value).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /strings?is_palindrome=..&min_length=..`
pub async fn list_strings(
    State(service): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListResponse>, ApiError> {
    debug!("List strings with {} parameters", params.len());
    let outcome = service.list(&params).await?;
    Ok(Json(outcome.into()))
}

/// `GET /strings/filter-by-natural-language?query=..`
pub async fn filter_by_natural_language(
    State(service): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    debug!("Natural language filter: {:?}", params.query);
    let outcome = service.natural_language(params.query.as_deref()).await?;
    Ok(Json(outcome.into()))
}
