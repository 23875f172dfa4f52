use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use bic_registry::{Acknowledgement, CountryView, Lookup, Registry};
use bic_types::RecordDraft;

use crate::error::ApiError;

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": "bic-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /v1/swift-codes/{code}` — fetch a record; headquarters records
/// include their branch list.
pub async fn get_swift_code(
    State(registry): State<Registry>,
    Path(code): Path<String>,
) -> Result<Json<Lookup>, ApiError> {
    Ok(Json(registry.fetch(&code)?))
}

/// `GET /v1/swift-codes/country/{iso2}` — fetch all records for a country.
pub async fn get_country(
    State(registry): State<Registry>,
    Path(iso2): Path<String>,
) -> Result<Json<CountryView>, ApiError> {
    Ok(Json(registry.fetch_country(&iso2)?))
}

/// `POST /v1/swift-codes` — create a record. A body that fails to
/// deserialize (wrong-typed `isHeadquarter` included) is a 400, not a
/// framework-level rejection.
pub async fn add_swift_code(
    State(registry): State<Registry>,
    payload: Result<Json<RecordDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Acknowledgement>), ApiError> {
    let Json(draft) = payload.map_err(|rej| ApiError::MalformedBody(rej.body_text()))?;
    let ack = registry.add(draft)?;
    Ok((StatusCode::CREATED, Json(ack)))
}

/// `DELETE /v1/swift-codes/{code}` — remove a record, echoing the
/// canonical code in the acknowledgment.
pub async fn delete_swift_code(
    State(registry): State<Registry>,
    Path(code): Path<String>,
) -> Result<Json<Acknowledgement>, ApiError> {
    Ok(Json(registry.remove(&code)?))
}
