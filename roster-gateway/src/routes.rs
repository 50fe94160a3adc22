//! Axum route handlers for the roster API.
//!
//! Paths are not routed: every path serves the same collection, and only
//! the final path segment matters, as the target id for `DELETE` and `PUT`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, Method, Uri},
    routing::{get, MethodRouter},
    Json, Router,
};
use roster_core::{Mutation, Record, RecordStore};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Store = Arc<RecordStore>;

// ── Response types ────────────────────────────────────────────────────────────

/// Body of a successful `POST`.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub message: String,
    pub updated_list: Vec<Record>,
}

/// Body of a successful `DELETE`, including the record that was removed.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_item: Record,
    pub updated_list: Vec<Record>,
}

/// Body of a successful `PUT`, including the record as now stored.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    pub updated_item: Record,
    pub updated_list: Vec<Record>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given store.
///
/// Request bodies are not size-limited.
pub fn create_router(store: Store) -> Router {
    Router::new()
        .route("/", collection())
        .route("/{*path}", collection())
        .with_state(store)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

fn collection() -> MethodRouter<Store> {
    get(list_records)
        .post(create_record)
        .put(update_record)
        .delete(delete_record)
}

/// CORS policy applied to every response.
///
/// Any `OPTIONS` request is answered by the layer itself with 200 and an
/// empty body.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /*` — the whole collection in insertion order.
pub async fn list_records(State(store): State<Store>) -> Json<Vec<Record>> {
    Json(store.list())
}

/// `POST /*` — store the submitted object under a freshly generated id.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] if the body is not a JSON object.
pub async fn create_record(
    State(store): State<Store>,
    body: Bytes,
) -> Result<Json<CreateResponse>, GatewayError> {
    let record = parse_body(&store, &body)?;
    let Mutation { record, snapshot } = store.create(record);
    info!(id = record.id().unwrap_or_default(), count = snapshot.len(), "record created");

    Ok(Json(CreateResponse {
        message: "Item added successfully".to_owned(),
        updated_list: snapshot,
    }))
}

/// `DELETE /*/{id}` — remove the record whose id is the final path segment.
///
/// # Errors
/// Returns [`GatewayError::NotFound`] with the unchanged collection if no
/// record has that id.
pub async fn delete_record(
    State(store): State<Store>,
    uri: Uri,
) -> Result<Json<DeleteResponse>, GatewayError> {
    let id = target_id(uri.path());
    let Mutation { record, snapshot } = store.remove(id).inspect_err(|_| {
        warn!(id, "delete target not found");
    })?;
    info!(id, count = snapshot.len(), "record deleted");

    Ok(Json(DeleteResponse {
        message: format!("User with ID {id} was deleted"),
        deleted_item: record,
        updated_list: snapshot,
    }))
}

/// `PUT /*/{id}` — replace the fields of the record whose id is the final
/// path segment. The id itself never changes.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] if the body is not a JSON object,
/// or [`GatewayError::NotFound`] if no record has that id.
pub async fn update_record(
    State(store): State<Store>,
    uri: Uri,
    body: Bytes,
) -> Result<Json<UpdateResponse>, GatewayError> {
    let id = target_id(uri.path());
    let replacement = parse_body(&store, &body)?;
    let Mutation { record, snapshot } = store.update(id, replacement).inspect_err(|_| {
        warn!(id, "update target not found");
    })?;
    info!(id, "record updated");

    Ok(Json(UpdateResponse {
        message: format!("User with ID {id} was updated"),
        updated_item: record,
        updated_list: snapshot,
    }))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_body(store: &RecordStore, body: &[u8]) -> Result<Record, GatewayError> {
    Record::from_json(body).map_err(|error| {
        warn!(reason = %error.reason, "rejected request body");
        GatewayError::InvalidBody { reason: error.reason, current_list: store.list() }
    })
}

/// Final segment of a request path; empty for `/` or a trailing slash.
fn target_id(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
