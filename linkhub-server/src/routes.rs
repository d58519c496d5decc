//! Request handlers.

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use chrono::Utc;
use linkhub_model::{Action, apply};
use linkhub_order::sort;
use linkhub_types::{Link, LinkDraft, LinkPatch, Visibility};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub(crate) async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

/// The full collection in canonical order. Without admin credentials,
/// private links are filtered out before sorting.
pub(crate) async fn list_links(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Link>>> {
    let links = state.store.load().await?;
    let visible: Vec<Link> = if state.is_admin(&headers) {
        links
    } else {
        links
            .into_iter()
            .filter(|l| l.visibility == Visibility::Public)
            .collect()
    };
    Ok(Json(sort(&visible)))
}

pub(crate) async fn create_link(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<LinkDraft>,
) -> ApiResult<impl IntoResponse> {
    state.require_admin(&headers)?;
    let _guard = state.write_lock.lock().await;
    let links = state.store.load().await?;
    let applied = apply(&links, Action::Create(draft), Utc::now())?;
    state.store.save(&applied.links).await?;
    Ok((StatusCode::CREATED, Json(applied.affected)))
}

pub(crate) async fn update_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(patch): Json<LinkPatch>,
) -> ApiResult<Json<Option<Link>>> {
    state.require_admin(&headers)?;
    let _guard = state.write_lock.lock().await;
    let links = state.store.load().await?;
    let applied = apply(&links, Action::Edit { id, patch }, Utc::now())?;
    state.store.save(&applied.links).await?;
    Ok(Json(applied.affected))
}

pub(crate) async fn delete_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    state.require_admin(&headers)?;
    let _guard = state.write_lock.lock().await;
    let links = state.store.load().await?;
    let applied = apply(&links, Action::Delete { id }, Utc::now())?;
    state.store.save(&applied.links).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReorderRequest {
    #[serde(default)]
    from_id: String,
    #[serde(default)]
    to_id: String,
}

/// Applies a drag gesture. A gesture the ordering engine rejects is still
/// a 200 — the collection is simply written back unchanged.
pub(crate) async fn reorder_links(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ReorderRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    state.require_admin(&headers)?;
    if req.from_id.is_empty() || req.to_id.is_empty() {
        return Err(ApiError::BadRequest(
            "fromId and toId are required".to_string(),
        ));
    }
    let _guard = state.write_lock.lock().await;
    let links = state.store.load().await?;
    let applied = apply(
        &links,
        Action::Drop {
            from_id: req.from_id,
            to_id: req.to_id,
        },
        Utc::now(),
    )?;
    state.store.save(&applied.links).await?;
    Ok(Json(json!({ "ok": true })))
}

/// The stored collection, verbatim.
pub(crate) async fn export_links(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Link>>> {
    state.require_admin(&headers)?;
    Ok(Json(state.store.load().await?))
}

pub(crate) async fn import_links(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<serde_json::Value>> {
    state.require_admin(&headers)?;
    if !body.is_array() {
        return Err(ApiError::BadRequest(
            "request body must be an array".to_string(),
        ));
    }
    let incoming: Vec<Link> =
        serde_json::from_value(body).map_err(|err| ApiError::BadRequest(err.to_string()))?;
    let _guard = state.write_lock.lock().await;
    let applied = apply(&[], Action::Import(incoming), Utc::now())?;
    state.store.save(&applied.links).await?;
    Ok(Json(json!({ "ok": true })))
}
