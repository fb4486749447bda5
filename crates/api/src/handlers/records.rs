//! Handlers for the `/api/{animals|cats|dogs}` resources.
//!
//! Each nested router carries its [`RecordKind`] as a request extension, so
//! one set of handlers serves all three kinds.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use shelter_core::kind::RecordKind;
use shelter_core::record::RecordPayload;
use shelter_core::types::DbId;

use crate::error::AppResult;
use crate::query::RecordListParams;
use crate::routes::record_location;
use crate::service::RecordService;
use crate::state::AppState;

fn service(state: &AppState, kind: RecordKind) -> RecordService<'_, shelter_db::DbPool> {
    RecordService::new(kind, &state.pool, state.clock.as_ref())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/{kind}?name=&species=&age=&gender=
///
/// List records matching every supplied filter.
pub async fn list(
    State(state): State<AppState>,
    Extension(kind): Extension<RecordKind>,
    params: Result<Query<RecordListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let records = service(&state, kind).list(&params.into()).await?;
    Ok(Json(records))
}

/// GET /api/{kind}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(kind): Extension<RecordKind>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let record = service(&state, kind).get(id).await?;
    Ok(Json(record))
}

/// POST /api/{kind}
///
/// Create a record. Responds 201 with a `Location` header pointing at the
/// new record.
pub async fn create(
    State(state): State<AppState>,
    Extension(kind): Extension<RecordKind>,
    payload: Result<Json<RecordPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let record = service(&state, kind).create(&payload).await?;
    let location = record_location(kind, record.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(record),
    ))
}

/// PUT /api/{kind}/{id}
///
/// Replace a record wholesale. The body's `id` must equal the path id.
pub async fn replace(
    State(state): State<AppState>,
    Extension(kind): Extension<RecordKind>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<RecordPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    service(&state, kind).replace(id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/{kind}/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(kind): Extension<RecordKind>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    service(&state, kind).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
