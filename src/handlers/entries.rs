use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::dtos::{EntryDto, EntryPayload};
use crate::api::response::{self, ApiResponse, ApiResult, Page};
use crate::error::ApiError;
use crate::state::AppState;

/// Paging and ordering query parameters. `pag` stays a string here so a
/// non-numeric value surfaces as a validation message instead of a bare
/// extractor rejection.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub pag: Option<String>,
    pub ord: Option<String>,
    pub dir: Option<String>,
}

/// POST /api/lancamentos - record a new entry
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EntryPayload>,
) -> ApiResult<EntryDto> {
    let entry = state.entries.create(payload).await?;
    Ok(ApiResponse::success(EntryDto::from(&entry)))
}

/// GET /api/lancamentos/:id - show one entry
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<EntryDto> {
    let entry = state.entries.find_by_id(id).await?;
    Ok(ApiResponse::success(EntryDto::from(&entry)))
}

/// PUT /api/lancamentos/:id - rewrite an entry
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EntryPayload>,
) -> ApiResult<EntryDto> {
    let entry = state.entries.update(id, payload).await?;
    Ok(ApiResponse::success(EntryDto::from(&entry)))
}

/// DELETE /api/lancamentos/:id - remove an entry
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    state.entries.delete(id).await?;
    Ok(response::empty())
}

/// GET /api/lancamentos/funcionario/:id - page through an employee's entries
pub async fn list_by_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> ApiResult<Page<EntryDto>> {
    let page = match params.pag.as_deref() {
        None => 0,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ApiError::bad_request("Pagina invalida"))?,
    };

    let entries = state
        .entries
        .list_by_employee(employee_id, page, params.ord.as_deref(), params.dir.as_deref())
        .await?;
    Ok(ApiResponse::success(entries.map(EntryDto::from)))
}
