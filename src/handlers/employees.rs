use axum::extract::{Path, State};
use axum::Json;

use crate::api::dtos::{EmployeeProfileDto, EmployeeUpdatePayload};
use crate::api::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// PUT /api/funcionarios/:id - update an employee's profile
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdatePayload>,
) -> ApiResult<EmployeeProfileDto> {
    let employee = state.registration.update_employee(id, payload).await?;
    Ok(ApiResponse::success(EmployeeProfileDto::from(&employee)))
}
