use axum::extract::State;
use axum::Json;

use crate::api::dtos::{
    CompanyRegistrationDto, EmployeeDto, PfRegistrationPayload, PjRegistrationPayload,
};
use crate::api::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/cadastrar-pf - register an employee into an existing company
pub async fn register_pf(
    State(state): State<AppState>,
    Json(payload): Json<PfRegistrationPayload>,
) -> ApiResult<EmployeeDto> {
    let (employee, company) = state.registration.register_person(payload).await?;
    Ok(ApiResponse::success(EmployeeDto::from_employee(&employee, &company.cnpj)))
}

/// POST /api/cadastrar-pj - register a company with its admin employee
pub async fn register_pj(
    State(state): State<AppState>,
    Json(payload): Json<PjRegistrationPayload>,
) -> ApiResult<CompanyRegistrationDto> {
    let (employee, company) = state.registration.register_company(payload).await?;
    Ok(ApiResponse::success(CompanyRegistrationDto::from_parts(&employee, &company)))
}
