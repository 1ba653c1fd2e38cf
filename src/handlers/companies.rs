use axum::extract::{Path, State};

use crate::api::dtos::CompanyDto;
use crate::api::response::{ApiResponse, ApiResult};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/empresas/cnpj/:cnpj - look a company up by CNPJ
pub async fn find_by_cnpj(
    State(state): State<AppState>,
    Path(cnpj): Path<String>,
) -> ApiResult<CompanyDto> {
    let company = state.companies.find_by_cnpj(&cnpj).await?.ok_or_else(|| {
        ApiError::bad_request(format!("Empresa nao encontrada para o CNPJ {}", cnpj))
    })?;
    Ok(ApiResponse::success(CompanyDto::from(company)))
}
