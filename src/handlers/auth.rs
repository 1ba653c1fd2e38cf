use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;

use crate::api::dtos::{LoginPayload, TokenDto};
use crate::api::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /auth - authenticate an employee and issue a token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> ApiResult<TokenDto> {
    let token = state.auth.login(&payload).await?;
    Ok(ApiResponse::success(TokenDto { token }))
}

/// POST /auth/refresh - re-stamp a still-valid token
pub async fn refresh(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<TokenDto> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let token = state.auth.refresh(authorization)?;
    Ok(ApiResponse::success(TokenDto { token }))
}
