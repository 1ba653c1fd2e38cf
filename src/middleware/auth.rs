use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated employee context extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { email: claims.sub, role: claims.role }
    }
}

/// Bearer-token gate for the protected routes. Rejections are 401 in the
/// standard envelope; on success the employee context is injected into the
/// request extensions.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)
        .ok_or_else(|| ApiError::unauthorized("Token nao informado"))?;

    let claims = state
        .tokens
        .valid_claims(&token)
        .ok_or_else(|| ApiError::unauthorized("Token invalido ou expirado"))?;

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

/// Authorization header value, minus the Bearer prefix when present. A raw
/// token without the prefix is accepted as-is.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_yields_none() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_none());
    }

    #[test]
    fn bearer_prefix_is_stripped() {
        let token = extract_bearer_token(&headers_with("Bearer abc.def.ghi"));
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn raw_value_is_used_verbatim() {
        let token = extract_bearer_token(&headers_with("abc.def.ghi"));
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn empty_header_is_an_empty_token() {
        // present but blank: treated as an informed, invalid token
        assert_eq!(extract_bearer_token(&headers_with("")).as_deref(), Some(""));
    }

    #[test]
    fn auth_user_carries_subject_and_role() {
        let user = AuthUser::from(Claims {
            sub: "ana@empresa.com".to_string(),
            role: "ROLE_ADMIN".to_string(),
            created: 0,
            exp: 0,
        });
        assert_eq!(user.email, "ana@empresa.com");
        assert_eq!(user.role, "ROLE_ADMIN");
    }
}
