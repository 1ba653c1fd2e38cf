mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

use ponto_api::auth::Claims;

fn get(uri: &str, token: &str) -> Result<Request<Body>> {
    Ok(Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())?)
}

fn post_json(uri: &str, token: &str, payload: &Value) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload)?))?)
}

fn signed_token(secret: &str, exp: i64) -> Result<String> {
    let claims = Claims {
        sub: "ana@empresa.com".to_string(),
        role: "ROLE_USUARIO".to_string(),
        created: chrono::Utc::now().timestamp(),
        exp,
    };
    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

#[tokio::test]
async fn requests_without_a_token_are_rejected() -> Result<()> {
    let (_state, router) = common::no_db_app();

    let request = Request::builder().uri("/api/lancamentos/1").body(Body::empty())?;
    let (status, body) = common::oneshot_json(router, request).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"], json!(["Token nao informado"]));
    Ok(())
}

#[tokio::test]
async fn tokens_signed_with_another_secret_are_rejected() -> Result<()> {
    let (_state, router) = common::no_db_app();
    let exp = chrono::Utc::now().timestamp() + 3600;
    let forged = signed_token("some-other-secret", exp)?;

    let (status, body) = common::oneshot_json(router, get("/api/lancamentos/1", &forged)?).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"], json!(["Token invalido ou expirado"]));
    Ok(())
}

#[tokio::test]
async fn expired_tokens_are_rejected() -> Result<()> {
    let (_state, router) = common::no_db_app();
    let exp = chrono::Utc::now().timestamp() - 100;
    let expired = signed_token(common::TEST_JWT_SECRET, exp)?;

    let (status, body) = common::oneshot_json(router, get("/api/lancamentos/1", &expired)?).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"], json!(["Token invalido ou expirado"]));
    Ok(())
}

#[tokio::test]
async fn entry_validation_accumulates_every_violation() -> Result<()> {
    let (state, router) = common::no_db_app();
    let token = state.tokens.issue("ana@empresa.com", "ROLE_USUARIO")?;

    let (status, body) =
        common::oneshot_json(router, post_json("/api/lancamentos", &token, &json!({}))?).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(
        body["errors"],
        json!(["Funcionario nao informado", "Data nao pode ser vazia", "Tipo nao pode ser vazio"])
    );
    Ok(())
}

#[tokio::test]
async fn entry_rejects_malformed_date_and_unknown_type() -> Result<()> {
    let (state, router) = common::no_db_app();
    let token = state.tokens.issue("ana@empresa.com", "ROLE_USUARIO")?;

    let payload = json!({ "data": "13/02/2023 21:50", "tipo": "PAUSA" });
    let (status, body) =
        common::oneshot_json(router, post_json("/api/lancamentos", &token, &payload)?).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["Funcionario nao informado", "Data invalida", "Tipo invalido"])
    );
    Ok(())
}

#[tokio::test]
async fn listing_rejects_unknown_paging_inputs() -> Result<()> {
    let (state, router) = common::no_db_app();
    let token = state.tokens.issue("ana@empresa.com", "ROLE_USUARIO")?;

    let cases = [
        ("/api/lancamentos/funcionario/7?ord=updated_at", "Campo de ordenacao invalido"),
        ("/api/lancamentos/funcionario/7?dir=sideways", "Direcao de ordenacao invalida"),
        ("/api/lancamentos/funcionario/7?pag=abc", "Pagina invalida"),
        ("/api/lancamentos/funcionario/7?pag=-1", "Pagina invalida"),
    ];

    for (uri, message) in cases {
        let (status, body) = common::oneshot_json(router.clone(), get(uri, &token)?).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["errors"], json!([message]), "{}", uri);
    }
    Ok(())
}

#[tokio::test]
async fn database_failures_surface_as_internal_errors() -> Result<()> {
    let (state, router) = common::no_db_app();
    let token = state.tokens.issue("ana@empresa.com", "ROLE_USUARIO")?;

    let (status, body) =
        common::oneshot_json(router, get("/api/empresas/cnpj/23355544000171", &token)?).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errors"], json!(["Erro interno no servidor"]));
    Ok(())
}
