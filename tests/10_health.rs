mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};

#[tokio::test]
async fn health_reports_degraded_without_a_database() -> Result<()> {
    let (_state, router) = common::no_db_app();

    let request = Request::builder().uri("/health").body(Body::empty())?;
    let (status, body) = common::oneshot_json(router, request).await?;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["database"], "error");
    assert_eq!(body["errors"][0], "Banco de dados indisponivel");
    Ok(())
}
