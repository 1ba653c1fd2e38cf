pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod validation;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assemble the full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        // Token acquisition
        .route("/auth", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        // Registration
        .route("/api/cadastrar-pf", post(handlers::registration::register_pf))
        .route("/api/cadastrar-pj", post(handlers::registration::register_pj))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/empresas/cnpj/:cnpj", get(handlers::companies::find_by_cnpj))
        .route("/api/funcionarios/:id", put(handlers::employees::update))
        // Entry collection and record operations
        .route("/api/lancamentos", post(handlers::entries::create))
        .route(
            "/api/lancamentos/:id",
            get(handlers::entries::find_by_id)
                .put(handlers::entries::update)
                .delete(handlers::entries::remove),
        )
        .route(
            "/api/lancamentos/funcionario/:id",
            get(handlers::entries::list_by_employee),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::jwt_auth_middleware,
        ))
}
