use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

pub const IGNORE_STAGE_IN_PATH_VAR: &str = "AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH";

/// Keeps the API Gateway stage name (e.g. `/prod`) out of the routed path.
pub fn configure_lambda_runtime() {
    std::env::set_var(IGNORE_STAGE_IN_PATH_VAR, "true");
}

pub fn create_app(state: AppState) -> Router {
    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::games::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
