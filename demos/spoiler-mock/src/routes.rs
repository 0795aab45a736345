use axum::extract::State;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::AppState;
use crate::auth::{login, require_bearer};
use crate::stories::routes::story_router;

/// The application router
pub fn app_router(state: AppState) -> Router {
    let stories =
        story_router().route_layer(middleware::from_fn_with_state(state.sessions(), require_bearer));

    Router::new()
        .nest("/api/Story", stories)
        .route("/api/User/Authentication", post(login))
        .route("/api/health", get(health))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.uptime();

    Json(json!({
        "status": "OK",
        "uptime": uptime,
    }))
}
