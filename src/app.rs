use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .route("/admin.html", get(handlers::admin))
        .route("/api/profile", get(handlers::get_profile).put(handlers::put_profile))
        .route("/api/render", post(handlers::render))
        .with_state(state)
}
