pub mod health;
pub mod skills;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::projects::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills", get(skills::list_skills_handler))
        .route(
            "/api/v1/projects/:id/skill-match",
            get(handlers::handle_skill_match).post(handlers::handle_assign_team),
        )
        .fallback(not_found)
        .with_state(state)
}
