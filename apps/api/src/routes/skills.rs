use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::matching::models::Skill;
use crate::state::AppState;

/// GET /api/v1/skills
/// Returns the skill catalog ordered by category, then name.
pub async fn list_skills_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(state.inventory.list_skills().await?))
}
