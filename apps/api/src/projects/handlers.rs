//! Axum route handlers for project skill matching.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::models::{EmployeeId, MatchResult, ProjectSkillRequirement};
use crate::matching::ranking::rank_candidates;
use crate::models::assignment::ProjectAssignmentRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillMatchQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatchResponse {
    pub matches: Vec<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_skills: Option<Vec<ProjectSkillRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTeamRequest {
    /// `null` and an absent field are both treated as "no employees".
    #[serde(default)]
    pub employee_ids: Option<Vec<EmployeeId>>,
}

#[derive(Debug, Serialize)]
pub struct AssignTeamResponse {
    pub success: bool,
    pub message: String,
    pub assignments: Vec<ProjectAssignmentRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/projects/:id/skill-match
///
/// Ranks active employees against the project's required skills.
/// A project with no requirements returns no matches and an explanatory message.
pub async fn handle_skill_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<SkillMatchQuery>, QueryRejection>,
) -> Result<Json<SkillMatchResponse>, AppError> {
    let project_id = parse_project_id(&id)?;
    let Query(params) = query.map_err(|rejection| {
        debug!("Rejected skill-match query: {rejection}");
        AppError::Validation("limit must be a positive integer".to_string())
    })?;
    let limit = match params.limit {
        Some(0) => return Err(AppError::Validation("limit must be at least 1".to_string())),
        Some(limit) => limit,
        None => state.config.match_limit,
    };

    let project_skills = state.inventory.project_requirements(project_id).await?;
    if project_skills.is_empty() {
        return Ok(Json(SkillMatchResponse {
            matches: vec![],
            project_skills: None,
            message: Some("No skills required for this project".to_string()),
        }));
    }

    let candidates = state.inventory.active_candidates().await?;
    let matches = rank_candidates(&candidates, &project_skills, limit);

    info!(
        project_id,
        requirements = project_skills.len(),
        candidates = candidates.len(),
        "Computed skill matches"
    );

    Ok(Json(SkillMatchResponse {
        matches,
        project_skills: Some(project_skills),
        message: None,
    }))
}

/// POST /api/v1/projects/:id/skill-match
///
/// Assigns the selected employees to the project. Already-assigned employees are skipped.
pub async fn handle_assign_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AssignTeamRequest>, JsonRejection>,
) -> Result<Json<AssignTeamResponse>, AppError> {
    let project_id = parse_project_id(&id)?;
    let employee_ids = match body {
        Ok(Json(AssignTeamRequest {
            employee_ids: Some(ids),
        })) if !ids.is_empty() => ids,
        Ok(_) => return Err(employee_ids_required()),
        Err(rejection) => {
            debug!("Rejected assign-team body: {rejection}");
            return Err(employee_ids_required());
        }
    };

    let assignments = state
        .inventory
        .assign_employees(
            project_id,
            &employee_ids,
            &state.config.assignment_terms(),
        )
        .await?;

    Ok(Json(AssignTeamResponse {
        success: true,
        message: format!("Assigned {} employees to project", employee_ids.len()),
        assignments,
    }))
}

fn employee_ids_required() -> AppError {
    AppError::Validation("Employee IDs array required".to_string())
}

fn parse_project_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation("Invalid project ID".to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::inventory::MemoryInventory;
    use crate::matching::models::{Candidate, EmployeeSkill};
    use crate::matching::vocabulary::{LevelValue, PriorityValue};

    fn requirement(
        skill_id: i32,
        name: &str,
        level: &str,
        priority: &str,
    ) -> ProjectSkillRequirement {
        ProjectSkillRequirement {
            skill_id,
            skill_name: name.to_string(),
            required_level: LevelValue::from(level),
            priority: PriorityValue::from(priority),
        }
    }

    fn candidate(id: i32, name: &str, skills: &[(i32, &str)]) -> Candidate {
        Candidate {
            id,
            name: name.to_string(),
            skills: skills
                .iter()
                .map(|(skill_id, level)| EmployeeSkill {
                    skill_id: *skill_id,
                    skill_name: format!("skill-{skill_id}"),
                    proficiency_level: LevelValue::from(*level),
                    years_experience: 2,
                    certified: false,
                })
                .collect(),
        }
    }

    fn state() -> AppState {
        let inventory = MemoryInventory {
            requirements: vec![
                (1, requirement(1, "React", "advanced", "required")),
                (1, requirement(2, "PostgreSQL", "intermediate", "preferred")),
            ],
            candidates: vec![
                candidate(10, "Ada Lovelace", &[(1, "beginner")]),
                candidate(11, "Grace Hopper", &[(1, "advanced"), (2, "intermediate")]),
                candidate(12, "Alan Turing", &[]),
            ],
            ..MemoryInventory::default()
        };
        AppState {
            config: Config::for_tests(),
            inventory: Arc::new(inventory),
        }
    }

    #[tokio::test]
    async fn test_skill_match_ranks_candidates() {
        let Json(response) = handle_skill_match(
            State(state()),
            Path("1".to_string()),
            Ok(Query(SkillMatchQuery { limit: None })),
        )
        .await
        .unwrap();

        let ids: Vec<i32> = response.matches.iter().map(|m| m.employee_id).collect();
        assert_eq!(ids, vec![11, 10, 12]);
        assert_eq!(response.matches[0].match_score, 100);
        assert_eq!(response.project_skills.unwrap().len(), 2);
        assert!(response.message.is_none());
    }

    #[tokio::test]
    async fn test_skill_match_honours_limit() {
        let Json(response) = handle_skill_match(
            State(state()),
            Path("1".to_string()),
            Ok(Query(SkillMatchQuery { limit: Some(1) })),
        )
        .await
        .unwrap();

        assert_eq!(response.matches.len(), 1);
        assert_eq!(response.matches[0].employee_name, "Grace Hopper");
    }

    #[tokio::test]
    async fn test_project_without_requirements_returns_message() {
        let Json(response) = handle_skill_match(
            State(state()),
            Path("99".to_string()),
            Ok(Query(SkillMatchQuery { limit: None })),
        )
        .await
        .unwrap();

        assert!(response.matches.is_empty());
        assert!(response.project_skills.is_none());
        assert_eq!(
            response.message.as_deref(),
            Some("No skills required for this project")
        );
    }

    #[tokio::test]
    async fn test_invalid_project_id_is_rejected() {
        let result = handle_skill_match(
            State(state()),
            Path("abc".to_string()),
            Ok(Query(SkillMatchQuery { limit: None })),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(msg)) if msg == "Invalid project ID"));
    }

    #[tokio::test]
    async fn test_zero_limit_is_rejected() {
        let result = handle_skill_match(
            State(state()),
            Path("1".to_string()),
            Ok(Query(SkillMatchQuery { limit: Some(0) })),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_assign_team_requires_employee_ids() {
        let result = handle_assign_team(
            State(state()),
            Path("1".to_string()),
            Ok(Json(AssignTeamRequest {
                employee_ids: Some(vec![]),
            })),
        )
        .await;

        assert!(
            matches!(result, Err(AppError::Validation(msg)) if msg == "Employee IDs array required")
        );
    }

    #[tokio::test]
    async fn test_assign_team_skips_existing_assignments() {
        let state = state();

        let Json(first) = handle_assign_team(
            State(state.clone()),
            Path("1".to_string()),
            Ok(Json(AssignTeamRequest {
                employee_ids: Some(vec![10, 11]),
            })),
        )
        .await
        .unwrap();
        assert!(first.success);
        assert_eq!(first.message, "Assigned 2 employees to project");
        assert_eq!(first.assignments.len(), 2);
        assert!(first
            .assignments
            .iter()
            .all(|a| a.role == "Developer" && a.allocation_percentage == 50));

        let Json(second) = handle_assign_team(
            State(state),
            Path("1".to_string()),
            Ok(Json(AssignTeamRequest {
                employee_ids: Some(vec![11, 12]),
            })),
        )
        .await
        .unwrap();
        let user_ids: Vec<i32> = second.assignments.iter().map(|a| a.user_id).collect();
        assert_eq!(user_ids, vec![12]);
    }

    #[test]
    fn test_request_accepts_camel_case_ids() {
        let request: AssignTeamRequest =
            serde_json::from_str(r#"{"employeeIds":[3,4]}"#).unwrap();
        assert_eq!(request.employee_ids, Some(vec![3, 4]));

        let absent: AssignTeamRequest = serde_json::from_str("{}").unwrap();
        assert!(absent.employee_ids.is_none());

        let null: AssignTeamRequest = serde_json::from_str(r#"{"employeeIds":null}"#).unwrap();
        assert!(null.employee_ids.is_none());
    }
}
