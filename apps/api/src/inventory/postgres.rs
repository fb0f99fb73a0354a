use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::inventory::{AssignmentTerms, SkillInventory};
use crate::matching::models::{
    Candidate, EmployeeId, EmployeeSkill, ProjectSkillRequirement, Skill,
};
use crate::matching::vocabulary::{LevelValue, PriorityValue};
use crate::models::assignment::ProjectAssignmentRow;
use crate::models::skill::{EmployeeRow, ProjectSkillRow, SkillRow, UserSkillRow};

/// PostgreSQL-backed inventory over the `skills`, `users`, `user_skills`,
/// `project_skills_required` and `project_assignments` tables.
#[derive(Clone)]
pub struct PgSkillInventory {
    pool: PgPool,
}

impl PgSkillInventory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillInventory for PgSkillInventory {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let rows = sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT id, name, COALESCE(category, '') AS category
            FROM skills
            ORDER BY category, name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Skill {
                id: row.id,
                name: row.name,
                category: row.category,
            })
            .collect())
    }

    async fn project_requirements(
        &self,
        project_id: i32,
    ) -> Result<Vec<ProjectSkillRequirement>, AppError> {
        let rows = sqlx::query_as::<_, ProjectSkillRow>(
            r#"
            SELECT
                psr.skill_id,
                s.name AS skill_name,
                COALESCE(psr.required_level, '') AS required_level,
                COALESCE(psr.priority, '') AS priority
            FROM project_skills_required psr
            INNER JOIN skills s ON psr.skill_id = s.id
            WHERE psr.project_id = $1
            ORDER BY psr.id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(requirement_from_row).collect())
    }

    async fn active_candidates(&self) -> Result<Vec<Candidate>, AppError> {
        let employees = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT u.id, CONCAT(u.first_name, ' ', u.last_name) AS name
            FROM users u
            WHERE u.is_active = TRUE
            ORDER BY u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        // One query for every active employee's skills instead of one per employee.
        let skill_rows = sqlx::query_as::<_, UserSkillRow>(
            r#"
            SELECT
                us.user_id,
                us.skill_id,
                s.name AS skill_name,
                COALESCE(us.proficiency_level, '') AS proficiency_level,
                us.years_experience,
                us.certified
            FROM user_skills us
            INNER JOIN skills s ON us.skill_id = s.id
            INNER JOIN users u ON us.user_id = u.id
            WHERE u.is_active = TRUE
            ORDER BY us.user_id, us.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(group_candidates(employees, skill_rows))
    }

    async fn assign_employees(
        &self,
        project_id: i32,
        employee_ids: &[EmployeeId],
        terms: &AssignmentTerms,
    ) -> Result<Vec<ProjectAssignmentRow>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::new();

        for &employee_id in employee_ids {
            let row = sqlx::query_as::<_, ProjectAssignmentRow>(
                r#"
                INSERT INTO project_assignments
                    (project_id, user_id, role, allocation_percentage,
                     start_date, created_at, updated_at)
                SELECT $1, $2, $3, $4, CURRENT_DATE, NOW(), NOW()
                WHERE NOT EXISTS (
                    SELECT 1 FROM project_assignments WHERE project_id = $1 AND user_id = $2
                )
                RETURNING id, project_id, user_id, role, allocation_percentage,
                          start_date, created_at, updated_at
                "#,
            )
            .bind(project_id)
            .bind(employee_id)
            .bind(&terms.role)
            .bind(terms.allocation_percentage)
            .fetch_optional(&mut *tx)
            .await?;

            if let Some(row) = row {
                created.push(row);
            }
        }

        // Dropping `tx` on an early `?` return rolls the whole batch back.
        tx.commit().await?;

        info!(
            project_id,
            requested = employee_ids.len(),
            created = created.len(),
            "Assigned employees to project"
        );
        Ok(created)
    }
}

fn requirement_from_row(row: ProjectSkillRow) -> ProjectSkillRequirement {
    ProjectSkillRequirement {
        skill_id: row.skill_id,
        skill_name: row.skill_name,
        required_level: LevelValue::from(row.required_level),
        priority: PriorityValue::from(row.priority),
    }
}

fn employee_skill_from_row(row: UserSkillRow) -> EmployeeSkill {
    let years_experience = match row.years_experience {
        None => 0,
        Some(years) => u32::try_from(years).unwrap_or_else(|_| {
            warn!(
                user_id = row.user_id,
                skill_id = row.skill_id,
                years,
                "negative years_experience; clamping to 0"
            );
            0
        }),
    };

    EmployeeSkill {
        skill_id: row.skill_id,
        skill_name: row.skill_name,
        proficiency_level: LevelValue::from(row.proficiency_level),
        years_experience,
        certified: row.certified.unwrap_or(false),
    }
}

/// Attaches skill rows to their employees, preserving employee order.
fn group_candidates(
    employees: Vec<EmployeeRow>,
    skill_rows: Vec<UserSkillRow>,
) -> Vec<Candidate> {
    let mut skills_by_user: HashMap<i32, Vec<EmployeeSkill>> = HashMap::new();
    for row in skill_rows {
        skills_by_user
            .entry(row.user_id)
            .or_default()
            .push(employee_skill_from_row(row));
    }

    employees
        .into_iter()
        .map(|employee| Candidate {
            skills: skills_by_user.remove(&employee.id).unwrap_or_default(),
            id: employee.id,
            name: employee.name,
        })
        .collect()
}
