use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::AppError;
use crate::inventory::{AssignmentTerms, SkillInventory};
use crate::matching::models::{Candidate, EmployeeId, ProjectSkillRequirement, Skill};
use crate::models::assignment::ProjectAssignmentRow;

/// In-process inventory for exercising handlers without a database.
#[derive(Default)]
pub struct MemoryInventory {
    pub skills: Vec<Skill>,
    pub requirements: Vec<(i32, ProjectSkillRequirement)>,
    pub candidates: Vec<Candidate>,
    pub assignments: Mutex<Vec<ProjectAssignmentRow>>,
}

#[async_trait]
impl SkillInventory for MemoryInventory {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.clone())
    }

    async fn project_requirements(
        &self,
        project_id: i32,
    ) -> Result<Vec<ProjectSkillRequirement>, AppError> {
        Ok(self
            .requirements
            .iter()
            .filter(|(id, _)| *id == project_id)
            .map(|(_, requirement)| requirement.clone())
            .collect())
    }

    async fn active_candidates(&self) -> Result<Vec<Candidate>, AppError> {
        Ok(self.candidates.clone())
    }

    async fn assign_employees(
        &self,
        project_id: i32,
        employee_ids: &[EmployeeId],
        terms: &AssignmentTerms,
    ) -> Result<Vec<ProjectAssignmentRow>, AppError> {
        let mut assignments = self
            .assignments
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("assignment store poisoned")))?;

        let mut created = Vec::new();
        for &user_id in employee_ids {
            let exists = assignments
                .iter()
                .any(|a| a.project_id == project_id && a.user_id == user_id);
            if exists {
                continue;
            }
            let now = Utc::now();
            let row = ProjectAssignmentRow {
                id: assignments.len() as i32 + 1,
                project_id,
                user_id,
                role: terms.role.clone(),
                allocation_percentage: terms.allocation_percentage,
                start_date: now.date_naive(),
                created_at: now,
                updated_at: now,
            };
            assignments.push(row.clone());
            created.push(row);
        }
        Ok(created)
    }
}
