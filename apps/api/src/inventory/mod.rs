//! Skill inventory — where the matcher's inputs come from and where chosen
//! matches are committed.
//!
//! `AppState` holds an `Arc<dyn SkillInventory>`. Production wires in
//! `PgSkillInventory`; handler tests use `MemoryInventory`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::models::{Candidate, EmployeeId, ProjectSkillRequirement, Skill};
use crate::models::assignment::ProjectAssignmentRow;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::MemoryInventory;
pub use postgres::PgSkillInventory;

/// Role and allocation given to employees assigned from a skill match.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentTerms {
    pub role: String,
    pub allocation_percentage: i32,
}

#[async_trait]
pub trait SkillInventory: Send + Sync {
    /// The skill catalog.
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    /// Requirements for one project, in catalog insertion order.
    async fn project_requirements(
        &self,
        project_id: i32,
    ) -> Result<Vec<ProjectSkillRequirement>, AppError>;

    /// Active employees with their skill inventories.
    async fn active_candidates(&self) -> Result<Vec<Candidate>, AppError>;

    /// Assigns employees to a project in one transaction. Employees already on
    /// the project are skipped; only newly created assignments are returned.
    async fn assign_employees(
        &self,
        project_id: i32,
        employee_ids: &[EmployeeId],
        terms: &AssignmentTerms,
    ) -> Result<Vec<ProjectAssignmentRow>, AppError>;
}
