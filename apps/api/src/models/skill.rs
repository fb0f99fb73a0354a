use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRow {
    pub id: i32,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectSkillRow {
    pub skill_id: i32,
    pub skill_name: String,
    pub required_level: String,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeRow {
    pub id: i32,
    pub name: String,
}

/// One row of the active-employee skill inventory, keyed by `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSkillRow {
    pub user_id: i32,
    pub skill_id: i32,
    pub skill_name: String,
    pub proficiency_level: String,
    pub years_experience: Option<i32>,
    pub certified: Option<bool>,
}
