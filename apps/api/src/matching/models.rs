use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::{LevelValue, PriorityValue};

pub type SkillId = i32;
pub type EmployeeId = i32;

/// Catalog entry. Purely descriptive; everything else refers to skills by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub category: String,
}

/// One employee's claim on one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSkill {
    pub skill_id: SkillId,
    pub skill_name: String,
    pub proficiency_level: LevelValue,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub certified: bool,
}

/// One project's need for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSkillRequirement {
    pub skill_id: SkillId,
    pub skill_name: String,
    pub required_level: LevelValue,
    pub priority: PriorityValue,
}

/// An employee under consideration for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: EmployeeId,
    pub name: String,
    pub skills: Vec<EmployeeSkill>,
}

/// A matched skill where the employee's level is below the required one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub required: String,
    pub available: String,
}

/// Outcome of scoring one candidate against one project's requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Clamped to 0..=100.
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
    /// Bonus stacking pushed the raw ratio past 100 before clamping.
    pub exceeds_requirements: bool,
    /// Data-quality findings: unrecognized vocabulary, duplicate skill records.
    pub data_warnings: Vec<String>,
}

/// Ranked, caller-facing match for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
    pub reasoning: String,
    pub exceeds_requirements: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_warnings: Vec<String>,
}
