//! Per-candidate skill scoring.
//!
//! Each requirement contributes its priority weight to the maximum score and,
//! when the employee has the skill, a level-adjusted share of that weight to the
//! total:
//!
//! 1. meets the required level → weight × 1.0 (× 1.1 when exceeding it)
//! 2. below it → weight × max(0, 1 − 0.3 × rank gap)
//! 3. certified → × 1.05
//! 4. ≥ 5 years → × 1.10, else ≥ 3 years → × 1.05
//!
//! match_score = round(total / max × 100), clamped to 0 – 100. The bonuses compound,
//! so the raw ratio can exceed 100; that case is flagged via `exceeds_requirements`.

use std::collections::HashMap;

use tracing::warn;

use crate::matching::models::{
    EmployeeSkill, ProjectSkillRequirement, ScoreResult, SkillGap, SkillId,
};
use crate::matching::vocabulary::{LevelValue, PriorityValue, Vocab};

const EXCEEDS_LEVEL_BONUS: f64 = 1.1;
const GAP_PENALTY_PER_RANK: f64 = 0.3;
const CERTIFIED_BONUS: f64 = 1.05;
const SENIOR_YEARS: u32 = 5;
const SENIOR_BONUS: f64 = 1.10;
const EXPERIENCED_YEARS: u32 = 3;
const EXPERIENCED_BONUS: f64 = 1.05;

/// Scores one employee's skill inventory against a project's requirements.
///
/// Duplicate `skill_id` records resolve last-write-wins. That is a data-integrity
/// problem upstream, so each duplicate is logged and reported in `data_warnings`.
pub fn score_candidate(
    employee_skills: &[EmployeeSkill],
    project_skills: &[ProjectSkillRequirement],
) -> ScoreResult {
    if project_skills.is_empty() {
        return ScoreResult {
            match_score: 100,
            matched_skills: vec![],
            missing_skills: vec![],
            skill_gaps: vec![],
            exceeds_requirements: false,
            data_warnings: vec![],
        };
    }

    let mut data_warnings = Vec::new();

    let mut by_skill: HashMap<SkillId, &EmployeeSkill> =
        HashMap::with_capacity(employee_skills.len());
    for skill in employee_skills {
        if by_skill.insert(skill.skill_id, skill).is_some() {
            warn!(
                skill_id = skill.skill_id,
                "duplicate employee skill record; keeping the last one"
            );
            data_warnings.push(format!(
                "duplicate skill record for skill_id {} ({}); last record wins",
                skill.skill_id, skill.skill_name
            ));
        }
    }

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    let mut skill_gaps = Vec::new();

    let mut total_score = 0.0_f64;
    let mut max_score = 0.0_f64;

    for requirement in project_skills {
        flag_priority(&requirement.priority, &requirement.skill_name, &mut data_warnings);
        flag_level(
            &requirement.required_level,
            "required level",
            &requirement.skill_name,
            &mut data_warnings,
        );
        max_score += requirement.priority.weight();

        let Some(employee_skill) = by_skill.get(&requirement.skill_id) else {
            missing_skills.push(requirement.skill_name.clone());
            continue;
        };

        flag_level(
            &employee_skill.proficiency_level,
            "proficiency level",
            &requirement.skill_name,
            &mut data_warnings,
        );
        matched_skills.push(requirement.skill_name.clone());
        total_score += per_skill_score(employee_skill, requirement);

        if employee_skill.proficiency_level.rank() < requirement.required_level.rank() {
            skill_gaps.push(SkillGap {
                skill: requirement.skill_name.clone(),
                required: requirement.required_level.to_string(),
                available: employee_skill.proficiency_level.to_string(),
            });
        }
    }

    let raw_score = if max_score > 0.0 {
        (total_score / max_score * 100.0).round()
    } else {
        0.0
    };

    ScoreResult {
        match_score: raw_score.clamp(0.0, 100.0) as u32,
        matched_skills,
        missing_skills,
        skill_gaps,
        exceeds_requirements: raw_score > 100.0,
        data_warnings,
    }
}

/// Contribution of one matched skill, before normalisation by the maximum score.
pub fn per_skill_score(
    employee_skill: &EmployeeSkill,
    requirement: &ProjectSkillRequirement,
) -> f64 {
    let weight = requirement.priority.weight();
    let employee_rank = employee_skill.proficiency_level.rank();
    let required_rank = requirement.required_level.rank();

    let mut score = if employee_rank >= required_rank {
        if employee_rank > required_rank {
            weight * EXCEEDS_LEVEL_BONUS
        } else {
            weight
        }
    } else {
        let gap = f64::from(required_rank - employee_rank);
        weight * (1.0 - gap * GAP_PENALTY_PER_RANK).max(0.0)
    };

    if employee_skill.certified {
        score *= CERTIFIED_BONUS;
    }

    if employee_skill.years_experience >= SENIOR_YEARS {
        score *= SENIOR_BONUS;
    } else if employee_skill.years_experience >= EXPERIENCED_YEARS {
        score *= EXPERIENCED_BONUS;
    }

    score
}

fn flag_level(level: &LevelValue, role: &str, skill_name: &str, warnings: &mut Vec<String>) {
    if let Vocab::Unrecognized(raw) = level {
        warn!(
            skill = skill_name,
            value = %raw,
            "unrecognized {role}; ranking it below beginner"
        );
        let message =
            format!("unrecognized {role} '{raw}' for {skill_name}; treated as below beginner");
        if !warnings.contains(&message) {
            warnings.push(message);
        }
    }
}

fn flag_priority(priority: &PriorityValue, skill_name: &str, warnings: &mut Vec<String>) {
    if let Vocab::Unrecognized(raw) = priority {
        warn!(
            skill = skill_name,
            value = %raw,
            "unrecognized priority; weighting it as nice_to_have"
        );
        let message =
            format!("unrecognized priority '{raw}' for {skill_name}; weighted as nice_to_have");
        if !warnings.contains(&message) {
            warnings.push(message);
        }
    }
}
