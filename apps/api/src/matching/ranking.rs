use tracing::debug;

use crate::matching::models::{Candidate, MatchResult, ProjectSkillRequirement};
use crate::matching::reasoning::reason_for;
use crate::matching::scoring::score_candidate;

pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Scores every candidate against the project's requirements and returns the
/// best `limit` matches, highest score first.
///
/// The sort is stable: candidates with equal scores keep their input order.
pub fn rank_candidates(
    candidates: &[Candidate],
    project_skills: &[ProjectSkillRequirement],
    limit: usize,
) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = candidates
        .iter()
        .map(|candidate| {
            let score = score_candidate(&candidate.skills, project_skills);
            let reasoning = reason_for(
                score.match_score,
                score.matched_skills.len(),
                score.missing_skills.len(),
            );
            MatchResult {
                employee_id: candidate.id,
                employee_name: candidate.name.clone(),
                match_score: score.match_score,
                matched_skills: score.matched_skills,
                missing_skills: score.missing_skills,
                skill_gaps: score.skill_gaps,
                reasoning,
                exceeds_requirements: score.exceeds_requirements,
                data_warnings: score.data_warnings,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(limit);

    debug!(
        candidates = candidates.len(),
        requirements = project_skills.len(),
        returned = matches.len(),
        "ranked candidates"
    );

    matches
}
