/// One-line summary of a match, bucketed by score. First matching bucket wins.
pub fn reason_for(match_score: u32, matched_count: usize, missing_count: usize) -> String {
    if match_score >= 90 {
        format!(
            "Excellent match! Employee has {matched_count} required skills and meets all requirements."
        )
    } else if match_score >= 70 {
        format!(
            "Good match. Employee has {matched_count} required skills but is missing {missing_count} skills."
        )
    } else if match_score >= 50 {
        format!(
            "Moderate match. Employee has {matched_count} required skills but missing {missing_count} critical skills."
        )
    } else {
        format!(
            "Weak match. Employee only has {matched_count} required skills and is missing {missing_count} skills."
        )
    }
}
