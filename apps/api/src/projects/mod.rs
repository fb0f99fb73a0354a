// Project staffing: skill-match ranking and team assignment for a project.

pub mod handlers;
