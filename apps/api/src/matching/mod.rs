// Skill matching: ranks employees against a project's required skills.
// Pure and synchronous; callers load the skill data and own any assignment side effects.

pub mod models;
pub mod ranking;
pub mod reasoning;
pub mod scoring;
pub mod vocabulary;
