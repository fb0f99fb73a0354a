use anyhow::{bail, Context, Result};

use crate::inventory::AssignmentTerms;
use crate::matching::ranking::DEFAULT_MATCH_LIMIT;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Number of candidates returned by a skill match when the caller gives no limit.
    pub match_limit: usize,
    pub assignment_role: String,
    pub assignment_allocation_percent: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 10)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_limit: parse_env("SKILL_MATCH_LIMIT", DEFAULT_MATCH_LIMIT)?,
            assignment_role: std::env::var("ASSIGNMENT_ROLE")
                .unwrap_or_else(|_| "Developer".to_string()),
            assignment_allocation_percent: parse_env("ASSIGNMENT_ALLOCATION_PERCENT", 50)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.match_limit == 0 {
            bail!("SKILL_MATCH_LIMIT must be at least 1");
        }
        if !(1..=100).contains(&self.assignment_allocation_percent) {
            bail!("ASSIGNMENT_ALLOCATION_PERCENT must be between 1 and 100");
        }
        if self.assignment_role.trim().is_empty() {
            bail!("ASSIGNMENT_ROLE cannot be empty");
        }
        Ok(())
    }

    pub fn assignment_terms(&self) -> AssignmentTerms {
        AssignmentTerms {
            role: self.assignment_role.clone(),
            allocation_percentage: self.assignment_allocation_percent,
        }
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/skillmatch".to_string(),
            database_max_connections: 1,
            port: 8080,
            rust_log: "debug".to_string(),
            match_limit: DEFAULT_MATCH_LIMIT,
            assignment_role: "Developer".to_string(),
            assignment_allocation_percent: 50,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
