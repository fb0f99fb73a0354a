use std::sync::Arc;

use crate::config::Config;
use crate::inventory::SkillInventory;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill catalog, employee inventories and project assignments. Default: PgSkillInventory.
    pub inventory: Arc<dyn SkillInventory>,
}
