use sqlx::PgPool;

use crate::scoring::ranker::Ranker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Ranker with its pluggable skill matcher. Keyword-only unless
    /// ENABLE_LLM_SKILL_MATCHING is set.
    pub ranker: Ranker,
}
