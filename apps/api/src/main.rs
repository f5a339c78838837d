mod config;
mod db;
mod errors;
mod feedback;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod scoring;
mod shortlist;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::ranker::Ranker;
use crate::scoring::skills::{LlmSkillMatcher, SkillScorer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Shortlist API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;

    // Initialize skill matcher (keyword overlap unless ENABLE_LLM_SKILL_MATCHING)
    let skill_scorer = build_skill_scorer(&config)?;
    info!(
        "Skill matching backend: {:?} (concurrency {}, timeout {}s)",
        skill_scorer.backend(),
        config.skill_match_concurrency,
        config.skill_match_timeout_secs
    );

    let state = AppState {
        db,
        ranker: Ranker::new(skill_scorer, config.skill_match_concurrency),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the recruiter UI domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_skill_scorer(config: &Config) -> Result<SkillScorer> {
    let timeout = Duration::from_secs(config.skill_match_timeout_secs);
    match (&config.anthropic_api_key, config.enable_llm_skill_matching) {
        (Some(key), true) => {
            let llm = LlmClient::new(key.clone(), config.llm_max_retries)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(SkillScorer::new(Arc::new(LlmSkillMatcher::new(llm)), timeout))
        }
        _ => Ok(SkillScorer::keyword_only()),
    }
}
