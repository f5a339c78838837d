use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Required only when `enable_llm_skill_matching` is set.
    pub anthropic_api_key: Option<String>,
    pub enable_llm_skill_matching: bool,
    /// Upper bound on in-flight skill-match calls per ranking request.
    pub skill_match_concurrency: usize,
    pub skill_match_timeout_secs: u64,
    pub llm_max_retries: u32,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let enable_llm_skill_matching = optional_env("ENABLE_LLM_SKILL_MATCHING")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let anthropic_api_key = optional_env("ANTHROPIC_API_KEY");
        if enable_llm_skill_matching && anthropic_api_key.is_none() {
            bail!("ANTHROPIC_API_KEY must be set when ENABLE_LLM_SKILL_MATCHING is enabled");
        }

        let skill_match_concurrency = parse_env("SKILL_MATCH_CONCURRENCY", 4_usize)?;
        if skill_match_concurrency == 0 {
            bail!("SKILL_MATCH_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key,
            enable_llm_skill_matching,
            skill_match_concurrency,
            skill_match_timeout_secs: parse_env("SKILL_MATCH_TIMEOUT_SECS", 15_u64)?,
            llm_max_retries: parse_env("LLM_MAX_RETRIES", 2_u32)?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10_u32)?,
            port: parse_env("PORT", 8080_u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
