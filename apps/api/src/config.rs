use anyhow::{Context, Result};

/// Search tuning defaults, overridable via environment.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 2500;
pub const MAX_SEARCH_RADIUS_M: u32 = 5000;
pub const MIN_SEARCH_RADIUS_M: u32 = 100;
pub const DEFAULT_RESULT_LIMIT: u32 = 100;

/// Application configuration loaded from environment variables.
/// Only the places-search key is required; the LLM and details keys are
/// optional capabilities with deterministic fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    pub geoapify_api_key: String,
    pub anthropic_api_key: Option<String>,
    pub google_places_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub default_search_radius_m: u32,
    pub max_search_radius_m: u32,
    pub default_result_limit: u32,
    /// Prefer LLM filtering whenever the key is configured.
    pub use_llm_filtering: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            geoapify_api_key: require_env("GEOAPIFY_API_KEY")?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            google_places_api_key: optional_env("GOOGLE_PLACES_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_search_radius_m: parse_env("DEFAULT_SEARCH_RADIUS_M", DEFAULT_SEARCH_RADIUS_M)?,
            max_search_radius_m: parse_env("MAX_SEARCH_RADIUS_M", MAX_SEARCH_RADIUS_M)?,
            default_result_limit: parse_env("DEFAULT_RESULT_LIMIT", DEFAULT_RESULT_LIMIT)?,
            use_llm_filtering: std::env::var("USE_LLM_FILTERING")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset or empty optional keys disable the capability cleanly.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env(key: &str, default: u32) -> Result<u32> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u32>()
            .with_context(|| format!("'{key}' must be a positive integer")),
        Err(_) => Ok(default),
    }
}
