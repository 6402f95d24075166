use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_CAREER_TABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/careers.json");
const DEFAULT_SALARY_TABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/salaries.json");
const DEFAULT_ROADMAP_TABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/roadmaps.json");

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a number does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub career_table_path: PathBuf,
    pub salary_table_path: PathBuf,
    pub roadmap_table_path: PathBuf,
    pub llm_timeout_secs: u64,
    pub session_capacity: usize,
    pub session_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            career_table_path: path_env("CAREER_TABLE_PATH", DEFAULT_CAREER_TABLE),
            salary_table_path: path_env("SALARY_TABLE_PATH", DEFAULT_SALARY_TABLE),
            roadmap_table_path: path_env("ROADMAP_TABLE_PATH", DEFAULT_ROADMAP_TABLE),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
            session_capacity: parse_env("SESSION_CAPACITY", 1024)?,
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 3600)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn path_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}
