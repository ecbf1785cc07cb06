use anyhow::{Context, Result};

const DEFAULT_MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_MAX_COMPARE_JOBS: usize = 20;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on resume text or uploaded file size.
    pub max_resume_bytes: usize,
    /// Upper bound on jobs per comparison request.
    pub max_compare_jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
            max_compare_jobs: DEFAULT_MAX_COMPARE_JOBS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_resume_bytes: parse_env("MAX_RESUME_BYTES", defaults.max_resume_bytes)?,
            max_compare_jobs: parse_env("MAX_COMPARE_JOBS", defaults.max_compare_jobs)?,
        })
    }
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
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
