use std::net::SocketAddr;

const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_TRENDING_TTL_SECS: i64 = 300;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_LEVEL: &str = "info";
/// Thirty days. Longer lifetimes are rejected rather than silently clamped.
pub const MAX_TRENDING_TTL_SECS: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub news_api_key: Option<String>,
    pub news_api_url: String,
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    pub trending_ttl_secs: i64,
    pub db_max_connections: u32,
    pub log_level: String,
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup instead of the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Config {
            db_url,
            news_api_key: lookup("NEWS_API_KEY").filter(|key| !key.is_empty()),
            news_api_url: lookup("NEWS_API_URL")
                .unwrap_or_else(|| DEFAULT_NEWS_API_URL.to_string()),
            bind_addr: parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            trending_ttl_secs: parse_trending_ttl(&lookup)?,
            db_max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                Some(DEFAULT_DB_MAX_CONNECTIONS),
            )?,
            log_level: lookup("LOG_LEVEL")
                .map(|level| level.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

/// `0` disables expiry; negative or oversized lifetimes are refused.
fn parse_trending_ttl<F>(lookup: &F) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let key = "TRENDING_CACHE_TTL_SECS";
    let ttl = parse_or(lookup, key, Some(DEFAULT_TRENDING_TTL_SECS))?;
    if !(0..=MAX_TRENDING_TTL_SECS).contains(&ttl) {
        return Err(ConfigError::Invalid {
            key,
            value: ttl.to_string(),
        });
    }
    Ok(ttl)
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => default.ok_or(ConfigError::Missing(key)),
    }
}
