// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_IMGPROXY_URL: &str = "https://imgproxy.example.com";
pub const PROPERTY_IMAGES_BUCKET: &str = "property-images";
/// Upper bound for `MAX_IMAGES`; upload bodies are buffered whole.
pub const MAX_IMAGES_LIMIT: usize = 20;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the server needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_path: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub imgproxy_url: String,
    pub images_bucket: String,
    pub max_images: usize,
    pub submit_delay: Duration,
    pub session_ttl_secs: i64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let supabase_url = get("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let supabase_anon_key =
            get("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), "127.0.0.1:3000".parse().ok())?;
        let max_images: usize = parse_or("MAX_IMAGES", get("MAX_IMAGES"), Some(10))?;
        if !(1..=MAX_IMAGES_LIMIT).contains(&max_images) {
            return Err(ConfigError::Invalid {
                name: "MAX_IMAGES",
                value: max_images.to_string(),
            });
        }
        let delay_ms: u64 = parse_or("SUBMIT_DELAY_MS", get("SUBMIT_DELAY_MS"), Some(1000))?;
        let session_ttl_secs = parse_or(
            "SESSION_TTL_SECS",
            get("SESSION_TTL_SECS"),
            Some(60 * 60 * 24 * 7),
        )?;

        Ok(Self {
            bind_addr,
            database_path: get("DATABASE_PATH").unwrap_or_else(|| "rentals.sqlite3".to_string()),
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_anon_key,
            imgproxy_url: get("IMGPROXY_URL").unwrap_or_else(|| DEFAULT_IMGPROXY_URL.to_string()),
            images_bucket: PROPERTY_IMAGES_BUCKET.to_string(),
            max_images,
            submit_delay: Duration::from_millis(delay_ms),
            session_ttl_secs,
            log_level: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}
