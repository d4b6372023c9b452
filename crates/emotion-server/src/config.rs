//! Process configuration read once from environment variables.
//!
//! - `HUGGINGFACE_API_KEY`: inference credential (required)
//! - `PORT`: server listen port (default: "5000")
//! - `HOST`: bind address (default: "0.0.0.0")
//! - `SENTIMENT_MODEL`: model identifier (default: [`DEFAULT_MODEL`])
//! - `HF_INFERENCE_URL`: inference base URL (default: [`DEFAULT_INFERENCE_URL`])
//! - `CORS_ALLOWED_ORIGINS`: comma-separated origin allow-list (default: any)

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "finiteautomata/bertweet-base-sentiment-analysis";
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Which origins the CORS layer lets through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, any method, any header.
    Permissive,
    /// Only the listed origins.
    AllowList(Vec<HeaderValue>),
}

/// Immutable server configuration.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub inference_url: String,
    pub host: String,
    pub port: u16,
    pub cors: CorsPolicy,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("HUGGINGFACE_API_KEY").ok_or(ConfigError::MissingCredential)?;

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let cors = match get("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_cors_origins(&raw)?,
            None => CorsPolicy::Permissive,
        };

        Ok(Config {
            api_key,
            model: get("SENTIMENT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            inference_url: get("HF_INFERENCE_URL")
                .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors,
        })
    }

    /// Socket address string the server binds to.
    ///
    /// IP literals are bracketed as needed (`::` becomes `[::]:5000`); other
    /// hosts are passed through for the resolver.
    pub fn bind_addr(&self) -> String {
        match self.host.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}

// Manual impl keeps the credential out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("inference_url", &self.inference_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors", &self.cors)
            .finish()
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsPolicy, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsPolicy::Permissive);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsPolicy::AllowList)
}
