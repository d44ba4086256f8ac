//! Configuration module for the school-site backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

/// Origin of the local frontend dev server, always allowed.
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:3000";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON document holding all collections
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Origins permitted to make cross-origin requests
    pub allowed_origins: Vec<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ParseIntError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("DB_PATH")
            .unwrap_or_else(|_| "./db.json".to_string())
            .into();

        let port: u16 = match env::var("PORT") {
            Ok(port) => port.trim().parse()?,
            Err(_) => 3001,
        };
        let bind_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

        let allowed_origins = parse_allowed_origins(env::var("CORS_ORIGIN").ok().as_deref());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("LOG_FORMAT") {
            Ok(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            db_path,
            bind_addr,
            allowed_origins,
            log_level,
            log_format,
        })
    }
}

/// Build the origin allow-list: the local dev origin followed by every
/// non-empty entry of the comma-separated `extra` list.
pub fn parse_allowed_origins(extra: Option<&str>) -> Vec<String> {
    let mut origins = vec![LOCAL_DEV_ORIGIN.to_string()];
    if let Some(extra) = extra {
        origins.extend(
            extra
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string),
        );
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("DB_PATH");
        env::remove_var("PORT");
        env::remove_var("CORS_ORIGIN");
        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_FORMAT");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./db.json"));
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3001");
        assert_eq!(config.allowed_origins, vec![LOCAL_DEV_ORIGIN.to_string()]);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_parse_allowed_origins_trims_and_skips_empty() {
        let origins =
            parse_allowed_origins(Some(" https://school.example , ,https://admin.example"));
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://school.example".to_string(),
                "https://admin.example".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_allowed_origins_none() {
        assert_eq!(parse_allowed_origins(None), vec![LOCAL_DEV_ORIGIN]);
    }
}
