//! Configuration module
//!
//! This module provides the server configuration: HTTP settings, database pool,
//! downloads directory and outbound source probing.

use std::env;

const DEFAULT_PORT: u16 = 8001;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const SOURCE_PROBE_TIMEOUT_SECS: u64 = 5;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
const DEFAULT_DOWNLOADS_DIR: &str = "/app/downloads";

/// Base HTTP configuration
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub environment: String,
    pub http_concurrency_limit: usize,
    pub max_request_body_bytes: usize,
}

/// Manga Slayer server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub base: BaseConfig,
    pub database_url: String,
    /// Root directory chapter folders are created under
    pub downloads_dir: String,
    /// Timeout for the HEAD request issued when a custom source is added
    pub source_probe_timeout_secs: u64,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServerConfig>);

impl Config {
    fn as_server(&self) -> &ServerConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_env(&self.as_server().base.environment)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = ServerConfig::from_vars(|key| env::var(key).ok())?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_server().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_server().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_server().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_server().base.environment
    }

    pub fn db_max_connections(&self) -> u32 {
        self.as_server().base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.as_server().base.db_timeout_seconds
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.as_server().base.http_concurrency_limit
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.as_server().base.max_request_body_bytes
    }

    pub fn database_url(&self) -> &str {
        &self.as_server().database_url
    }

    pub fn downloads_dir(&self) -> &str {
        &self.as_server().downloads_dir
    }

    pub fn source_probe_timeout_secs(&self) -> u64 {
        self.as_server().source_probe_timeout_secs
    }
}

fn is_production_env(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins_str = var("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        if is_production_env(&environment) && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base = BaseConfig {
            server_port: var("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            environment,
            http_concurrency_limit: var("HTTP_CONCURRENCY_LIMIT")
                .unwrap_or_else(|| HTTP_CONCURRENCY_LIMIT.to_string())
                .parse()
                .unwrap_or(HTTP_CONCURRENCY_LIMIT),
            max_request_body_bytes: var("MAX_REQUEST_BODY_BYTES")
                .unwrap_or_else(|| MAX_REQUEST_BODY_BYTES.to_string())
                .parse()
                .unwrap_or(MAX_REQUEST_BODY_BYTES),
        };

        let config = ServerConfig {
            base,
            database_url: var("SLAYER_DATABASE_URL")
                .or_else(|| var("DATABASE_URL"))
                .ok_or_else(|| anyhow::anyhow!("SLAYER_DATABASE_URL or DATABASE_URL must be set"))?,
            downloads_dir: var("DOWNLOADS_DIR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DOWNLOADS_DIR.to_string()),
            source_probe_timeout_secs: var("SOURCE_PROBE_TIMEOUT_SECS")
                .unwrap_or_else(|| SOURCE_PROBE_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(SOURCE_PROBE_TIMEOUT_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(self.database_url.starts_with("postgresql://")
            || self.database_url.starts_with("postgres://"))
        {
            return Err(anyhow::anyhow!(
                "SLAYER_DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.base.db_max_connections == 0 {
            return Err(anyhow::anyhow!("DB_MAX_CONNECTIONS must be greater than 0"));
        }

        if self.base.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!(
                "HTTP_CONCURRENCY_LIMIT must be greater than 0"
            ));
        }

        if self.source_probe_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "SOURCE_PROBE_TIMEOUT_SECS must be greater than 0"
            ));
        }

        Ok(())
    }
}
