// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Selects the recipe store backend and parses HTTP, storage, and timing options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Environment-based configuration, loaded once at startup.
//!
//! The store backend is chosen here and never again: `PANTRY_STORE` picks it
//! explicitly, otherwise the presence of either hosted-backend variable selects
//! the remote store and their absence selects the local one. A remote store
//! with a missing URL or key is a fatal configuration error.

use pantry_core::constants::{env_keys, storage};
use pantry_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Default request timeout in seconds
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Which persistence backend holds saved recipes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// One JSON document per user on the local filesystem
    Local,
    /// Hosted `recipes` table reached over REST
    Remote,
}

impl StoreBackend {
    /// Parse an explicit backend selection
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for anything other than `local` or `remote`
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" | "supabase" => Ok(Self::Remote),
            other => Err(AppError::config_invalid(format!(
                "{} must be 'local' or 'remote', got '{other}'",
                env_keys::PANTRY_STORE
            ))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Connection settings for the hosted backend
#[derive(Clone)]
pub struct RemoteStoreConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`
    pub project_url: Url,
    /// Public (anon) API key
    pub anon_key: String,
}

impl fmt::Debug for RemoteStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteStoreConfig")
            .field("project_url", &self.project_url.as_str())
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

/// Store selection plus the settings that backend needs
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Local JSON documents under `data_dir`
    Local {
        /// Directory holding one document per user
        data_dir: PathBuf,
    },
    /// Hosted backend
    Remote(RemoteStoreConfig),
}

impl StoreConfig {
    /// Backend this configuration selects
    #[must_use]
    pub const fn backend(&self) -> StoreBackend {
        match self {
            Self::Local { .. } => StoreBackend::Local,
            Self::Remote(_) => StoreBackend::Remote,
        }
    }
}

/// Shared HTTP client timeouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Saved-recipe store selection
    pub store: StoreConfig,
    /// HTTP client timeouts for the remote store
    pub http_client: HttpClientConfig,
    /// Cosmetic delay applied before a generated recipe is returned
    pub synthesis_delay: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the remote store is selected without both
    /// hosted-backend variables, and `ConfigInvalid` for unparsable values.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as absent.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = get(env_keys::ENVIRONMENT)
            .map_or_else(Environment::default, |v| Environment::from_str_or_default(&v));

        let store = load_store_config(&get)?;
        debug!(backend = %store.backend(), "Resolved recipe store backend");

        let http_client = HttpClientConfig {
            timeout_secs: parse_u64(&get, env_keys::HTTP_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_u64(
                &get,
                env_keys::HTTP_CONNECT_TIMEOUT_SECS,
                DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let synthesis_delay =
            Duration::from_millis(parse_u64(&get, env_keys::SYNTHESIS_DELAY_MS, 0)?);

        Ok(Self {
            environment,
            store,
            http_client,
            synthesis_delay,
        })
    }

    /// Short human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.store {
            StoreConfig::Local { data_dir } => format!(
                "environment={} store=local data_dir={}",
                self.environment,
                data_dir.display()
            ),
            StoreConfig::Remote(remote) => format!(
                "environment={} store=remote project_url={}",
                self.environment, remote.project_url
            ),
        }
    }
}

fn load_store_config<G>(get: &G) -> AppResult<StoreConfig>
where
    G: Fn(&str) -> Option<String>,
{
    let project_url = get(env_keys::SUPABASE_PROJECT_URL);
    let anon_key = get(env_keys::SUPABASE_ANON_KEY);

    let backend = match get(env_keys::PANTRY_STORE) {
        Some(explicit) => StoreBackend::parse(&explicit)?,
        None if project_url.is_some() || anon_key.is_some() => StoreBackend::Remote,
        None => StoreBackend::Local,
    };

    match backend {
        StoreBackend::Local => Ok(StoreConfig::Local {
            data_dir: get(env_keys::PANTRY_DATA_DIR)
                .map_or_else(default_data_dir, PathBuf::from),
        }),
        StoreBackend::Remote => {
            let raw_url =
                project_url.ok_or_else(|| AppError::config_missing(env_keys::SUPABASE_PROJECT_URL))?;
            let anon_key =
                anon_key.ok_or_else(|| AppError::config_missing(env_keys::SUPABASE_ANON_KEY))?;
            Ok(StoreConfig::Remote(RemoteStoreConfig {
                project_url: parse_project_url(&raw_url)?,
                anon_key,
            }))
        }
    }
}

/// Validate the hosted backend URL
///
/// # Errors
///
/// Returns `ConfigInvalid` when the value is not an absolute http(s) URL
pub fn parse_project_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        AppError::config_invalid(format!(
            "{} is not a valid URL: {e}",
            env_keys::SUPABASE_PROJECT_URL
        ))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::config_invalid(format!(
            "{} must use http or https, got '{scheme}'",
            env_keys::SUPABASE_PROJECT_URL
        ))),
    }
}

/// Platform data directory for local recipe documents
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{}", storage::APP_DATA_DIR_NAME)),
        |dir| dir.join(storage::APP_DATA_DIR_NAME),
    )
}

fn parse_u64<G>(get: &G, key: &str, default: u64) -> AppResult<u64>
where
    G: Fn(&str) -> Option<String>,
{
    get(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|_| AppError::config_invalid(format!("Invalid {key} value: '{raw}'")))
    })
}
