// ABOUTME: Shared HTTP client with connection pooling for hosted backend calls
// ABOUTME: Singleton configured once at startup with request and connect timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use crate::config::HttpClientConfig;
use pantry_core::errors::{AppError, AppResult};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

/// Configured timeouts for the shared client
static CLIENT_TIMEOUTS: OnceLock<HttpClientConfig> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record the shared client timeout configuration
///
/// Call once at startup before the remote store is built. Later calls are
/// ignored; without a call the defaults (30s request, 10s connect) apply.
pub fn initialize_shared_client(config: HttpClientConfig) {
    if CLIENT_TIMEOUTS.set(config).is_err() {
        warn!("Shared HTTP client already configured; ignoring new timeouts");
    }
}

/// Build a client with the given timeouts
///
/// # Errors
///
/// Returns `InternalError` if the TLS backend cannot be initialized
pub fn build_client(config: HttpClientConfig) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(concat!("pantry-chef/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e))
}

/// Get the shared HTTP client, building it on first use
///
/// # Errors
///
/// Returns `InternalError` if the client cannot be built
pub fn shared_client() -> AppResult<&'static Client> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(client);
    }
    let client = build_client(CLIENT_TIMEOUTS.get().copied().unwrap_or_default())?;
    Ok(SHARED_CLIENT.get_or_init(|| client))
}
