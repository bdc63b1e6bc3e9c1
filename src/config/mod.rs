// ABOUTME: Configuration module for startup settings
// ABOUTME: Re-exports environment-driven application and store configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Configuration for Pantry Chef
//!
//! - **Environment**: application, store, and HTTP settings read from the
//!   process environment

/// Environment and store configuration
pub mod environment;

pub use environment::{
    AppConfig, Environment, HttpClientConfig, RemoteStoreConfig, StoreBackend, StoreConfig,
};
