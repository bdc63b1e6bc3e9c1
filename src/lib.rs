// ABOUTME: Main library entry point for the Pantry Chef recipe engine
// ABOUTME: Wires recipe synthesis, saved-recipe stores, sessions, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Pantry Chef
//!
//! Turns a list of ingredients on hand, plus optional cooking preferences,
//! into a structured recipe, and keeps a per-user collection of saved recipes
//! tagged "favorite" or "want to try".
//!
//! ## Architecture
//!
//! - **Synthesizer**: validation and template expansion, no I/O
//! - **Store**: saved-recipe persistence, either local JSON documents or the
//!   hosted `recipes` table
//! - **Session**: the signed-in user and their cached collection
//! - **Config**: environment-driven configuration
//!
//! Shared types (errors, models, constants) live in the `pantry_core` crate.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_chef::config::AppConfig;
//! use pantry_chef::session::RecipeSession;
//! use pantry_chef::store::Store;
//! use pantry_chef::synthesizer::RecipeSynthesizer;
//! use pantry_core::errors::AppResult;
//! use pantry_core::models::{RecipeInputs, RecipeMetadata, RecipeStatus, User};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let mut session = RecipeSession::new(Store::from_config(&config)?);
//!     session.sign_in(User::local("Ada", "ada@example.com")).await?;
//!
//!     let inputs = RecipeInputs::with_ingredients("chicken, rice");
//!     let recipe = RecipeSynthesizer::new().synthesize(&inputs)?;
//!     session
//!         .save(&recipe, RecipeStatus::Favorite, &RecipeMetadata::from_inputs(&inputs))
//!         .await?;
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Shared HTTP client for the hosted backend
pub mod http_client;

/// Logging configuration and structured store logging
pub mod logging;

/// Signed-in user and cached collection
pub mod session;

/// Saved-recipe persistence
pub mod store;

/// Recipe generation from ingredients and preferences
pub mod synthesizer;
