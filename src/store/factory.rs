// ABOUTME: Store factory choosing the local or remote recipe store from configuration
// ABOUTME: Wraps both backends in one enum that forwards every trait call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use super::{ListOrder, LocalRecipeStore, RecipeStore, RemoteRecipeStore, StoreBackend};
use crate::config::{AppConfig, StoreConfig};
use async_trait::async_trait;
use pantry_core::errors::AppResult;
use pantry_core::models::{GeneratedRecipe, RecipeMetadata, RecipeStatus, SavedRecipe, User};
use tracing::info;

/// Store instance that delegates to the configured backend
#[derive(Debug)]
pub enum Store {
    /// JSON documents on disk
    Local(LocalRecipeStore),
    /// Hosted `recipes` table
    Remote(RemoteRecipeStore),
}

impl Store {
    /// Build the backend named by the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the remote project URL cannot be used as a base
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::from_store_config(&config.store)
    }

    /// Build a backend from the store section alone
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the remote project URL cannot be used as a base
    pub fn from_store_config(config: &StoreConfig) -> AppResult<Self> {
        let store = match config {
            StoreConfig::Local { data_dir } => Self::Local(LocalRecipeStore::new(data_dir)),
            StoreConfig::Remote(remote) => Self::Remote(RemoteRecipeStore::new(remote)?),
        };
        info!(backend = store.backend_info(), "Recipe store initialized");
        Ok(store)
    }

    /// Descriptive name of the active backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Local(_) => "Local JSON documents",
            Self::Remote(_) => "Hosted recipes table",
        }
    }
}

#[async_trait]
impl RecipeStore for Store {
    fn backend(&self) -> StoreBackend {
        match self {
            Self::Local(store) => store.backend(),
            Self::Remote(store) => store.backend(),
        }
    }

    fn list_order(&self) -> ListOrder {
        match self {
            Self::Local(store) => store.list_order(),
            Self::Remote(store) => store.list_order(),
        }
    }

    async fn list(&self, user: &User) -> AppResult<Vec<SavedRecipe>> {
        match self {
            Self::Local(store) => store.list(user).await,
            Self::Remote(store) => store.list(user).await,
        }
    }

    async fn save(
        &self,
        user: &User,
        recipe: &GeneratedRecipe,
        status: RecipeStatus,
        metadata: &RecipeMetadata,
    ) -> AppResult<SavedRecipe> {
        match self {
            Self::Local(store) => store.save(user, recipe, status, metadata).await,
            Self::Remote(store) => store.save(user, recipe, status, metadata).await,
        }
    }

    async fn remove(&self, user: &User, id: &str) -> AppResult<()> {
        match self {
            Self::Local(store) => store.remove(user, id).await,
            Self::Remote(store) => store.remove(user, id).await,
        }
    }

    async fn update_status(
        &self,
        user: &User,
        id: &str,
        status: RecipeStatus,
    ) -> AppResult<SavedRecipe> {
        match self {
            Self::Local(store) => store.update_status(user, id, status).await,
            Self::Remote(store) => store.update_status(user, id, status).await,
        }
    }
}
