// ABOUTME: Saved-recipe store abstraction with local-document and hosted-table backends
// ABOUTME: One async trait, two implementations, selected once at startup by the factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! # Saved-Recipe Store
//!
//! Every operation is scoped to the [`User`] passed in; there is no way to
//! read or change another user's entries through this interface.
//!
//! - [`local::LocalRecipeStore`]: one JSON document per user email, read in
//!   full and rewritten in full on every mutation.
//! - [`remote::RemoteRecipeStore`]: the hosted `recipes` table, filtered by
//!   owner id on every call.
//! - [`factory::Store`]: the backend chosen from configuration.

pub mod factory;
pub mod local;
pub mod remote;

pub use crate::config::StoreBackend;
pub use factory::Store;
pub use local::LocalRecipeStore;
pub use remote::RemoteRecipeStore;

use async_trait::async_trait;
use pantry_core::errors::AppResult;
use pantry_core::models::{GeneratedRecipe, RecipeMetadata, RecipeStatus, SavedRecipe, User};

/// Order in which [`RecipeStore::list`] returns entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Oldest first, as saved
    InsertionOrder,
    /// Most recently created first
    NewestFirst,
}

/// Persistence for a user's saved recipes
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Which backend this is
    fn backend(&self) -> StoreBackend;

    /// Order of [`RecipeStore::list`] results
    fn list_order(&self) -> ListOrder;

    /// All entries owned by `user`
    async fn list(&self, user: &User) -> AppResult<Vec<SavedRecipe>>;

    /// Insert a new entry; never overwrites or deduplicates
    async fn save(
        &self,
        user: &User,
        recipe: &GeneratedRecipe,
        status: RecipeStatus,
        metadata: &RecipeMetadata,
    ) -> AppResult<SavedRecipe>;

    /// Delete the entry with `id` if `user` owns it
    async fn remove(&self, user: &User, id: &str) -> AppResult<()>;

    /// Change the status of an owned entry in place
    async fn update_status(
        &self,
        user: &User,
        id: &str,
        status: RecipeStatus,
    ) -> AppResult<SavedRecipe>;
}
