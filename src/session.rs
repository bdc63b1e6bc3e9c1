// ABOUTME: Per-user recipe session holding the signed-in user and their cached collection
// ABOUTME: Loads on sign-in, clears on sign-out, and keeps the cache in step with store writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! # Recipe Session
//!
//! A [`RecipeSession`] is the single owner of "who is signed in" and "what
//! they have saved". Mutations go to the store first; the cache changes only
//! after the store reports success, so a failed write leaves the cached
//! collection exactly as it was.

use crate::store::{ListOrder, RecipeStore, Store};
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{
    GeneratedRecipe, RecipeMetadata, RecipeStatus, SavedRecipe, StatusCounts, User,
};
use tracing::{debug, info, warn};

/// Signed-in user plus their saved recipes
#[derive(Debug)]
pub struct RecipeSession<S: RecipeStore = Store> {
    store: S,
    user: Option<User>,
    recipes: Vec<SavedRecipe>,
}

impl<S: RecipeStore> RecipeSession<S> {
    /// Signed-out session over `store`
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            user: None,
            recipes: Vec::new(),
        }
    }

    /// Backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The signed-in user, if any
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether someone is signed in
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Sign `user` in and load their collection
    ///
    /// The user stays signed in if loading fails; the collection is then
    /// empty until [`RecipeSession::refresh`] succeeds.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the collection cannot be listed
    pub async fn sign_in(&mut self, user: User) -> AppResult<()> {
        info!(user.id = %user.id, backend = %self.store.backend(), "Signing in");
        self.recipes.clear();
        self.user = Some(user);
        self.refresh().await
    }

    /// Forget the user and their cached collection
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user.id = %user.id, "Signed out");
        }
        self.recipes.clear();
    }

    /// Reload the collection from the store
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when signed out, or the store's error
    pub async fn refresh(&mut self) -> AppResult<()> {
        let user = self.user.as_ref().ok_or_else(AppError::auth_required)?;
        let recipes = self.store.list(user).await?;
        debug!(user.id = %user.id, count = recipes.len(), "Loaded saved recipes");
        self.recipes = recipes;
        Ok(())
    }

    /// Save a generated recipe under `status`
    ///
    /// Saving the same recipe twice produces two entries.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when signed out, or the store's error
    pub async fn save(
        &mut self,
        recipe: &GeneratedRecipe,
        status: RecipeStatus,
        metadata: &RecipeMetadata,
    ) -> AppResult<SavedRecipe> {
        let user = self.user.as_ref().ok_or_else(|| {
            warn!(recipe = %recipe.name, "Save attempted while signed out");
            AppError::auth_required()
        })?;
        let saved = self.store.save(user, recipe, status, metadata).await?;
        match self.store.list_order() {
            ListOrder::InsertionOrder => self.recipes.push(saved.clone()),
            ListOrder::NewestFirst => self.recipes.insert(0, saved.clone()),
        }
        Ok(saved)
    }

    /// Remove the entry with `id`
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when signed out, or the store's error
    pub async fn remove(&mut self, id: &str) -> AppResult<()> {
        let user = self.user.as_ref().ok_or_else(AppError::auth_required)?;
        self.store.remove(user, id).await?;
        self.recipes.retain(|recipe| recipe.id != id);
        Ok(())
    }

    /// Move the entry with `id` to `status`
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when signed out, `UnsupportedOperation` on the
    /// local store, or the store's error
    pub async fn update_status(&mut self, id: &str, status: RecipeStatus) -> AppResult<SavedRecipe> {
        let user = self.user.as_ref().ok_or_else(AppError::auth_required)?;
        let updated = self.store.update_status(user, id, status).await?;
        if let Some(cached) = self.recipes.iter_mut().find(|recipe| recipe.id == id) {
            *cached = updated.clone();
        }
        Ok(updated)
    }

    /// Cached collection in store order
    #[must_use]
    pub fn recipes(&self) -> &[SavedRecipe] {
        &self.recipes
    }

    /// Cached entries tagged `status`
    #[must_use]
    pub fn recipes_with_status(&self, status: RecipeStatus) -> Vec<&SavedRecipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.status == status)
            .collect()
    }

    /// Per-status totals of the cached collection
    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.recipes)
    }

    /// Cached entry with `id`
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&SavedRecipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}
