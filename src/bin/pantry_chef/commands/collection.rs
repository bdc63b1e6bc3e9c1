// ABOUTME: Saved-collection commands for the pantry-chef CLI
// ABOUTME: Lists, removes, and re-tags recipes belonging to the signed-in user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use pantry_chef::session::RecipeSession;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::RecipeStatus;
use tracing::warn;

use crate::helpers::display::{display_collection, display_saved_recipe};

/// Print the signed-in user's collection, optionally filtered by status
pub fn list(session: &RecipeSession, status: Option<RecipeStatus>) -> AppResult<()> {
    let user = session.current_user().ok_or_else(AppError::auth_required)?;
    let recipes = match status {
        Some(status) => session.recipes_with_status(status),
        None => session.recipes().iter().collect(),
    };
    display_collection(&user.name, &recipes, session.counts());
    Ok(())
}

/// Remove a saved recipe
pub async fn remove(session: &mut RecipeSession, id: &str) -> AppResult<()> {
    if !session.is_signed_in() {
        return Err(AppError::auth_required());
    }
    let Some(recipe) = session.find(id) else {
        warn!(recipe.id = %id, "No saved recipe with this id");
        println!("No saved recipe with id {id}");
        return Ok(());
    };
    let name = recipe.recipe.name.clone();
    session.remove(id).await?;
    println!("Removed \"{name}\" ({id})");
    Ok(())
}

/// Move a saved recipe to another status
pub async fn set_status(
    session: &mut RecipeSession,
    id: &str,
    status: RecipeStatus,
) -> AppResult<()> {
    let updated = session.update_status(id, status).await?;
    display_saved_recipe(&updated);
    Ok(())
}
