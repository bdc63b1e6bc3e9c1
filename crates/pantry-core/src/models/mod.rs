// ABOUTME: Core data models shared by the synthesizer, stores, and session
// ABOUTME: Re-exports preference option sets, recipe types, and the user identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

/// Closed preference option sets
pub mod preferences;
/// Recipe inputs, generated recipes, and saved entries
pub mod recipe;
/// Signed-in user identity
pub mod user;

pub use preferences::{
    CookingTool, CuisineStyle, DietaryNeed, MealType, SkillLevel, TimeAllotment,
};
pub use recipe::{
    GeneratedRecipe, RecipeInputs, RecipeMetadata, RecipeStatus, SavedRecipe, StatusCounts,
};
pub use user::{display_name_from_email, User};
