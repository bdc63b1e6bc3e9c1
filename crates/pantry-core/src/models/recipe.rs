// ABOUTME: Recipe data models for generation inputs, generated output, and saved entries
// ABOUTME: Defines RecipeInputs, GeneratedRecipe, SavedRecipe, RecipeStatus, and RecipeMetadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use super::preferences::{
    CookingTool, CuisineStyle, DietaryNeed, MealType, SkillLevel, TimeAllotment,
};
use crate::constants::recipe_defaults::{DEFAULT_ESTIMATED_TIME, DEFAULT_SERVINGS};
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Everything the user entered before asking for a recipe
///
/// Only `ingredients` is required; every preference may be left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInputs {
    /// Comma-separated main ingredients on hand
    pub ingredients: String,
    /// Comma-separated pantry extras; empty means "use the staples"
    #[serde(default)]
    pub additional_ingredients: String,
    /// Preferred cuisine
    #[serde(default)]
    pub cuisine_style: Option<CuisineStyle>,
    /// Meal occasion
    #[serde(default)]
    pub meal_type: Option<MealType>,
    /// Dietary requirement
    #[serde(default)]
    pub dietary_needs: Option<DietaryNeed>,
    /// Available equipment
    #[serde(default)]
    pub tools: Option<CookingTool>,
    /// Time budget
    #[serde(default)]
    pub time_allotment: Option<TimeAllotment>,
    /// Cooking skill
    #[serde(default)]
    pub skill_level: Option<SkillLevel>,
}

impl RecipeInputs {
    /// Inputs with only the main ingredients filled in
    pub fn with_ingredients(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            ..Self::default()
        }
    }
}

/// A recipe produced by the synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Display name
    pub name: String,
    /// One-paragraph pitch
    pub description: String,
    /// Ingredient lines with quantities
    pub ingredients: Vec<String>,
    /// Ordered cooking steps
    pub instructions: Vec<String>,
    /// Single chef's tip
    pub chefs_tip: String,
    /// Photography brief for an external image tool
    pub image_prompt: String,
}

/// How a saved recipe is filed in the user's collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeStatus {
    /// Cooked it, loved it
    Favorite,
    /// Bookmarked for later
    WantToTry,
}

impl RecipeStatus {
    /// Both statuses, in display order
    pub const ALL: [Self; 2] = [Self::Favorite, Self::WantToTry];

    /// Wire form used by both stores
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Favorite => "favorite",
            Self::WantToTry => "want-to-try",
        }
    }
}

impl fmt::Display for RecipeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "favorite" | "favourite" => Ok(Self::Favorite),
            "want-to-try" => Ok(Self::WantToTry),
            other => Err(AppError::invalid_input(format!(
                "Unknown recipe status '{other}', expected 'favorite' or 'want-to-try'"
            ))),
        }
    }
}

/// Extra fields recorded alongside a recipe when it is saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMetadata {
    /// Time estimate shown with the saved recipe
    pub estimated_time: Option<String>,
    /// Number of servings
    pub servings: Option<u32>,
    /// Cuisine label the recipe was generated for
    pub cuisine_style: Option<String>,
    /// Meal label the recipe was generated for
    pub meal_type: Option<String>,
    /// Dietary label the recipe was generated for
    pub dietary_needs: Option<String>,
}

impl Default for RecipeMetadata {
    fn default() -> Self {
        Self {
            estimated_time: Some(DEFAULT_ESTIMATED_TIME.to_owned()),
            servings: Some(DEFAULT_SERVINGS),
            cuisine_style: None,
            meal_type: None,
            dietary_needs: None,
        }
    }
}

impl RecipeMetadata {
    /// Derive save-time metadata from the inputs the recipe was generated from
    #[must_use]
    pub fn from_inputs(inputs: &RecipeInputs) -> Self {
        Self {
            estimated_time: Some(
                inputs
                    .time_allotment
                    .map_or(DEFAULT_ESTIMATED_TIME, |t| t.label())
                    .to_owned(),
            ),
            servings: Some(DEFAULT_SERVINGS),
            cuisine_style: inputs.cuisine_style.map(|c| c.label().to_owned()),
            meal_type: inputs.meal_type.map(|m| m.label().to_owned()),
            dietary_needs: inputs.dietary_needs.map(|d| d.label().to_owned()),
        }
    }
}

/// A generated recipe the user chose to keep
///
/// Field names match the remote `recipes` columns so the same shape is used
/// for local documents and remote rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// Opaque identifier assigned by the store
    pub id: String,
    /// The recipe content
    #[serde(flatten)]
    pub recipe: GeneratedRecipe,
    /// Collection tag
    pub status: RecipeStatus,
    /// Time estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Servings; read through [`SavedRecipe::servings_or_default`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Cuisine metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_style: Option<String>,
    /// Meal metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    /// Dietary metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_needs: Option<String>,
    /// When the recipe was saved
    pub created_at: DateTime<Utc>,
    /// Last status change, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SavedRecipe {
    /// Build a new entry from generated content and save-time metadata
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        recipe: GeneratedRecipe,
        status: RecipeStatus,
        metadata: RecipeMetadata,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            recipe,
            status,
            estimated_time: metadata.estimated_time,
            servings: metadata.servings,
            cuisine_style: metadata.cuisine_style,
            meal_type: metadata.meal_type,
            dietary_needs: metadata.dietary_needs,
            created_at,
            updated_at: None,
        }
    }

    /// Serving count, falling back to the default of 4
    #[must_use]
    pub fn servings_or_default(&self) -> u32 {
        self.servings.unwrap_or(DEFAULT_SERVINGS)
    }
}

/// Per-status totals of a saved collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Entries tagged favorite
    pub favorite: usize,
    /// Entries tagged want-to-try
    pub want_to_try: usize,
}

impl StatusCounts {
    /// Tally a collection
    pub fn tally<'a>(recipes: impl IntoIterator<Item = &'a SavedRecipe>) -> Self {
        recipes
            .into_iter()
            .fold(Self::default(), |mut counts, recipe| {
                match recipe.status {
                    RecipeStatus::Favorite => counts.favorite += 1,
                    RecipeStatus::WantToTry => counts.want_to_try += 1,
                }
                counts
            })
    }

    /// Total across both statuses
    #[must_use]
    pub const fn total(&self) -> usize {
        self.favorite + self.want_to_try
    }
}
