// ABOUTME: Recipe synthesizer turning ingredients and preferences into a structured recipe
// ABOUTME: Validates input, picks a name, and fills fixed templates; no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! # Recipe Synthesizer
//!
//! Deterministic template expansion plus one random pick for the recipe name.
//! The pick goes through a [`NameChooser`] so tests can pin it.
//!
//! ```rust
//! use pantry_chef::synthesizer::{FixedChooser, RecipeSynthesizer};
//! use pantry_core::models::RecipeInputs;
//!
//! let synthesizer = RecipeSynthesizer::with_chooser(FixedChooser(3));
//! let recipe = synthesizer
//!     .synthesize(&RecipeInputs::with_ingredients("chicken, rice"))
//!     .unwrap();
//! assert_eq!(recipe.name, "Golden Chicken Creation");
//! assert_eq!(recipe.instructions.len(), 7);
//! ```

/// Name selection capability
pub mod chooser;
/// Ingredient parsing and quantities
pub mod ingredients;
/// Fixed text templates
pub mod templates;

pub use chooser::{FixedChooser, NameChooser, RandomChooser, SeededChooser};

use crate::logging::AppLogger;
use ingredients::{ingredient_lines, main_ingredient, parse_ingredient_list};
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{GeneratedRecipe, RecipeInputs};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Builds recipes from user inputs
#[derive(Clone)]
pub struct RecipeSynthesizer {
    chooser: Arc<dyn NameChooser>,
}

impl Default for RecipeSynthesizer {
    fn default() -> Self {
        Self::with_chooser(RandomChooser)
    }
}

impl fmt::Debug for RecipeSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeSynthesizer").finish_non_exhaustive()
    }
}

impl RecipeSynthesizer {
    /// Synthesizer with a random name pick
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesizer with a caller-supplied name pick
    #[must_use]
    pub fn with_chooser(chooser: impl NameChooser + 'static) -> Self {
        Self {
            chooser: Arc::new(chooser),
        }
    }

    /// Reject inputs without at least one ingredient
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when no non-blank comma-separated token remains
    pub fn validate(inputs: &RecipeInputs) -> AppResult<Vec<String>> {
        let ingredients = parse_ingredient_list(&inputs.ingredients);
        if ingredients.is_empty() {
            return Err(AppError::invalid_input(
                "Please enter at least some ingredients",
            ));
        }
        Ok(ingredients)
    }

    /// Produce a recipe from the inputs
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the ingredient field holds no ingredients
    pub fn synthesize(&self, inputs: &RecipeInputs) -> AppResult<GeneratedRecipe> {
        let ingredients = Self::validate(inputs)?;
        let recipe = self.build(inputs, &ingredients);
        AppLogger::log_recipe_generated(&recipe.name, recipe.ingredients.len());
        Ok(recipe)
    }

    /// Validate, wait `delay`, then produce the recipe
    ///
    /// Validation failures return immediately without waiting. The wait has no
    /// cancellation hook beyond dropping the future.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the ingredient field holds no ingredients
    pub async fn synthesize_delayed(
        &self,
        inputs: &RecipeInputs,
        delay: Duration,
    ) -> AppResult<GeneratedRecipe> {
        Self::validate(inputs)?;
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis(), "Delaying recipe generation");
            sleep(delay).await;
        }
        self.synthesize(inputs)
    }

    fn build(&self, inputs: &RecipeInputs, ingredients: &[String]) -> GeneratedRecipe {
        let main = main_ingredient(ingredients);

        let candidates = templates::name_candidates(inputs.cuisine_style, main);
        let pick = self.chooser.choose(candidates.len()).min(candidates.len() - 1);
        let name = candidates[pick].clone();

        GeneratedRecipe {
            description: templates::description(
                inputs.cuisine_style,
                main,
                inputs.meal_type,
                inputs.time_allotment,
            ),
            ingredients: ingredient_lines(ingredients, &inputs.additional_ingredients),
            instructions: templates::instructions(main),
            chefs_tip: templates::chefs_tip(main),
            image_prompt: templates::image_prompt(&name),
            name,
        }
    }
}
