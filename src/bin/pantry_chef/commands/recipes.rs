// ABOUTME: Recipe generation command for the pantry-chef CLI
// ABOUTME: Synthesizes a recipe, prints it, and optionally saves it to the collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use pantry_chef::session::RecipeSession;
use pantry_chef::synthesizer::{RecipeSynthesizer, SeededChooser};
use pantry_core::errors::AppResult;
use pantry_core::models::{RecipeInputs, RecipeMetadata, RecipeStatus};
use std::time::Duration;
use tracing::info;

use crate::helpers::display::{display_recipe, display_saved_confirmation};

/// Generate a recipe and, when `save` is set, store it for the signed-in user
pub async fn suggest(
    session: &mut RecipeSession,
    inputs: &RecipeInputs,
    save: Option<RecipeStatus>,
    seed: Option<u64>,
    delay: Duration,
) -> AppResult<()> {
    let synthesizer = seed.map_or_else(RecipeSynthesizer::new, |seed| {
        RecipeSynthesizer::with_chooser(SeededChooser::new(seed))
    });

    let recipe = synthesizer.synthesize_delayed(inputs, delay).await?;
    display_recipe(&recipe);

    if let Some(status) = save {
        let saved = session
            .save(&recipe, status, &RecipeMetadata::from_inputs(inputs))
            .await?;
        info!(recipe.id = %saved.id, status = %status, "Recipe saved");
        display_saved_confirmation(&saved, session.counts());
    }

    Ok(())
}
