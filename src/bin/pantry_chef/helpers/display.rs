// ABOUTME: Output formatting helpers for pantry-chef
// ABOUTME: Provides consistent display functions for recipes, collections, and options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use pantry_core::constants::recipe_defaults::DEFAULT_ESTIMATED_TIME;
use pantry_core::models::{GeneratedRecipe, RecipeStatus, SavedRecipe, StatusCounts};

/// Display a freshly generated recipe
pub fn display_recipe(recipe: &GeneratedRecipe) {
    println!("\n{}", recipe.name);
    println!("{}", "=".repeat(80));
    println!("{}", recipe.description);

    println!("\nIngredients:");
    for line in &recipe.ingredients {
        println!("  • {line}");
    }

    println!("\nInstructions:");
    for (step, line) in recipe.instructions.iter().enumerate() {
        println!("  {}. {line}", step + 1);
    }

    println!("\nChef's tip: {}", recipe.chefs_tip);
    println!("\nImage prompt:\n  {}", recipe.image_prompt);
    println!("{}", "=".repeat(80));
}

/// Confirm a save and show the updated totals
pub fn display_saved_confirmation(saved: &SavedRecipe, counts: StatusCounts) {
    println!(
        "\nSaved \"{}\" as {} (id {})",
        saved.recipe.name,
        status_label(saved.status),
        saved.id
    );
    display_counts(counts);
}

/// One saved entry with its metadata
pub fn display_saved_recipe(saved: &SavedRecipe) {
    println!(
        "[{}] {}  ({})",
        saved.id,
        saved.recipe.name,
        status_label(saved.status)
    );
    println!(
        "     {} · serves {} · saved {}",
        saved.estimated_time.as_deref().unwrap_or(DEFAULT_ESTIMATED_TIME),
        saved.servings_or_default(),
        saved.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    let tags: Vec<&str> = [
        saved.cuisine_style.as_deref(),
        saved.meal_type.as_deref(),
        saved.dietary_needs.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !tags.is_empty() {
        println!("     {}", tags.join(" · "));
    }
}

/// A user's collection, or a hint when it is empty
pub fn display_collection(owner: &str, recipes: &[&SavedRecipe], counts: StatusCounts) {
    println!("\nSaved recipes for {owner}");
    println!("{}", "=".repeat(60));
    if recipes.is_empty() {
        println!("Nothing here yet. Generate one with `pantry-chef suggest` and --save it.");
    } else {
        for saved in recipes {
            display_saved_recipe(saved);
        }
    }
    println!("{}", "-".repeat(60));
    display_counts(counts);
}

/// Titled list of accepted values
pub fn display_option_set<'a>(title: &str, options: impl Iterator<Item = &'a str>) {
    println!("\n{title}:");
    for option in options {
        println!("  - {option}");
    }
}

fn display_counts(counts: StatusCounts) {
    println!(
        "Favorites: {}   Want to try: {}   Total: {}",
        counts.favorite,
        counts.want_to_try,
        counts.total()
    );
}

const fn status_label(status: RecipeStatus) -> &'static str {
    match status {
        RecipeStatus::Favorite => "Favorite",
        RecipeStatus::WantToTry => "Want to try",
    }
}
