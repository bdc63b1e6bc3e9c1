// ABOUTME: Fixed text templates for recipe names, descriptions, steps, tips, and image prompts
// ABOUTME: Pure string interpolation over the main ingredient and selected preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use super::ingredients::capitalize_first;
use pantry_core::constants::recipe_defaults::{FALLBACK_CUISINE, FALLBACK_MEAL, FALLBACK_TIME};
use pantry_core::models::{CuisineStyle, MealType, TimeAllotment};

/// The four name phrasings, in a stable order
#[must_use]
pub fn name_candidates(cuisine: Option<CuisineStyle>, main: &str) -> [String; 4] {
    let prefix = cuisine.map_or_else(String::new, |c| format!("{} ", c.label()));
    let ingredient = capitalize_first(main);
    [
        format!("{prefix}{ingredient} Delight"),
        format!("Fusion {ingredient} Bowl"),
        format!("Chef's {prefix}{ingredient} Special"),
        format!("Golden {ingredient} Creation"),
    ]
}

/// One-paragraph pitch for the dish
#[must_use]
pub fn description(
    cuisine: Option<CuisineStyle>,
    main: &str,
    meal: Option<MealType>,
    time: Option<TimeAllotment>,
) -> String {
    let cuisine = cuisine.map_or(FALLBACK_CUISINE, |c| c.label());
    let meal = meal.map_or(FALLBACK_MEAL, |m| m.label());
    let time = time.map_or(FALLBACK_TIME, |t| t.label());
    format!(
        "A delightful {cuisine} dish that transforms simple {main} into an extraordinary \
         culinary experience. Perfect for {meal}, this recipe balances flavors beautifully \
         while being {time} to prepare."
    )
}

/// The seven cooking steps
#[must_use]
pub fn instructions(main: &str) -> Vec<String> {
    vec![
        format!("Prep all ingredients: wash and chop {main} into bite-sized pieces."),
        "Heat oil in a pan over medium heat. Add aromatics (garlic, ginger, onions) and sauté until fragrant.".to_owned(),
        format!("Add {main} to the pan and cook for 5-7 minutes until partially cooked."),
        "Season with salt, pepper, and any spices. Add other vegetables if using.".to_owned(),
        "Cook for an additional 8-10 minutes, stirring occasionally.".to_owned(),
        "Taste and adjust seasoning. Garnish with fresh herbs.".to_owned(),
        "Serve hot and enjoy your culinary creation!".to_owned(),
    ]
}

/// Marinating and finishing suggestion
#[must_use]
pub fn chefs_tip(main: &str) -> String {
    format!(
        "For extra depth of flavor, try marinating the {main} for 15 minutes before cooking. \
         You can also add a splash of lemon juice at the end for brightness!"
    )
}

/// Photography brief for the finished dish
#[must_use]
pub fn image_prompt(recipe_name: &str) -> String {
    format!(
        "Professional food photography of {recipe_name}, beautifully plated on a white ceramic \
         dish, garnished with fresh herbs, warm natural lighting, shallow depth of field, \
         restaurant quality presentation, appetizing and colorful, shot from a 45-degree angle"
    )
}
