// ABOUTME: Option listing command for the pantry-chef CLI
// ABOUTME: Prints every preference choice accepted by the suggest command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use pantry_core::models::{
    CookingTool, CuisineStyle, DietaryNeed, MealType, RecipeStatus, SkillLevel, TimeAllotment,
};

use crate::helpers::display::display_option_set;

/// Print all preference sets and statuses
pub fn show() {
    display_option_set("Cuisine styles (--cuisine)", CuisineStyle::ALL.iter().map(CuisineStyle::label));
    display_option_set("Meal types (--meal)", MealType::ALL.iter().map(MealType::label));
    display_option_set("Dietary needs (--diet)", DietaryNeed::ALL.iter().map(DietaryNeed::label));
    display_option_set("Cooking tools (--tools)", CookingTool::ALL.iter().map(CookingTool::label));
    display_option_set("Time (--time)", TimeAllotment::ALL.iter().map(TimeAllotment::label));
    display_option_set("Skill levels (--skill)", SkillLevel::ALL.iter().map(SkillLevel::label));
    display_option_set(
        "Statuses (--save, set-status)",
        RecipeStatus::ALL.iter().map(RecipeStatus::as_str),
    );
}
