// ABOUTME: Ingredient list parsing and quantity assignment for generated recipes
// ABOUTME: Splits comma-separated input and maps known ingredients to quantity phrases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use pantry_core::constants::recipe_defaults::{FALLBACK_MAIN_INGREDIENT, PANTRY_STAPLES};

/// Quantity phrase for a matched ingredient, and whether the name gets an `s`
struct QuantityRule {
    needle: &'static str,
    quantity: &'static str,
    pluralize: bool,
}

/// Checked in order; the first substring match wins
const QUANTITY_RULES: [QuantityRule; 6] = [
    QuantityRule {
        needle: "chicken",
        quantity: "1 lb",
        pluralize: false,
    },
    QuantityRule {
        needle: "rice",
        quantity: "1 cup",
        pluralize: false,
    },
    QuantityRule {
        needle: "onion",
        quantity: "1 medium",
        pluralize: false,
    },
    // Appends a bare "s": "tomato" becomes "tomatos", kept as-is.
    QuantityRule {
        needle: "tomato",
        quantity: "2 medium",
        pluralize: true,
    },
    QuantityRule {
        needle: "garlic",
        quantity: "3 cloves",
        pluralize: false,
    },
    QuantityRule {
        needle: "ginger",
        quantity: "1 inch",
        pluralize: false,
    },
];

const DEFAULT_QUANTITY: &str = "1 cup";

/// Split on commas, trim, and drop empty tokens
#[must_use]
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// First ingredient, or the fallback when the list is empty
#[must_use]
pub fn main_ingredient(ingredients: &[String]) -> &str {
    ingredients
        .first()
        .map_or(FALLBACK_MAIN_INGREDIENT, String::as_str)
}

/// Uppercase the first character, leave the rest untouched
#[must_use]
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Prefix an ingredient with its quantity phrase
#[must_use]
pub fn with_quantity(ingredient: &str) -> String {
    let lowered = ingredient.to_lowercase();
    QUANTITY_RULES
        .iter()
        .find(|rule| lowered.contains(rule.needle))
        .map_or_else(
            || format!("{DEFAULT_QUANTITY} {ingredient}"),
            |rule| {
                let suffix = if rule.pluralize { "s" } else { "" };
                format!("{} {ingredient}{suffix}", rule.quantity)
            },
        )
}

/// Full ingredient section: quantified main ingredients, then extras or staples
///
/// Staples appear only when the extras field is empty. Any text in it, even
/// text holding nothing but separators, replaces them.
#[must_use]
pub fn ingredient_lines(main: &[String], additional_raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = main.iter().map(|i| with_quantity(i)).collect();
    if additional_raw.is_empty() {
        lines.extend(PANTRY_STAPLES.iter().map(|s| (*s).to_owned()));
    } else {
        lines.extend(parse_ingredient_list(additional_raw));
    }
    lines
}
