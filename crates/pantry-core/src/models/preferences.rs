// ABOUTME: Closed preference option sets for recipe generation inputs
// ABOUTME: Cuisine, meal type, dietary need, cooking tool, time allotment, and skill level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Preference selections offered to the user before a recipe is generated.
//!
//! Every preference is a closed set. Values serialize as their display label
//! (`"South Indian"`, `"2+ hours (slow cooking)"`) so stored metadata reads the
//! same as what the user picked. Parsing accepts the label in any case, or a
//! slug such as `south-indian` / `south_indian`.

use crate::errors::AppError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Reduce a label or slug to lowercase alphanumeric words joined by `-`
fn normalize(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for c in value.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every option, in the order it is presented to the user
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Human-readable label, also used as the wire form
            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            /// URL/CLI friendly slug, e.g. `south-indian`
            #[must_use]
            pub fn slug(&self) -> String {
                normalize(self.label())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| normalize(option.label()) == wanted)
                    .ok_or_else(|| {
                        AppError::invalid_input(format!("Unknown {}: '{}'", $kind, s.trim()))
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }
    };
}

preference_enum! {
    /// Cuisine style the recipe should lean towards
    CuisineStyle, "cuisine style" {
        /// Italian
        Italian => "Italian",
        /// French
        French => "French",
        /// South Indian
        SouthIndian => "South Indian",
        /// North Indian
        NorthIndian => "North Indian",
        /// Mexican
        Mexican => "Mexican",
        /// Thai
        Thai => "Thai",
        /// Japanese
        Japanese => "Japanese",
        /// Mediterranean
        Mediterranean => "Mediterranean",
        /// Chinese
        Chinese => "Chinese",
        /// Korean
        Korean => "Korean",
        /// Middle Eastern
        MiddleEastern => "Middle Eastern",
        /// American
        American => "American",
        /// Fusion
        Fusion => "Fusion",
    }
}

preference_enum! {
    /// Occasion the meal is meant for
    MealType, "meal type" {
        /// Quick breakfast
        QuickBreakfast => "Quick Breakfast",
        /// Hearty lunch
        HeartyLunch => "Hearty Lunch",
        /// Weekend dinner
        WeekendDinner => "Weekend Dinner",
        /// Healthy snack
        HealthySnack => "Healthy Snack",
        /// Appetizer
        Appetizer => "Appetizer",
        /// Dessert
        Dessert => "Dessert",
        /// Brunch
        Brunch => "Brunch",
        /// Late night
        LateNight => "Late Night",
    }
}

preference_enum! {
    /// Dietary requirement to respect
    DietaryNeed, "dietary need" {
        /// No restriction
        NoRestriction => "None",
        /// Vegetarian
        Vegetarian => "Vegetarian",
        /// Vegan
        Vegan => "Vegan",
        /// Gluten-free
        GlutenFree => "Gluten-Free",
        /// Dairy-free
        DairyFree => "Dairy-Free",
        /// Low-carb
        LowCarb => "Low-Carb",
        /// Ketogenic
        Keto => "Keto",
        /// Paleo
        Paleo => "Paleo",
        /// High-protein
        HighProtein => "High-Protein",
    }
}

preference_enum! {
    /// Kitchen equipment available
    CookingTool, "cooking tool" {
        /// Basic pan and pot
        BasicPanAndPot => "Basic pan & pot",
        /// Air fryer
        AirFryer => "Air fryer",
        /// Pressure cooker
        PressureCooker => "Pressure cooker",
        /// Microwave
        Microwave => "Microwave",
        /// Oven
        Oven => "Oven",
        /// Grill
        Grill => "Grill",
        /// Food processor
        FoodProcessor => "Food processor",
        /// Blender
        Blender => "Blender",
    }
}

preference_enum! {
    /// Time the user is willing to spend
    TimeAllotment, "time allotment" {
        /// Under 15 minutes
        Under15Minutes => "Under 15 minutes",
        /// Under 30 minutes
        Under30Minutes => "Under 30 minutes",
        /// Under 1 hour
        Under1Hour => "Under 1 hour",
        /// One to two hours
        OneToTwoHours => "1-2 hours",
        /// Two hours or more
        SlowCooking => "2+ hours (slow cooking)",
    }
}

preference_enum! {
    /// Self-assessed cooking skill
    SkillLevel, "skill level" {
        /// Absolute beginner
        AbsoluteBeginner => "Absolute Beginner",
        /// Some experience
        SomeExperience => "Some Experience",
        /// Intermediate
        Intermediate => "Intermediate",
        /// Confident cook
        ConfidentCook => "Confident Cook",
        /// Advanced chef
        AdvancedChef => "Advanced Chef",
    }
}
