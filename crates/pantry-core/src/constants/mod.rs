// ABOUTME: Application-wide constants for recipe defaults, storage, and environment keys
// ABOUTME: Single home for literals shared between the synthesizer, stores, and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Application constants organized by domain

/// Defaults applied when a recipe is generated or saved
pub mod recipe_defaults {
    /// Main ingredient used when the ingredient list is empty
    pub const FALLBACK_MAIN_INGREDIENT: &str = "mixed vegetables";

    /// Cuisine word used in descriptions when none was selected
    pub const FALLBACK_CUISINE: &str = "fusion";

    /// Meal phrase used in descriptions when none was selected
    pub const FALLBACK_MEAL: &str = "any meal";

    /// Time phrase used in descriptions when none was selected
    pub const FALLBACK_TIME: &str = "quick";

    /// Pantry staples appended when no additional ingredients are given
    pub const PANTRY_STAPLES: [&str; 4] = [
        "Salt to taste",
        "Black pepper to taste",
        "2 tablespoons cooking oil",
        "Fresh herbs for garnish",
    ];

    /// Estimated time stored when no time allotment was selected
    pub const DEFAULT_ESTIMATED_TIME: &str = "30 mins";

    /// Serving count assumed when a saved recipe has none
    pub const DEFAULT_SERVINGS: u32 = 4;

    /// Number of steps every generated recipe carries
    pub const INSTRUCTION_STEP_COUNT: usize = 7;
}

/// Storage layout constants
pub mod storage {
    /// Remote collection holding saved recipes
    pub const RECIPES_TABLE: &str = "recipes";

    /// Path prefix of the hosted REST interface
    pub const REST_PATH: &str = "rest/v1";

    /// File name prefix for local per-user documents
    pub const LOCAL_DOCUMENT_PREFIX: &str = "recipes_";

    /// Directory name under the platform data dir
    pub const APP_DATA_DIR_NAME: &str = "pantry-chef";
}

/// Environment variable names read at startup
pub mod env_keys {
    /// Hosted backend project URL
    pub const SUPABASE_PROJECT_URL: &str = "SUPABASE_PROJECT_URL";
    /// Hosted backend public (anon) API key
    pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
    /// Explicit store selection: `local` or `remote`
    pub const PANTRY_STORE: &str = "PANTRY_STORE";
    /// Directory for local recipe documents
    pub const PANTRY_DATA_DIR: &str = "PANTRY_DATA_DIR";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";
    /// Cosmetic delay before a generated recipe is returned
    pub const SYNTHESIS_DELAY_MS: &str = "SYNTHESIS_DELAY_MS";
}

/// Service identity used in logs
pub mod service_names {
    /// Default service name
    pub const PANTRY_CHEF: &str = "pantry-chef";
}
