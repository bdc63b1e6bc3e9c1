// ABOUTME: Pantry Chef CLI - generate recipes from ingredients and manage saved recipes
// ABOUTME: Handles suggest, list, remove, set-status, and options commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors
//!
//! Usage:
//! ```bash
//! # Generate a recipe from what is in the fridge
//! pantry-chef suggest "chicken, rice" --cuisine Thai --time "Under 30 minutes"
//!
//! # Generate and save it as a favorite
//! pantry-chef --email ada@example.com suggest "tofu" --save favorite
//!
//! # List saved recipes, optionally by status
//! pantry-chef --email ada@example.com list --status want-to-try
//!
//! # Remove a saved recipe
//! pantry-chef --email ada@example.com remove 1718031234567
//!
//! # Move a saved recipe to another status (hosted store only)
//! pantry-chef --email ada@example.com --user-id <uuid> --access-token <jwt> \
//!     set-status <id> favorite
//!
//! # Show every preference option
//! pantry-chef options
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pantry_chef::config::AppConfig;
use pantry_chef::http_client::initialize_shared_client;
use pantry_chef::logging::LoggingConfig;
use pantry_chef::session::RecipeSession;
use pantry_chef::store::Store;
use pantry_core::models::{
    display_name_from_email, CookingTool, CuisineStyle, DietaryNeed, MealType, RecipeInputs,
    RecipeStatus, SkillLevel, TimeAllotment, User,
};
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(
    name = "pantry-chef",
    version,
    about = "Turn the ingredients you have into a recipe",
    long_about = "Generates structured recipes from ingredients on hand and keeps a per-user \
                  collection of saved recipes tagged favorite or want-to-try."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Email of the signed-in user (required to save or browse recipes)
    #[arg(long, global = true)]
    email: Option<String>,

    /// Display name (defaults to the email prefix)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Hosted backend user id (defaults to the email)
    #[arg(long, global = true)]
    user_id: Option<String>,

    /// Hosted backend access token
    #[arg(long, global = true)]
    access_token: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a recipe
    Suggest(SuggestArgs),

    /// List saved recipes
    List {
        /// Only show recipes with this status (favorite, want-to-try)
        #[arg(long)]
        status: Option<RecipeStatus>,
    },

    /// Remove a saved recipe
    Remove {
        /// Recipe id
        id: String,
    },

    /// Change the status of a saved recipe
    SetStatus {
        /// Recipe id
        id: String,

        /// New status (favorite, want-to-try)
        status: RecipeStatus,
    },

    /// Show every preference option
    Options,
}

#[derive(Args)]
struct SuggestArgs {
    /// Main ingredients, comma-separated
    ingredients: String,

    /// Pantry extras, comma-separated (replaces the default staples)
    #[arg(long, default_value = "")]
    additional: String,

    /// Cuisine style
    #[arg(long)]
    cuisine: Option<CuisineStyle>,

    /// Meal type
    #[arg(long)]
    meal: Option<MealType>,

    /// Dietary need
    #[arg(long)]
    diet: Option<DietaryNeed>,

    /// Available cooking tools
    #[arg(long)]
    tools: Option<CookingTool>,

    /// Time available
    #[arg(long)]
    time: Option<TimeAllotment>,

    /// Skill level
    #[arg(long)]
    skill: Option<SkillLevel>,

    /// Save the generated recipe with this status
    #[arg(long)]
    save: Option<RecipeStatus>,

    /// Seed for the name pick, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured generation delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl SuggestArgs {
    fn inputs(&self) -> RecipeInputs {
        RecipeInputs {
            ingredients: self.ingredients.clone(),
            additional_ingredients: self.additional.clone(),
            cuisine_style: self.cuisine,
            meal_type: self.meal,
            dietary_needs: self.diet,
            tools: self.tools,
            time_allotment: self.time,
            skill_level: self.skill,
        }
    }
}

impl Cli {
    /// User described by the global identity flags, if an email was given
    fn user(&self) -> Option<User> {
        let email = self.email.as_deref()?.trim();
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| display_name_from_email(email));
        let mut user = match &self.user_id {
            Some(id) => User::remote(id.clone(), email),
            None => User::local(name.clone(), email),
        };
        user.name = name;
        if let Some(token) = &self.access_token {
            user = user.with_access_token(token.clone());
        }
        Some(user)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    if matches!(cli.command, Command::Options) {
        commands::options::show();
        return Ok(());
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if e.code.is_fatal() {
                error!("Cannot start without valid configuration: {e}");
            }
            return Err(e.into());
        }
    };
    info!("Pantry Chef starting: {}", config.summary());
    initialize_shared_client(config.http_client);

    let mut session = RecipeSession::new(Store::from_config(&config)?);
    if let Some(user) = cli.user() {
        session.sign_in(user).await?;
    } else {
        debug!("No --email given; running signed out");
    }

    match cli.command {
        Command::Suggest(args) => {
            let inputs = args.inputs();
            let delay = args
                .delay_ms
                .map_or(config.synthesis_delay, Duration::from_millis);
            commands::recipes::suggest(&mut session, &inputs, args.save, args.seed, delay).await?;
        }
        Command::List { status } => commands::collection::list(&session, status)?,
        Command::Remove { id } => commands::collection::remove(&mut session, &id).await?,
        Command::SetStatus { id, status } => {
            commands::collection::set_status(&mut session, &id, status).await?;
        }
        Command::Options => commands::options::show(),
    }

    Ok(())
}
