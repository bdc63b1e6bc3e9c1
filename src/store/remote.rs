// ABOUTME: Hosted saved-recipe store speaking the PostgREST interface of the recipes table
// ABOUTME: Every request is filtered by owner id; failures are logged and returned, never retried
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Remote store over the hosted backend's REST interface.
//!
//! | operation     | request                                                          |
//! |---------------|------------------------------------------------------------------|
//! | list          | `GET /rest/v1/recipes?user_id=eq.{uid}&order=created_at.desc`    |
//! | save          | `POST /rest/v1/recipes` returning the created row                |
//! | remove        | `DELETE /rest/v1/recipes?id=eq.{id}&user_id=eq.{uid}`            |
//! | update_status | `PATCH /rest/v1/recipes?id=eq.{id}&user_id=eq.{uid}` returning the row |
//!
//! Requests carry the public key in `apikey` and the user's access token (or
//! the public key when there is none) as the bearer credential.

use super::{ListOrder, RecipeStore, StoreBackend};
use crate::config::RemoteStoreConfig;
use crate::http_client::shared_client;
use crate::logging::AppLogger;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pantry_core::constants::storage::{RECIPES_TABLE, REST_PATH};
use pantry_core::errors::{AppError, AppResult, ErrorCode};
use pantry_core::models::{GeneratedRecipe, RecipeMetadata, RecipeStatus, SavedRecipe, User};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error};
use url::Url;

const SERVICE_NAME: &str = "recipes backend";

/// Row sent on insert; the backend assigns `id` and `created_at`
#[derive(Debug, Serialize)]
struct NewRecipeRow<'a> {
    user_id: &'a str,
    name: &'a str,
    description: &'a str,
    ingredients: &'a [String],
    instructions: &'a [String],
    chefs_tip: &'a str,
    image_prompt: &'a str,
    status: RecipeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    estimated_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cuisine_style: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meal_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dietary_needs: Option<&'a str>,
}

impl<'a> NewRecipeRow<'a> {
    fn new(
        user: &'a User,
        recipe: &'a GeneratedRecipe,
        status: RecipeStatus,
        metadata: &'a RecipeMetadata,
    ) -> Self {
        Self {
            user_id: &user.id,
            name: &recipe.name,
            description: &recipe.description,
            ingredients: &recipe.ingredients,
            instructions: &recipe.instructions,
            chefs_tip: &recipe.chefs_tip,
            image_prompt: &recipe.image_prompt,
            status,
            estimated_time: metadata.estimated_time.as_deref(),
            servings: metadata.servings,
            cuisine_style: metadata.cuisine_style.as_deref(),
            meal_type: metadata.meal_type.as_deref(),
            dietary_needs: metadata.dietary_needs.as_deref(),
        }
    }
}

/// Body of a status change
#[derive(Debug, Serialize)]
struct StatusPatch {
    status: RecipeStatus,
    updated_at: DateTime<Utc>,
}

/// Error body returned by PostgREST
#[derive(Debug, Default, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Saved recipes in the hosted `recipes` table
#[derive(Debug, Clone)]
pub struct RemoteRecipeStore {
    client: Client,
    table_url: Url,
    anon_key: String,
}

impl RemoteRecipeStore {
    /// Store using the process-wide shared HTTP client
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the project URL cannot carry a path, or
    /// `InternalError` if the shared client cannot be built
    pub fn new(config: &RemoteStoreConfig) -> AppResult<Self> {
        Self::with_client(config, shared_client()?.clone())
    }

    /// Store using a caller-supplied HTTP client
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the project URL cannot carry a path
    pub fn with_client(config: &RemoteStoreConfig, client: Client) -> AppResult<Self> {
        Ok(Self {
            client,
            table_url: table_url(&config.project_url)?,
            anon_key: config.anon_key.clone(),
        })
    }

    /// Endpoint of the recipes table
    #[must_use]
    pub const fn table_url(&self) -> &Url {
        &self.table_url
    }

    fn authorized(&self, builder: RequestBuilder, user: &User) -> RequestBuilder {
        let bearer = user.access_token.as_deref().unwrap_or(&self.anon_key);
        builder
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    fn owned_by(user: &User) -> (&'static str, String) {
        ("user_id", format!("eq.{}", user.id))
    }

    async fn rows(operation: &str, response: Response) -> AppResult<Vec<SavedRecipe>> {
        let response = check_status(operation, response).await?;
        response.json::<Vec<SavedRecipe>>().await.map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                format!("Unexpected {operation} response from {SERVICE_NAME}: {e}"),
            )
            .with_source(e)
        })
    }

    fn record<T>(operation: &str, user: &User, started: Instant, result: &AppResult<T>) {
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if let Err(e) = result {
            error!(operation, user.id = %user.id, error = %e, "Remote recipe store call failed");
        }
        AppLogger::log_store_operation("remote", operation, &user.id, result.is_ok(), elapsed);
    }

    async fn fetch_list(&self, user: &User) -> AppResult<Vec<SavedRecipe>> {
        let request = self
            .client
            .get(self.table_url.clone())
            .query(&[
                ("select", "*".to_owned()),
                Self::owned_by(user),
                ("order", "created_at.desc".to_owned()),
            ]);
        let response = self.authorized(request, user).send().await?;
        Self::rows("list", response).await
    }

    async fn insert(
        &self,
        user: &User,
        recipe: &GeneratedRecipe,
        status: RecipeStatus,
        metadata: &RecipeMetadata,
    ) -> AppResult<SavedRecipe> {
        let row = NewRecipeRow::new(user, recipe, status, metadata);
        let request = self
            .client
            .post(self.table_url.clone())
            .header("Prefer", "return=representation")
            .json(&[row]);
        let response = self.authorized(request, user).send().await?;
        Self::rows("save", response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "insert returned no row"))
    }

    async fn delete(&self, user: &User, id: &str) -> AppResult<()> {
        let request = self
            .client
            .delete(self.table_url.clone())
            .query(&[("id", format!("eq.{id}")), Self::owned_by(user)]);
        let response = self.authorized(request, user).send().await?;
        check_status("remove", response).await.map(|_| ())
    }

    async fn patch_status(
        &self,
        user: &User,
        id: &str,
        status: RecipeStatus,
    ) -> AppResult<SavedRecipe> {
        let request = self
            .client
            .patch(self.table_url.clone())
            .query(&[
                ("id", format!("eq.{id}")),
                Self::owned_by(user),
                ("select", "*".to_owned()),
            ])
            .header("Prefer", "return=representation")
            .json(&StatusPatch {
                status,
                updated_at: Utc::now(),
            });
        let response = self.authorized(request, user).send().await?;
        Self::rows("update_status", response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")).with_resource_id(id))
    }
}

/// `{project}/rest/v1/recipes`, keeping any path prefix on the project URL
fn table_url(project_url: &Url) -> AppResult<Url> {
    let mut url = project_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| AppError::config_invalid(format!("Project URL '{project_url}' cannot be a base")))?
        .pop_if_empty()
        .extend(REST_PATH.split('/'))
        .push(RECIPES_TABLE);
    Ok(url)
}

async fn check_status(operation: &str, response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let raw = response.text().await.unwrap_or_default();
    let body: BackendErrorBody = serde_json::from_str(&raw).unwrap_or_default();
    let detail = body.message.unwrap_or_else(|| {
        if raw.is_empty() {
            status.canonical_reason().unwrap_or("no details").to_owned()
        } else {
            raw.clone()
        }
    });
    debug!(
        operation,
        status = status.as_u16(),
        backend.code = body.code.as_deref().unwrap_or(""),
        backend.hint = body.hint.as_deref().unwrap_or(""),
        "Backend rejected request"
    );

    Err(AppError::new(
        ErrorCode::from_backend_status(status.as_u16()),
        format!("{SERVICE_NAME} {operation} failed ({status}): {detail}"),
    ))
}

#[async_trait]
impl RecipeStore for RemoteRecipeStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Remote
    }

    fn list_order(&self) -> ListOrder {
        ListOrder::NewestFirst
    }

    async fn list(&self, user: &User) -> AppResult<Vec<SavedRecipe>> {
        let started = Instant::now();
        let result = self.fetch_list(user).await;
        Self::record("list", user, started, &result);
        result
    }

    async fn save(
        &self,
        user: &User,
        recipe: &GeneratedRecipe,
        status: RecipeStatus,
        metadata: &RecipeMetadata,
    ) -> AppResult<SavedRecipe> {
        let started = Instant::now();
        let result = self.insert(user, recipe, status, metadata).await;
        Self::record("save", user, started, &result);
        result
    }

    async fn remove(&self, user: &User, id: &str) -> AppResult<()> {
        let started = Instant::now();
        let result = self.delete(user, id).await;
        Self::record("remove", user, started, &result);
        result
    }

    async fn update_status(
        &self,
        user: &User,
        id: &str,
        status: RecipeStatus,
    ) -> AppResult<SavedRecipe> {
        let started = Instant::now();
        let result = self.patch_status(user, id, status).await;
        Self::record("update_status", user, started, &result);
        result
    }
}
