// ABOUTME: Local saved-recipe store keeping one JSON document per user email
// ABOUTME: Whole-document read on list, whole-document rewrite on every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Local filesystem store.
//!
//! Each user owns `recipes_<encoded email>.json` under the data directory.
//! The lowercased email is percent-encoded so distinct addresses never share
//! a document. Entries keep
//! insertion order. Ids are millisecond timestamps, bumped past the largest id
//! already in the document so rapid saves never collide. Status changes after
//! saving are not offered by this backend.

use super::{ListOrder, RecipeStore, StoreBackend};
use crate::logging::AppLogger;
use async_trait::async_trait;
use chrono::Utc;
use pantry_core::constants::storage::LOCAL_DOCUMENT_PREFIX;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{GeneratedRecipe, RecipeMetadata, RecipeStatus, SavedRecipe, User};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Saved recipes as JSON documents on disk
#[derive(Debug)]
pub struct LocalRecipeStore {
    data_dir: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl LocalRecipeStore {
    /// Store rooted at `data_dir`; the directory is created on first write
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Directory holding the documents
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Document path for a user, keyed by email
    #[must_use]
    pub fn document_path(&self, user: &User) -> PathBuf {
        self.data_dir
            .join(format!("{LOCAL_DOCUMENT_PREFIX}{}.json", document_key(&user.email)))
    }

    async fn read_document(&self, user: &User) -> AppResult<Vec<SavedRecipe>> {
        let path = self.document_path(user);
        match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::from(e).with_resource_id(path.display().to_string())
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::from(e).with_resource_id(path.display().to_string())),
        }
    }

    async fn write_document(&self, user: &User, recipes: &[SavedRecipe]) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir).await?;
        let path = self.document_path(user);
        let staging = path.with_extension("json.tmp");
        let body = serde_json::to_vec_pretty(recipes)?;
        fs::write(&staging, body).await?;
        fs::rename(&staging, &path).await?;
        debug!(path = %path.display(), entries = recipes.len(), "Wrote recipe document");
        Ok(())
    }
}

/// Filesystem-safe, collision-free form of an email address
fn document_key(email: &str) -> String {
    urlencoding::encode(&email.trim().to_lowercase()).into_owned()
}

/// Millisecond timestamp id, strictly above every numeric id already present
fn next_id(existing: &[SavedRecipe], now_ms: i64) -> String {
    let highest = existing
        .iter()
        .filter_map(|recipe| recipe.id.parse::<i64>().ok())
        .max();
    let id = highest.map_or(now_ms, |max| now_ms.max(max.saturating_add(1)));
    id.to_string()
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl RecipeStore for LocalRecipeStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Local
    }

    fn list_order(&self) -> ListOrder {
        ListOrder::InsertionOrder
    }

    async fn list(&self, user: &User) -> AppResult<Vec<SavedRecipe>> {
        self.read_document(user).await
    }

    async fn save(
        &self,
        user: &User,
        recipe: &GeneratedRecipe,
        status: RecipeStatus,
        metadata: &RecipeMetadata,
    ) -> AppResult<SavedRecipe> {
        let started = Instant::now();
        let _guard = self.write_lock.lock().await;

        let result: AppResult<SavedRecipe> = async {
            let mut recipes = self.read_document(user).await?;
            let now = Utc::now();
            let saved = SavedRecipe::new(
                next_id(&recipes, now.timestamp_millis()),
                recipe.clone(),
                status,
                metadata.clone(),
                now,
            );
            recipes.push(saved.clone());
            self.write_document(user, &recipes).await?;
            Ok(saved)
        }
        .await;

        AppLogger::log_store_operation(
            "local",
            "save",
            &user.email,
            result.is_ok(),
            elapsed_ms(started),
        );
        result
    }

    async fn remove(&self, user: &User, id: &str) -> AppResult<()> {
        let started = Instant::now();
        let _guard = self.write_lock.lock().await;

        let result: AppResult<()> = async {
            let mut recipes = self.read_document(user).await?;
            let before = recipes.len();
            recipes.retain(|recipe| recipe.id != id);
            if recipes.len() == before {
                debug!(recipe.id = %id, "No local recipe with this id; nothing to remove");
                return Ok(());
            }
            self.write_document(user, &recipes).await
        }
        .await;

        AppLogger::log_store_operation(
            "local",
            "remove",
            &user.email,
            result.is_ok(),
            elapsed_ms(started),
        );
        result
    }

    async fn update_status(
        &self,
        user: &User,
        id: &str,
        status: RecipeStatus,
    ) -> AppResult<SavedRecipe> {
        warn!(
            user.email = %user.email,
            recipe.id = %id,
            status = %status,
            "Status changes are not available on the local store"
        );
        Err(AppError::unsupported("Changing a saved recipe's status on the local store")
            .with_resource_id(id))
    }
}
