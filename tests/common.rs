// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides sample recipes, test users, and an in-process fake of the hosted recipes API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pantry_chef`
//!
//! The fake backend implements the subset of PostgREST the remote store uses:
//! `eq.` filters on `id` and `user_id`, `order=created_at.desc`, and
//! `Prefer: return=representation` on insert and update. Any request whose
//! bearer token is [`EXPIRED_TOKEN`] is rejected with 401.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use pantry_chef::config::RemoteStoreConfig;
use pantry_core::models::{GeneratedRecipe, User};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use url::Url;

/// Public key the fake backend accepts
pub const ANON_KEY: &str = "test-anon-key";

/// Bearer token the fake backend rejects
pub const EXPIRED_TOKEN: &str = "expired-token";

/// Local-store user with a fixed display name
pub fn test_user(email: &str) -> User {
    User::local("Test Cook", email)
}

/// Hosted-store user with an access token
pub fn remote_user(id: &str, email: &str) -> User {
    User::remote(id, email).with_access_token(format!("token-for-{id}"))
}

/// Recipe content with a recognizable name
pub fn sample_recipe(name: &str) -> GeneratedRecipe {
    GeneratedRecipe {
        name: name.to_owned(),
        description: format!("A delightful fusion dish called {name}."),
        ingredients: vec!["1 lb chicken".to_owned(), "Salt to taste".to_owned()],
        instructions: (1..=7).map(|step| format!("Step {step}")).collect(),
        chefs_tip: "Marinate first.".to_owned(),
        image_prompt: format!("Professional food photography of {name}"),
    }
}

type Rejection = (StatusCode, Json<Value>);

/// In-memory `recipes` table served over HTTP
#[derive(Clone, Default)]
pub struct FakeBackend {
    rows: Arc<Mutex<Vec<Value>>>,
    bearers: Arc<Mutex<Vec<String>>>,
    clock: Arc<Mutex<i64>>,
}

impl FakeBackend {
    /// Start serving on an ephemeral port; returns the backend and its project URL
    pub async fn spawn() -> (Self, Url) {
        let backend = Self::default();
        let app = Router::new()
            .route(
                "/rest/v1/recipes",
                get(list_rows)
                    .post(insert_rows)
                    .delete(delete_rows)
                    .patch(patch_rows),
            )
            .with_state(backend.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let url = Url::parse(&format!("http://{addr}")).unwrap();
        (backend, url)
    }

    /// Store configuration pointing at a spawned backend
    pub fn config(url: &Url) -> RemoteStoreConfig {
        RemoteStoreConfig {
            project_url: url.clone(),
            anon_key: ANON_KEY.to_owned(),
        }
    }

    /// Insert a row directly, as another client would
    pub fn seed(&self, user_id: &str, name: &str, status: &str) -> String {
        let mut row = json!({
            "user_id": user_id,
            "name": name,
            "description": "seeded",
            "ingredients": ["1 cup rice"],
            "instructions": ["Cook"],
            "chefs_tip": "tip",
            "image_prompt": "prompt",
            "status": status,
        });
        self.stamp(&mut row);
        let id = row["id"].as_str().unwrap().to_owned();
        self.rows.lock().unwrap().push(row);
        id
    }

    /// Every row currently stored
    pub fn rows(&self) -> Vec<Value> {
        self.rows.lock().unwrap().clone()
    }

    /// Rows owned by `user_id`
    pub fn rows_for(&self, user_id: &str) -> Vec<Value> {
        self.rows()
            .into_iter()
            .filter(|row| row["user_id"] == user_id)
            .collect()
    }

    /// Bearer tokens seen so far, in request order
    pub fn bearers(&self) -> Vec<String> {
        self.bearers.lock().unwrap().clone()
    }

    /// Assign an id and a strictly increasing `created_at`
    fn stamp(&self, row: &mut Value) {
        let tick = {
            let mut clock = self.clock.lock().unwrap();
            *clock += 1;
            *clock
        };
        let created_at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
            + Duration::seconds(tick);
        row["id"] = json!(uuid::Uuid::new_v4().to_string());
        row["created_at"] = json!(created_at.to_rfc3339_opts(SecondsFormat::Micros, true));
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), Rejection> {
        let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
        if apikey != Some(ANON_KEY) {
            return Err(reject(StatusCode::UNAUTHORIZED, "No API key found in request"));
        }
        let bearer = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_owned)
            .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "Missing bearer token"))?;
        self.bearers.lock().unwrap().push(bearer.clone());
        if bearer == EXPIRED_TOKEN {
            return Err(reject(StatusCode::UNAUTHORIZED, "JWT expired"));
        }
        Ok(())
    }
}

fn reject(status: StatusCode, message: &str) -> Rejection {
    (
        status,
        Json(json!({ "message": message, "code": "PGRST301", "hint": null })),
    )
}

/// Whether a row satisfies every `eq.` filter on `id` and `user_id`
fn matches(row: &Value, params: &HashMap<String, String>) -> bool {
    ["id", "user_id"].iter().all(|column| {
        params.get(*column).map_or(true, |filter| {
            filter
                .strip_prefix("eq.")
                .is_some_and(|wanted| row[*column].as_str() == Some(wanted))
        })
    })
}

fn created_at(row: &Value) -> DateTime<Utc> {
    row["created_at"]
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map_or(DateTime::<Utc>::MIN_UTC, |dt| dt.with_timezone(&Utc))
}

async fn list_rows(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, Rejection> {
    backend.authorize(&headers)?;
    let mut rows: Vec<Value> = backend
        .rows()
        .into_iter()
        .filter(|row| matches(row, &params))
        .collect();
    if params.get("order").map(String::as_str) == Some("created_at.desc") {
        rows.sort_by_key(|row| std::cmp::Reverse(created_at(row)));
    }
    Ok(Json(rows))
}

async fn insert_rows(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Json(body): Json<Vec<Value>>,
) -> Result<(StatusCode, Json<Vec<Value>>), Rejection> {
    backend.authorize(&headers)?;
    let mut inserted = Vec::with_capacity(body.len());
    for mut row in body {
        if row["user_id"].as_str().is_none() {
            return Err(reject(StatusCode::BAD_REQUEST, "user_id is required"));
        }
        backend.stamp(&mut row);
        inserted.push(row);
    }
    backend.rows.lock().unwrap().extend(inserted.iter().cloned());

    let wants_rows = headers
        .get("prefer")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("return=representation"));
    Ok((
        StatusCode::CREATED,
        Json(if wants_rows { inserted } else { Vec::new() }),
    ))
}

async fn delete_rows(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<StatusCode, Rejection> {
    backend.authorize(&headers)?;
    backend
        .rows
        .lock()
        .unwrap()
        .retain(|row| !matches(row, &params));
    Ok(StatusCode::NO_CONTENT)
}

async fn patch_rows(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Json(patch): Json<Value>,
) -> Result<Json<Vec<Value>>, Rejection> {
    backend.authorize(&headers)?;
    let mut updated = Vec::new();
    for row in backend.rows.lock().unwrap().iter_mut() {
        if !matches(row, &params) {
            continue;
        }
        if let (Some(target), Some(changes)) = (row.as_object_mut(), patch.as_object()) {
            for (key, value) in changes {
                target.insert(key.clone(), value.clone());
            }
        }
        updated.push(row.clone());
    }
    Ok(Json(updated))
}
