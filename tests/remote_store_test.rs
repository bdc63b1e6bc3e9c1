// ABOUTME: Integration tests for the hosted recipe store against an in-process fake REST backend
// ABOUTME: Validates owner scoping, ordering, insert representation, status patches, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{remote_user, sample_recipe, FakeBackend, ANON_KEY, EXPIRED_TOKEN};
use pantry_chef::store::{ListOrder, RecipeStore, RemoteRecipeStore, StoreBackend};
use pantry_core::errors::ErrorCode;
use pantry_core::models::{RecipeInputs, RecipeMetadata, RecipeStatus, TimeAllotment, User};

async fn setup() -> (FakeBackend, RemoteRecipeStore) {
    let (backend, url) = FakeBackend::spawn().await;
    let store = RemoteRecipeStore::with_client(&FakeBackend::config(&url), reqwest::Client::new())
        .unwrap();
    (backend, store)
}

#[tokio::test]
async fn test_backend_and_order() {
    let (_backend, store) = setup().await;
    assert_eq!(store.backend(), StoreBackend::Remote);
    assert_eq!(store.list_order(), ListOrder::NewestFirst);
    assert!(store.table_url().as_str().ends_with("/rest/v1/recipes"));
}

#[tokio::test]
async fn test_save_then_list_round_trip() {
    let (backend, store) = setup().await;
    let user = remote_user("user-a", "ada@example.com");
    let recipe = sample_recipe("Thai Chicken Delight");

    let mut inputs = RecipeInputs::with_ingredients("chicken");
    inputs.time_allotment = Some(TimeAllotment::Under1Hour);
    let saved = store
        .save(
            &user,
            &recipe,
            RecipeStatus::Favorite,
            &RecipeMetadata::from_inputs(&inputs),
        )
        .await
        .unwrap();

    assert!(!saved.id.is_empty());
    assert_eq!(saved.recipe, recipe);
    assert_eq!(saved.status, RecipeStatus::Favorite);
    assert_eq!(saved.estimated_time.as_deref(), Some("Under 1 hour"));

    let rows = backend.rows_for("user-a");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "favorite");
    assert_eq!(rows[0]["servings"], 4);

    let listed = store.list(&user).await.unwrap();
    assert_eq!(listed, vec![saved]);
}

#[tokio::test]
async fn test_list_is_scoped_and_newest_first() {
    let (backend, store) = setup().await;
    backend.seed("user-a", "Oldest", "favorite");
    backend.seed("user-b", "Not mine", "favorite");
    backend.seed("user-a", "Newest", "want-to-try");

    let user = remote_user("user-a", "ada@example.com");
    let names: Vec<_> = store
        .list(&user)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.recipe.name)
        .collect();
    assert_eq!(names, vec!["Newest", "Oldest"]);
}

#[tokio::test]
async fn test_saving_twice_creates_two_rows() {
    let (backend, store) = setup().await;
    let user = remote_user("user-a", "ada@example.com");
    let recipe = sample_recipe("Golden Rice Creation");

    let first = store
        .save(&user, &recipe, RecipeStatus::WantToTry, &RecipeMetadata::default())
        .await
        .unwrap();
    let second = store
        .save(&user, &recipe, RecipeStatus::WantToTry, &RecipeMetadata::default())
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(backend.rows_for("user-a").len(), 2);
}

#[tokio::test]
async fn test_remove_only_targeted_entry() {
    let (backend, store) = setup().await;
    let keep = backend.seed("user-a", "Keep", "favorite");
    let target = backend.seed("user-a", "Drop", "favorite");

    let user = remote_user("user-a", "ada@example.com");
    store.remove(&user, &target).await.unwrap();

    let rows = backend.rows_for("user-a");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], keep.as_str());
}

#[tokio::test]
async fn test_remove_under_other_owner_leaves_row() {
    let (backend, store) = setup().await;
    let owned = backend.seed("user-a", "Ada's", "favorite");

    let intruder = remote_user("user-b", "bob@example.com");
    store.remove(&intruder, &owned).await.unwrap();

    assert_eq!(backend.rows_for("user-a").len(), 1);
}

#[tokio::test]
async fn test_update_status_returns_updated_row() {
    let (backend, store) = setup().await;
    let id = backend.seed("user-a", "Later", "want-to-try");
    let user = remote_user("user-a", "ada@example.com");

    let updated = store
        .update_status(&user, &id, RecipeStatus::Favorite)
        .await
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.status, RecipeStatus::Favorite);
    assert!(updated.updated_at.is_some());
    assert_eq!(backend.rows_for("user-a")[0]["status"], "favorite");
}

#[tokio::test]
async fn test_update_status_of_foreign_row_is_not_found() {
    let (backend, store) = setup().await;
    let id = backend.seed("user-a", "Ada's", "want-to-try");
    let intruder = remote_user("user-b", "bob@example.com");

    let err = store
        .update_status(&intruder, &id, RecipeStatus::Favorite)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.resource_id.as_deref(), Some(id.as_str()));
    assert_eq!(backend.rows_for("user-a")[0]["status"], "want-to-try");
}

#[tokio::test]
async fn test_rejected_token_maps_to_auth_failure() {
    let (_backend, store) = setup().await;
    let user = User::remote("user-a", "ada@example.com").with_access_token(EXPIRED_TOKEN);

    let err = store.list(&user).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
    assert!(err.message.contains("JWT expired"));
}

#[tokio::test]
async fn test_bearer_falls_back_to_public_key() {
    let (backend, store) = setup().await;
    let with_token = remote_user("user-a", "ada@example.com");
    let without_token = User::remote("user-a", "ada@example.com");

    store.list(&with_token).await.unwrap();
    store.list(&without_token).await.unwrap();

    assert_eq!(
        backend.bearers(),
        vec!["token-for-user-a".to_owned(), ANON_KEY.to_owned()]
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_external_service_error() {
    let (_backend, url) = FakeBackend::spawn().await;
    let mut config = FakeBackend::config(&url);
    config.project_url.set_port(Some(1)).unwrap();
    let store = RemoteRecipeStore::with_client(&config, reqwest::Client::new()).unwrap();

    let err = store
        .list(&remote_user("user-a", "ada@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.starts_with("HTTP request failed"));
}
