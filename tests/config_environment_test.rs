// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates store selection, required hosted-backend variables, and numeric settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_chef::config::environment::{default_data_dir, parse_project_url};
use pantry_chef::config::{AppConfig, Environment, StoreBackend, StoreConfig};
use pantry_core::errors::{AppResult, ErrorCode};
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

fn load(vars: &[(&str, &str)]) -> AppResult<AppConfig> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    AppConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
}

#[test]
fn test_store_backend_parsing() {
    assert_eq!(StoreBackend::parse("Local").unwrap(), StoreBackend::Local);
    assert_eq!(StoreBackend::parse(" remote ").unwrap(), StoreBackend::Remote);
    assert_eq!(StoreBackend::parse("supabase").unwrap(), StoreBackend::Remote);
    assert_eq!(
        StoreBackend::parse("sqlite").unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}

#[test]
fn test_defaults_select_local_store() {
    let config = load(&[]).unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.store.backend(), StoreBackend::Local);
    assert_eq!(config.http_client.timeout_secs, 30);
    assert_eq!(config.http_client.connect_timeout_secs, 10);
    assert_eq!(config.synthesis_delay, Duration::ZERO);
    match config.store {
        StoreConfig::Local { data_dir } => assert_eq!(data_dir, default_data_dir()),
        StoreConfig::Remote(_) => panic!("expected local store"),
    }
}

#[test]
fn test_data_dir_override() {
    let config = load(&[("PANTRY_DATA_DIR", "/tmp/pantry-test")]).unwrap();
    match config.store {
        StoreConfig::Local { data_dir } => assert_eq!(data_dir, PathBuf::from("/tmp/pantry-test")),
        StoreConfig::Remote(_) => panic!("expected local store"),
    }
}

#[test]
fn test_hosted_variables_select_remote_store() {
    let config = load(&[
        ("SUPABASE_PROJECT_URL", "https://abc.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
    ])
    .unwrap();
    match &config.store {
        StoreConfig::Remote(remote) => {
            assert_eq!(remote.project_url.as_str(), "https://abc.supabase.co/");
            assert_eq!(remote.anon_key, "anon");
        }
        StoreConfig::Local { .. } => panic!("expected remote store"),
    }
    assert!(config.summary().contains("store=remote"));
    assert!(!config.summary().contains("anon"));
}

#[test]
fn test_missing_anon_key_is_fatal() {
    let err = load(&[("SUPABASE_PROJECT_URL", "https://abc.supabase.co")]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains("SUPABASE_ANON_KEY"));
    assert!(err.code.is_fatal());
}

#[test]
fn test_missing_project_url_is_fatal() {
    let err = load(&[("PANTRY_STORE", "remote"), ("SUPABASE_ANON_KEY", "anon")]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains("SUPABASE_PROJECT_URL"));
}

#[test]
fn test_blank_values_count_as_missing() {
    let err = load(&[
        ("PANTRY_STORE", "remote"),
        ("SUPABASE_PROJECT_URL", "   "),
        ("SUPABASE_ANON_KEY", "anon"),
    ])
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}

#[test]
fn test_explicit_local_ignores_hosted_variables() {
    let config = load(&[
        ("PANTRY_STORE", "local"),
        ("SUPABASE_PROJECT_URL", "https://abc.supabase.co"),
    ])
    .unwrap();
    assert_eq!(config.store.backend(), StoreBackend::Local);
}

#[test]
fn test_project_url_validation() {
    assert!(parse_project_url("https://abc.supabase.co").is_ok());
    assert!(parse_project_url("http://127.0.0.1:54321").is_ok());
    assert_eq!(
        parse_project_url("ftp://abc.supabase.co").unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    assert_eq!(
        parse_project_url("not a url").unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}

#[test]
fn test_numeric_settings() {
    let config = load(&[
        ("HTTP_TIMEOUT_SECS", "5"),
        ("HTTP_CONNECT_TIMEOUT_SECS", "2"),
        ("SYNTHESIS_DELAY_MS", "2000"),
        ("ENVIRONMENT", "production"),
    ])
    .unwrap();
    assert_eq!(config.http_client.timeout_secs, 5);
    assert_eq!(config.http_client.connect_timeout_secs, 2);
    assert_eq!(config.synthesis_delay, Duration::from_millis(2_000));
    assert!(config.environment.is_production());

    let err = load(&[("HTTP_TIMEOUT_SECS", "soon")]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    let keys = [
        "PANTRY_STORE",
        "SUPABASE_PROJECT_URL",
        "SUPABASE_ANON_KEY",
        "PANTRY_DATA_DIR",
        "SYNTHESIS_DELAY_MS",
    ];
    let saved: Vec<_> = keys.iter().map(|k| (*k, env::var(k).ok())).collect();

    env::set_var("PANTRY_STORE", "remote");
    env::set_var("SUPABASE_PROJECT_URL", "https://env.supabase.co");
    env::set_var("SUPABASE_ANON_KEY", "env-key");
    env::remove_var("PANTRY_DATA_DIR");
    env::set_var("SYNTHESIS_DELAY_MS", "150");

    let result = AppConfig::from_env();

    for (key, value) in saved {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    let config = result.unwrap();
    assert_eq!(config.store.backend(), StoreBackend::Remote);
    assert_eq!(config.synthesis_delay, Duration::from_millis(150));
}

#[test]
#[serial]
fn test_from_env_missing_hosted_key() {
    let saved: Vec<_> = ["PANTRY_STORE", "SUPABASE_PROJECT_URL", "SUPABASE_ANON_KEY"]
        .iter()
        .map(|k| (*k, env::var(k).ok()))
        .collect();

    env::set_var("PANTRY_STORE", "remote");
    env::set_var("SUPABASE_PROJECT_URL", "https://env.supabase.co");
    env::remove_var("SUPABASE_ANON_KEY");

    let result = AppConfig::from_env();

    for (key, value) in saved {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigMissing);
}
