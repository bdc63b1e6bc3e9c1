// ABOUTME: Core types and constants for the Pantry Chef recipe engine
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types and constants for Pantry Chef.
//! It changes rarely, so the main crate recompiles independently of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Preference option sets, recipe types, and the user identity
//! - **constants**: Recipe defaults, storage layout, and environment keys

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
