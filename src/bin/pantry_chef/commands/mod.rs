// ABOUTME: Command modules for the pantry-chef CLI
// ABOUTME: Recipe generation, saved-collection management, and option listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

pub mod collection;
pub mod options;
pub mod recipes;
