// ABOUTME: Helper modules for the pantry-chef CLI
// ABOUTME: Provides terminal display formatting for recipes and collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

pub mod display;
