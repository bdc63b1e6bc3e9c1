// ABOUTME: Criterion benchmarks for recipe synthesis and local store writes
// ABOUTME: Measures template expansion for growing ingredient lists and document rewrite cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Criterion benchmarks for recipe synthesis.
//!
//! Synthesis is pure string work; the local store rewrites the whole user
//! document on every save, so its cost grows with the collection size.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pantry_chef::store::{LocalRecipeStore, RecipeStore};
use pantry_chef::synthesizer::{FixedChooser, RecipeSynthesizer};
use pantry_core::models::{CuisineStyle, RecipeInputs, RecipeMetadata, RecipeStatus, User};
use tempfile::TempDir;
use tokio::runtime::Runtime;

const PANTRY: [&str; 8] = [
    "chicken", "rice", "onion", "tomato", "garlic", "ginger", "spinach", "lentils",
];

fn inputs_with(count: usize) -> RecipeInputs {
    let ingredients: Vec<&str> = PANTRY.iter().copied().cycle().take(count).collect();
    let mut inputs = RecipeInputs::with_ingredients(ingredients.join(", "));
    inputs.cuisine_style = Some(CuisineStyle::Thai);
    inputs
}

/// Benchmark synthesis as the ingredient list grows
fn bench_synthesize(c: &mut Criterion) {
    let synthesizer = RecipeSynthesizer::with_chooser(FixedChooser(0));
    let mut group = c.benchmark_group("synthesize");

    for count in [1_usize, 5, 25, 100] {
        let inputs = inputs_with(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("ingredients", count), &inputs, |b, inputs| {
            b.iter(|| synthesizer.synthesize(black_box(inputs)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark a local save against collections of increasing size
fn bench_local_save(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let recipe = RecipeSynthesizer::with_chooser(FixedChooser(3))
        .synthesize(&inputs_with(3))
        .unwrap();
    let metadata = RecipeMetadata::default();
    let mut group = c.benchmark_group("local_save");

    for existing in [0_usize, 50, 500] {
        let dir = TempDir::new().unwrap();
        let store = LocalRecipeStore::new(dir.path());
        let user = User::local("Bench", format!("bench-{existing}@example.com"));
        rt.block_on(async {
            for _ in 0..existing {
                store
                    .save(&user, &recipe, RecipeStatus::Favorite, &metadata)
                    .await
                    .unwrap();
            }
        });

        group.bench_function(BenchmarkId::new("existing", existing), |b| {
            b.iter(|| {
                rt.block_on(async {
                    store
                        .save(&user, black_box(&recipe), RecipeStatus::WantToTry, &metadata)
                        .await
                        .unwrap()
                })
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_synthesize, bench_local_save);
criterion_main!(benches);
