// ABOUTME: Criterion benchmarks for the outfit recommendation engine
// ABOUTME: Measures harmony scoring and full generation over synthetic wardrobes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Criterion benchmarks for the outfit recommendation engine.
//!
//! Measures color harmony scoring and the full generation pipeline across
//! wardrobe sizes.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use uuid::Uuid;

use capsule_server::intelligence::color_harmony::{harmony_score, outfit_color_profiles};
use capsule_server::intelligence::generator::{
    GenerationRequest, NoopProgress, OutfitGenerator,
};
use capsule_server::intelligence::session::SessionHistory;
use capsule_server::models::{Garment, Occasion, Season, StyleProfile};
use capsule_server::test_utils::synthetic_wardrobe;

fn casual_request() -> GenerationRequest {
    let mut request = GenerationRequest::for_occasion(Occasion::Casual);
    request.season = Some(Season::Summer);
    request.min_score = Some(0.0);
    request
}

fn bench_harmony_scoring(c: &mut Criterion) {
    let wardrobe = synthetic_wardrobe(20, 20, 10);
    let garments: Vec<&Garment> = wardrobe.iter().collect();
    let profiles = outfit_color_profiles(&garments);

    let mut group = c.benchmark_group("color_harmony");
    group.throughput(Throughput::Elements(profiles.len() as u64));
    group.bench_function("harmony_score_50_colors", |b| {
        b.iter(|| harmony_score(black_box(&profiles)));
    });
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let profile = StyleProfile::default_for(Uuid::new_v4());
    let request = casual_request();

    let mut group = c.benchmark_group("generation");
    for (tops, bottoms, shoes) in [(5, 5, 2), (15, 15, 5), (30, 30, 8)] {
        let wardrobe = synthetic_wardrobe(tops, bottoms, shoes);
        group.throughput(Throughput::Elements((tops * bottoms * shoes) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{tops}x{bottoms}x{shoes}")),
            &wardrobe,
            |b, wardrobe| {
                b.iter(|| {
                    // Fresh session each iteration so dedup doesn't drain results
                    let generator = OutfitGenerator::new(Arc::new(SessionHistory::new()));
                    generator
                        .generate_blocking(
                            Uuid::new_v4(),
                            black_box(wardrobe),
                            &profile,
                            &request,
                            &NoopProgress,
                        )
                        .expect("generation succeeds")
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_harmony_scoring, bench_generation);
criterion_main!(benches);
