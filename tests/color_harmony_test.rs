// ABOUTME: Integration tests for color harmony scoring through the public API
// ABOUTME: Verifies neutral, complementary, and clashing palettes rank sensibly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use capsule_server::intelligence::color_harmony::{
    colorful_share, harmony_score, outfit_color_profiles, ColorProfile, PairRelation,
};
use capsule_server::models::{Color, GarmentBuilder, GarmentCategory};

fn profile(hex: &str) -> ColorProfile {
    ColorProfile::from_color(&Color::new("swatch", hex)).expect("valid hex")
}

#[test]
fn palette_rankings_follow_harmony_theory() {
    // Navy + white (neutral anchor) beats orange + green (clash)
    let anchored = harmony_score(&[profile("#1f2a44"), profile("#fafafa")]);
    let clashing = harmony_score(&[profile("#ff8000"), profile("#00c000")]);
    assert!(anchored > clashing);

    // Blue + orange complementary scores at least as well as blue + random
    let complementary = harmony_score(&[profile("#1560bd"), profile("#e8742c")]);
    assert!(complementary >= 80.0);
}

#[test]
fn garment_colors_flow_into_profiles() {
    let garment = GarmentBuilder::new(
        "Color-blocked sweater",
        GarmentCategory::Top,
        Color::new("teal", "#0f6b6b"),
    )
    .secondary_color(Color::new("cream", "#f5efe0"))
    .build();

    let profiles = outfit_color_profiles(&[&garment]);
    assert_eq!(profiles.len(), 2);
    assert!(!profiles[0].neutral);
    assert!(profiles[1].neutral);
    assert!(colorful_share(&profiles) > 0.4);
    assert!(colorful_share(&profiles) < 0.6);
}

#[test]
fn invalid_hex_colors_are_skipped_not_fatal() {
    let garment = GarmentBuilder::new(
        "Mystery item",
        GarmentCategory::Top,
        Color::new("unknown", "#nothex"),
    )
    .build();

    let profiles = outfit_color_profiles(&[&garment]);
    assert!(profiles.is_empty());
    assert!(harmony_score(&profiles).abs() < f64::EPSILON);
}

#[test]
fn relation_classification_is_symmetric() {
    let pairs = [
        ("#ff0000", "#00ffff"),
        ("#ff0000", "#ff8800"),
        ("#808080", "#ff0000"),
    ];
    for (a, b) in pairs {
        let left = PairRelation::classify(&profile(a), &profile(b));
        let right = PairRelation::classify(&profile(b), &profile(a));
        assert_eq!(left, right, "asymmetric for {a}/{b}");
    }
}
