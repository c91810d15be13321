// ABOUTME: Shared wardrobe fixtures for integration tests and benchmarks
// ABOUTME: Builds deterministic sample garments, wardrobes, and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Test fixtures
//!
//! Deterministic sample data used by integration tests and benchmarks.
//! Not part of the public API contract.

use uuid::Uuid;

use capsule_core::models::{
    Color, Garment, GarmentBuilder, GarmentCategory, Occasion, Season, StyleProfile, StyleTag,
};

/// Build a garment with sensible defaults for tests
#[must_use]
pub fn sample_garment(
    name: &str,
    category: GarmentCategory,
    color_name: &str,
    hex: &str,
) -> GarmentBuilder {
    GarmentBuilder::new(name, category, Color::new(color_name, hex))
        .seasons(Season::all().to_vec())
        .formality(2)
        .warmth(3)
}

/// A small, versatile casual wardrobe that can fill every core slot
#[must_use]
pub fn casual_wardrobe() -> Vec<Garment> {
    vec![
        sample_garment("White tee", GarmentCategory::Top, "white", "#fafafa")
            .style_tags(vec![StyleTag::Casual, StyleTag::Minimalist])
            .occasions(vec![Occasion::Casual, Occasion::Lounge])
            .formality(1)
            .warmth(2)
            .build(),
        sample_garment("Navy oxford", GarmentCategory::Top, "navy", "#1f2a44")
            .style_tags(vec![StyleTag::Classic])
            .occasions(vec![Occasion::Casual, Occasion::Work, Occasion::Date])
            .formality(3)
            .warmth(3)
            .build(),
        sample_garment("Black jeans", GarmentCategory::Bottom, "black", "#16161a")
            .style_tags(vec![StyleTag::Casual, StyleTag::Edgy])
            .occasions(vec![Occasion::Casual, Occasion::Date])
            .formality(2)
            .warmth(4)
            .build(),
        sample_garment("Grey chinos", GarmentCategory::Bottom, "grey", "#7a7d85")
            .style_tags(vec![StyleTag::Classic, StyleTag::Minimalist])
            .occasions(vec![Occasion::Casual, Occasion::Work])
            .formality(3)
            .warmth(4)
            .build(),
        sample_garment("White sneakers", GarmentCategory::Shoes, "white", "#f4f4f0")
            .style_tags(vec![StyleTag::Casual, StyleTag::Sporty])
            .occasions(vec![Occasion::Casual, Occasion::Sport])
            .formality(1)
            .warmth(2)
            .build(),
        sample_garment("Brown boots", GarmentCategory::Shoes, "brown", "#6b4a2f")
            .style_tags(vec![StyleTag::Classic])
            .occasions(vec![Occasion::Casual, Occasion::Work, Occasion::Date])
            .formality(3)
            .warmth(4)
            .build(),
        sample_garment("Denim jacket", GarmentCategory::Outerwear, "denim", "#3a5a7a")
            .style_tags(vec![StyleTag::Casual, StyleTag::Streetwear])
            .occasions(vec![Occasion::Casual])
            .formality(2)
            .warmth(5)
            .layerable(true)
            .build(),
        sample_garment("Leather belt", GarmentCategory::Accessory, "brown", "#5c3d23")
            .style_tags(vec![StyleTag::Classic])
            .formality(3)
            .warmth(0)
            .build(),
    ]
}

/// A larger synthetic wardrobe for generation stress tests and benchmarks
#[must_use]
pub fn synthetic_wardrobe(tops: usize, bottoms: usize, shoes: usize) -> Vec<Garment> {
    let palette = [
        ("white", "#fafafa"),
        ("black", "#16161a"),
        ("navy", "#1f2a44"),
        ("olive", "#6b7a3f"),
        ("burgundy", "#6b2737"),
        ("camel", "#b5895c"),
    ];

    let mut wardrobe = Vec::with_capacity(tops + bottoms + shoes);
    for i in 0..tops {
        let (color_name, hex) = palette[i % palette.len()];
        wardrobe.push(
            sample_garment(&format!("Top {i}"), GarmentCategory::Top, color_name, hex)
                .style_tags(vec![StyleTag::Casual])
                .occasions(vec![Occasion::Casual])
                .build(),
        );
    }
    for i in 0..bottoms {
        let (color_name, hex) = palette[(i + 2) % palette.len()];
        wardrobe.push(
            sample_garment(
                &format!("Bottom {i}"),
                GarmentCategory::Bottom,
                color_name,
                hex,
            )
            .style_tags(vec![StyleTag::Casual])
            .occasions(vec![Occasion::Casual])
            .build(),
        );
    }
    for i in 0..shoes {
        let (color_name, hex) = palette[(i + 4) % palette.len()];
        wardrobe.push(
            sample_garment(&format!("Shoes {i}"), GarmentCategory::Shoes, color_name, hex)
                .style_tags(vec![StyleTag::Casual])
                .occasions(vec![Occasion::Casual])
                .build(),
        );
    }
    wardrobe
}

/// A profile preferring classic and minimalist styles
#[must_use]
pub fn classic_profile(user_id: Uuid) -> StyleProfile {
    let mut profile = StyleProfile::default_for(user_id);
    profile.style_preferences.insert(StyleTag::Classic, 1.0);
    profile.style_preferences.insert(StyleTag::Minimalist, 0.8);
    profile
}
