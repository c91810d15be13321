// ABOUTME: Integration tests for core domain models and their serde contracts
// ABOUTME: Garment JSON shape, outfit fingerprints, and occasion formality bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use capsule_server::models::{
    Color, Garment, GarmentBuilder, GarmentCategory, Occasion, Outfit, OutfitItem, OutfitSlot,
    Season, StyleTag,
};

#[test]
fn garment_serializes_with_snake_case_enums() {
    let garment = GarmentBuilder::new(
        "Linen shirt",
        GarmentCategory::Top,
        Color::new("off-white", "#f2ede4"),
    )
    .style_tags(vec![StyleTag::Minimalist])
    .seasons(vec![Season::Summer])
    .occasions(vec![Occasion::Casual, Occasion::Date])
    .build();

    let json = serde_json::to_value(&garment).unwrap();
    assert_eq!(json["category"], "top");
    assert_eq!(json["style_tags"][0], "minimalist");
    assert_eq!(json["seasons"][0], "summer");
    assert_eq!(json["occasions"][1], "date");
    // Absent optional fields stay out of the payload
    assert!(json.get("secondary_color").is_none());
}

#[test]
fn garment_round_trips_through_json() {
    let garment = GarmentBuilder::new(
        "Raincoat",
        GarmentCategory::Outerwear,
        Color::new("yellow", "#e3b505"),
    )
    .formality(2)
    .warmth(6)
    .layerable(true)
    .build();

    let json = serde_json::to_string(&garment).unwrap();
    let back: Garment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, garment);
}

#[test]
fn fingerprint_of_matches_outfit_fingerprint() {
    let top = GarmentBuilder::new("a", GarmentCategory::Top, Color::new("w", "#ffffff")).build();
    let bottom =
        GarmentBuilder::new("b", GarmentCategory::Bottom, Color::new("k", "#000000")).build();

    let outfit = Outfit::new(vec![
        OutfitItem {
            slot: OutfitSlot::Top,
            garment: top.clone(),
        },
        OutfitItem {
            slot: OutfitSlot::Bottom,
            garment: bottom.clone(),
        },
    ]);

    // Reversed id order still produces the same fingerprint
    assert_eq!(
        outfit.fingerprint(),
        Outfit::fingerprint_of(&[bottom.id(), top.id()])
    );
}

#[test]
fn occasion_bands_are_well_formed() {
    for occasion in [
        Occasion::Casual,
        Occasion::Work,
        Occasion::Business,
        Occasion::Formal,
        Occasion::Party,
        Occasion::Sport,
        Occasion::Lounge,
        Occasion::Date,
    ] {
        let (lo, hi) = occasion.formality_band();
        assert!((1..=5).contains(&lo));
        assert!((1..=5).contains(&hi));
        assert!(lo <= hi, "{occasion} band inverted");
        let target = occasion.formality_target();
        assert!(f64::from(lo) <= target && target <= f64::from(hi));
    }
}

#[test]
fn formal_band_excludes_casual_formality() {
    let (lo, _) = Occasion::Formal.formality_band();
    assert!(lo >= 4);
    let (_, hi) = Occasion::Lounge.formality_band();
    assert!(hi <= 2);
}

#[test]
fn mean_formality_and_total_warmth_aggregate() {
    let make = |formality: u8, warmth: u8| {
        GarmentBuilder::new("x", GarmentCategory::Top, Color::new("w", "#ffffff"))
            .formality(formality)
            .warmth(warmth)
            .build()
    };
    let outfit = Outfit::new(vec![
        OutfitItem {
            slot: OutfitSlot::Top,
            garment: make(2, 3),
        },
        OutfitItem {
            slot: OutfitSlot::Bottom,
            garment: make(4, 5),
        },
    ]);
    assert!((outfit.mean_formality() - 3.0).abs() < f64::EPSILON);
    assert_eq!(outfit.total_warmth(), 8);

    let empty = Outfit::new(Vec::new());
    assert!(empty.is_empty());
    assert!(empty.mean_formality().abs() < f64::EPSILON);
}
