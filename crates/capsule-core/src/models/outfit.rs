// ABOUTME: Outfit models including slots, score breakdowns, and persistence records
// ABOUTME: Outfit fingerprints are order-independent for session deduplication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::garment::{Garment, Occasion};

/// Slots an outfit candidate can fill
///
/// A valid outfit core is either Top + Bottom or a Dress; the remaining
/// slots are optional and added by the generator based on weather, occasion,
/// and stylist filters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum OutfitSlot {
    /// Upper-body core garment
    Top,
    /// Lower-body core garment
    Bottom,
    /// One-piece core garment (replaces top + bottom)
    Dress,
    /// Layer worn over the core
    Outerwear,
    /// Footwear
    Shoes,
    /// Accessories and bags
    Accessory,
}

/// One garment filling one slot of an outfit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitItem {
    /// The slot this garment fills
    pub slot: OutfitSlot,
    /// The garment itself
    pub garment: Garment,
}

/// A combination of garments considered for recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outfit {
    /// Unique identifier for this candidate
    pub id: Uuid,
    /// Garments making up the outfit, one per filled slot
    pub items: Vec<OutfitItem>,
}

impl Outfit {
    /// Create an outfit from slot/garment pairs
    #[must_use]
    pub fn new(items: Vec<OutfitItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            items,
        }
    }

    /// All garments in the outfit
    pub fn garments(&self) -> impl Iterator<Item = &Garment> {
        self.items.iter().map(|item| &item.garment)
    }

    /// The garment filling the given slot, if any
    #[must_use]
    pub fn slot(&self, slot: OutfitSlot) -> Option<&Garment> {
        self.items
            .iter()
            .find(|item| item.slot == slot)
            .map(|item| &item.garment)
    }

    /// Number of garments in the outfit
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the outfit holds no garments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Order-independent fingerprint of the garment combination
    ///
    /// Two outfits built from the same garments produce the same fingerprint
    /// regardless of item order. Used for session deduplication.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let ids: Vec<Uuid> = self.items.iter().map(|item| item.garment.id()).collect();
        Self::fingerprint_of(&ids)
    }

    /// Fingerprint for an arbitrary garment id set (same algorithm as
    /// [`Outfit::fingerprint`])
    #[must_use]
    pub fn fingerprint_of(garment_ids: &[Uuid]) -> String {
        let mut ids: Vec<String> = garment_ids.iter().map(|id| id.simple().to_string()).collect();
        ids.sort_unstable();
        ids.join("+")
    }

    /// Mean formality across the outfit's garments
    #[must_use]
    pub fn mean_formality(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.garments().map(|g| u32::from(g.formality())).sum();
        f64::from(sum) / self.items.len() as f64
    }

    /// Total warmth across the outfit's garments
    #[must_use]
    pub fn total_warmth(&self) -> u32 {
        self.garments().map(|g| u32::from(g.warmth())).sum()
    }
}

/// Multi-dimensional quality metric for an outfit candidate
///
/// Each dimension is scored 0-100; `total` is the weighted combination
/// computed by the scoring engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// How well the outfit's colors work together (0-100)
    pub color_harmony: f64,
    /// How well the outfit matches the user's style preferences (0-100)
    pub style_matching: f64,
    /// How well the outfit suits the target season and weather (0-100)
    pub season_suitability: f64,
    /// How well the outfit suits the target occasion (0-100)
    pub occasion_suitability: f64,
    /// Weighted total score (0-100)
    pub total: f64,
}

impl ScoreBreakdown {
    /// A breakdown with every dimension at zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            color_harmony: 0.0,
            style_matching: 0.0,
            season_suitability: 0.0,
            occasion_suitability: 0.0,
            total: 0.0,
        }
    }
}

/// An outfit candidate together with its score breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredOutfit {
    /// The outfit candidate
    pub outfit: Outfit,
    /// Per-dimension score breakdown
    pub breakdown: ScoreBreakdown,
    /// Human-readable notes on what drove the score
    pub reasons: Vec<String>,
}

/// An outfit the user chose to keep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedOutfit {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Optional user-assigned name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Garments in the saved outfit
    pub garment_ids: Vec<Uuid>,
    /// Score breakdown at save time, if the outfit came from generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    /// Number of times this outfit has been worn
    pub times_worn: u32,
    /// When this outfit was last worn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<DateTime<Utc>>,
    /// When this outfit was saved
    pub saved_at: DateTime<Utc>,
}

/// A record of an outfit being worn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WearRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// The saved outfit that was worn
    pub outfit_id: Uuid,
    /// Occasion it was worn for, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
    /// When it was worn
    pub worn_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, GarmentBuilder, GarmentCategory};

    fn garment(name: &str, category: GarmentCategory) -> Garment {
        GarmentBuilder::new(name, category, Color::new("white", "#ffffff")).build()
    }

    #[test]
    fn fingerprint_is_order_independent() {
        let top = garment("tee", GarmentCategory::Top);
        let bottom = garment("jeans", GarmentCategory::Bottom);

        let a = Outfit::new(vec![
            OutfitItem {
                slot: OutfitSlot::Top,
                garment: top.clone(),
            },
            OutfitItem {
                slot: OutfitSlot::Bottom,
                garment: bottom.clone(),
            },
        ]);
        let b = Outfit::new(vec![
            OutfitItem {
                slot: OutfitSlot::Bottom,
                garment: bottom,
            },
            OutfitItem {
                slot: OutfitSlot::Top,
                garment: top,
            },
        ]);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn slot_lookup_finds_the_right_garment() {
        let outfit = Outfit::new(vec![OutfitItem {
            slot: OutfitSlot::Shoes,
            garment: garment("sneakers", GarmentCategory::Shoes),
        }]);

        assert!(outfit.slot(OutfitSlot::Shoes).is_some());
        assert!(outfit.slot(OutfitSlot::Top).is_none());
    }
}
