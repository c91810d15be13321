// ABOUTME: Wardrobe garment models including Garment, GarmentBuilder, and related enums
// ABOUTME: Categories, seasons, occasions, style tags, formality and warmth attributes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::outfit::OutfitSlot;
use super::Color;
use crate::constants::garment_ranges::{MAX_FORMALITY, MAX_WARMTH, MIN_FORMALITY};

/// Enumeration of supported garment categories
///
/// Each category maps to the outfit slot it fills during candidate
/// generation. Bags and accessories share the accessory slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    /// Shirts, blouses, t-shirts, sweaters
    Top,
    /// Trousers, jeans, skirts, shorts
    Bottom,
    /// One-piece garments (dresses, jumpsuits)
    Dress,
    /// Jackets, coats, blazers, cardigans worn over a core outfit
    Outerwear,
    /// All footwear
    Shoes,
    /// Jewelry, scarves, belts, hats
    Accessory,
    /// Handbags, backpacks, totes
    Bag,
}

impl GarmentCategory {
    /// The outfit slot this category fills
    #[must_use]
    pub const fn slot(&self) -> OutfitSlot {
        match self {
            Self::Top => OutfitSlot::Top,
            Self::Bottom => OutfitSlot::Bottom,
            Self::Dress => OutfitSlot::Dress,
            Self::Outerwear => OutfitSlot::Outerwear,
            Self::Shoes => OutfitSlot::Shoes,
            Self::Accessory | Self::Bag => OutfitSlot::Accessory,
        }
    }

    /// All categories, in display order
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Top,
            Self::Bottom,
            Self::Dress,
            Self::Outerwear,
            Self::Shoes,
            Self::Accessory,
            Self::Bag,
        ]
    }
}

impl std::fmt::Display for GarmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Dress => "dress",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessory => "accessory",
            Self::Bag => "bag",
        };
        write!(f, "{name}")
    }
}

/// Seasons a garment is suited for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// March through May
    Spring,
    /// June through August
    Summer,
    /// September through November
    Fall,
    /// December through February
    Winter,
}

impl Season {
    /// All seasons, in calendar order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Spring, Self::Summer, Self::Fall, Self::Winter]
    }

    /// Season for a calendar month (1-12), northern hemisphere
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    /// Seasons adjacent on the calendar (shoulder seasons)
    #[must_use]
    pub const fn neighbors(&self) -> [Self; 2] {
        match self {
            Self::Spring => [Self::Winter, Self::Summer],
            Self::Summer => [Self::Spring, Self::Fall],
            Self::Fall => [Self::Summer, Self::Winter],
            Self::Winter => [Self::Fall, Self::Spring],
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        };
        write!(f, "{name}")
    }
}

/// Occasions an outfit can be assembled for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    /// Everyday errands and casual outings
    Casual,
    /// Regular office or workplace wear
    Work,
    /// Client meetings, presentations, business travel
    Business,
    /// Weddings, galas, black-tie events
    Formal,
    /// Nights out, celebrations
    Party,
    /// Exercise and athletic activities
    Sport,
    /// At-home comfort wear
    Lounge,
    /// Dinner dates and similar evenings out
    Date,
}

impl Occasion {
    /// Acceptable formality band (inclusive) for this occasion
    #[must_use]
    pub const fn formality_band(&self) -> (u8, u8) {
        match self {
            Self::Lounge => (1, 2),
            Self::Sport => (1, 2),
            Self::Casual => (1, 3),
            Self::Work => (2, 4),
            Self::Date => (2, 4),
            Self::Party => (2, 5),
            Self::Business => (3, 5),
            Self::Formal => (4, 5),
        }
    }

    /// Midpoint of the formality band, used as the scoring target
    #[must_use]
    pub fn formality_target(&self) -> f64 {
        let (lo, hi) = self.formality_band();
        f64::midpoint(f64::from(lo), f64::from(hi))
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Casual => "casual",
            Self::Work => "work",
            Self::Business => "business",
            Self::Formal => "formal",
            Self::Party => "party",
            Self::Sport => "sport",
            Self::Lounge => "lounge",
            Self::Date => "date",
        };
        write!(f, "{name}")
    }
}

/// Style vocabulary used for garment tagging and user preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StyleTag {
    /// Relaxed everyday style
    Casual,
    /// Timeless tailored pieces
    Classic,
    /// Athletic-influenced style
    Sporty,
    /// Urban street fashion
    Streetwear,
    /// Clean lines, restrained palette
    Minimalist,
    /// Flowing fabrics, eclectic prints
    Bohemian,
    /// Soft, feminine detailing
    Romantic,
    /// Dark palettes, statement hardware
    Edgy,
}

impl StyleTag {
    /// All style tags
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Casual,
            Self::Classic,
            Self::Sporty,
            Self::Streetwear,
            Self::Minimalist,
            Self::Bohemian,
            Self::Romantic,
            Self::Edgy,
        ]
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Casual => "casual",
            Self::Classic => "classic",
            Self::Sporty => "sporty",
            Self::Streetwear => "streetwear",
            Self::Minimalist => "minimalist",
            Self::Bohemian => "bohemian",
            Self::Romantic => "romantic",
            Self::Edgy => "edgy",
        };
        write!(f, "{name}")
    }
}

/// Represents a single wardrobe item
///
/// A garment carries everything the recommendation engine scores on:
/// colors, style tags, seasons, occasions, formality and warmth. Fields are
/// private to ensure attribute ranges stay valid - use accessor methods to
/// read and [`GarmentBuilder`] to construct new instances.
///
/// # Examples
///
/// ```rust
/// use capsule_core::models::{Color, GarmentBuilder, GarmentCategory, Season, StyleTag};
///
/// let garment = GarmentBuilder::new(
///     "White oxford shirt",
///     GarmentCategory::Top,
///     Color::new("white", "#f8f8f2"),
/// )
/// .style_tags(vec![StyleTag::Classic, StyleTag::Minimalist])
/// .seasons(vec![Season::Spring, Season::Summer, Season::Fall])
/// .formality(3)
/// .warmth(2)
/// .build();
///
/// assert_eq!(garment.name(), "White oxford shirt");
/// assert_eq!(garment.formality(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Garment {
    id: Uuid,
    name: String,
    category: GarmentCategory,
    primary_color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_color: Option<Color>,
    style_tags: Vec<StyleTag>,
    seasons: Vec<Season>,
    occasions: Vec<Occasion>,
    formality: u8,
    warmth: u8,
    patterned: bool,
    layerable: bool,
    times_worn: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_worn: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Garment {
    /// Unique identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Garment category
    #[must_use]
    pub const fn category(&self) -> GarmentCategory {
        self.category
    }

    /// Primary color
    #[must_use]
    pub const fn primary_color(&self) -> &Color {
        &self.primary_color
    }

    /// Secondary color, if any
    #[must_use]
    pub const fn secondary_color(&self) -> Option<&Color> {
        self.secondary_color.as_ref()
    }

    /// Style tags describing this garment
    #[must_use]
    pub fn style_tags(&self) -> &[StyleTag] {
        &self.style_tags
    }

    /// Seasons this garment suits
    #[must_use]
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Occasions this garment suits
    #[must_use]
    pub fn occasions(&self) -> &[Occasion] {
        &self.occasions
    }

    /// Formality level (1 = very casual, 5 = black tie)
    #[must_use]
    pub const fn formality(&self) -> u8 {
        self.formality
    }

    /// Warmth rating (0 = sheer summer fabric, 10 = heavy winter outerwear)
    #[must_use]
    pub const fn warmth(&self) -> u8 {
        self.warmth
    }

    /// True when the garment carries a visible pattern or print
    #[must_use]
    pub const fn is_patterned(&self) -> bool {
        self.patterned
    }

    /// True when the garment works as a layering piece
    #[must_use]
    pub const fn is_layerable(&self) -> bool {
        self.layerable
    }

    /// Number of times this garment has been worn
    #[must_use]
    pub const fn times_worn(&self) -> u32 {
        self.times_worn
    }

    /// When this garment was last worn
    #[must_use]
    pub const fn last_worn(&self) -> Option<DateTime<Utc>> {
        self.last_worn
    }

    /// When this garment was added to the wardrobe
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The outfit slot this garment fills
    #[must_use]
    pub const fn slot(&self) -> OutfitSlot {
        self.category.slot()
    }

    /// True when this garment is tagged for the given season
    ///
    /// A garment with no season tags is treated as all-season.
    #[must_use]
    pub fn suits_season(&self, season: Season) -> bool {
        self.seasons.is_empty() || self.seasons.contains(&season)
    }

    /// True when this garment is tagged for the given occasion
    ///
    /// A garment with no occasion tags is judged on formality alone.
    #[must_use]
    pub fn suits_occasion(&self, occasion: Occasion) -> bool {
        self.occasions.is_empty() || self.occasions.contains(&occasion)
    }

    /// Both colors of the garment (primary first)
    #[must_use]
    pub fn colors(&self) -> Vec<&Color> {
        match &self.secondary_color {
            Some(secondary) => vec![&self.primary_color, secondary],
            None => vec![&self.primary_color],
        }
    }
}

/// Builder for constructing [`Garment`] instances with validated attributes
///
/// Formality is clamped to 1-5 and warmth to 0-10 at build time, so a built
/// garment always holds in-range attributes.
#[derive(Debug, Clone)]
pub struct GarmentBuilder {
    id: Uuid,
    name: String,
    category: GarmentCategory,
    primary_color: Color,
    secondary_color: Option<Color>,
    style_tags: Vec<StyleTag>,
    seasons: Vec<Season>,
    occasions: Vec<Occasion>,
    formality: u8,
    warmth: u8,
    patterned: bool,
    layerable: bool,
    times_worn: u32,
    last_worn: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl GarmentBuilder {
    /// Start building a garment from its required attributes
    pub fn new(
        name: impl Into<String>,
        category: GarmentCategory,
        primary_color: Color,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            primary_color,
            secondary_color: None,
            style_tags: Vec::new(),
            seasons: Vec::new(),
            occasions: Vec::new(),
            formality: 2,
            warmth: 3,
            patterned: false,
            layerable: false,
            times_worn: 0,
            last_worn: None,
            created_at: Utc::now(),
        }
    }

    /// Use an existing identifier (when loading from storage)
    #[must_use]
    pub const fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Set the secondary color
    #[must_use]
    pub fn secondary_color(mut self, color: Color) -> Self {
        self.secondary_color = Some(color);
        self
    }

    /// Set the style tags
    #[must_use]
    pub fn style_tags(mut self, tags: Vec<StyleTag>) -> Self {
        self.style_tags = tags;
        self
    }

    /// Set the seasons
    #[must_use]
    pub fn seasons(mut self, seasons: Vec<Season>) -> Self {
        self.seasons = seasons;
        self
    }

    /// Set the occasions
    #[must_use]
    pub fn occasions(mut self, occasions: Vec<Occasion>) -> Self {
        self.occasions = occasions;
        self
    }

    /// Set the formality level (clamped to 1-5 at build time)
    #[must_use]
    pub const fn formality(mut self, formality: u8) -> Self {
        self.formality = formality;
        self
    }

    /// Set the warmth rating (clamped to 0-10 at build time)
    #[must_use]
    pub const fn warmth(mut self, warmth: u8) -> Self {
        self.warmth = warmth;
        self
    }

    /// Mark the garment as patterned
    #[must_use]
    pub const fn patterned(mut self, patterned: bool) -> Self {
        self.patterned = patterned;
        self
    }

    /// Mark the garment as a layering piece
    #[must_use]
    pub const fn layerable(mut self, layerable: bool) -> Self {
        self.layerable = layerable;
        self
    }

    /// Set the wear count (when loading from storage)
    #[must_use]
    pub const fn times_worn(mut self, times_worn: u32) -> Self {
        self.times_worn = times_worn;
        self
    }

    /// Set the last-worn timestamp (when loading from storage)
    #[must_use]
    pub const fn last_worn(mut self, last_worn: DateTime<Utc>) -> Self {
        self.last_worn = Some(last_worn);
        self
    }

    /// Set the creation timestamp (when loading from storage)
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Build the garment, clamping attributes to their valid ranges
    #[must_use]
    pub fn build(self) -> Garment {
        Garment {
            id: self.id,
            name: self.name,
            category: self.category,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            style_tags: self.style_tags,
            seasons: self.seasons,
            occasions: self.occasions,
            formality: self.formality.clamp(MIN_FORMALITY, MAX_FORMALITY),
            warmth: self.warmth.min(MAX_WARMTH),
            patterned: self.patterned,
            layerable: self.layerable,
            times_worn: self.times_worn,
            last_worn: self.last_worn,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_clamps_attribute_ranges() {
        let garment = GarmentBuilder::new(
            "Test",
            GarmentCategory::Top,
            Color::new("white", "#ffffff"),
        )
        .formality(9)
        .warmth(99)
        .build();

        assert_eq!(garment.formality(), MAX_FORMALITY);
        assert_eq!(garment.warmth(), MAX_WARMTH);

        let garment = GarmentBuilder::new(
            "Test",
            GarmentCategory::Top,
            Color::new("white", "#ffffff"),
        )
        .formality(0)
        .build();
        assert_eq!(garment.formality(), MIN_FORMALITY);
    }

    #[test]
    fn untagged_garment_suits_every_season_and_occasion() {
        let garment = GarmentBuilder::new(
            "Plain tee",
            GarmentCategory::Top,
            Color::new("grey", "#888888"),
        )
        .build();

        for season in Season::all() {
            assert!(garment.suits_season(season));
        }
        for occasion in [Occasion::Casual, Occasion::Formal, Occasion::Sport] {
            assert!(garment.suits_occasion(occasion));
        }
    }

    #[test]
    fn bag_shares_accessory_slot() {
        assert_eq!(GarmentCategory::Bag.slot(), OutfitSlot::Accessory);
        assert_eq!(GarmentCategory::Accessory.slot(), OutfitSlot::Accessory);
    }
}
