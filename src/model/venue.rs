//! Venue record: identity, location, and the static attributes the
//! recommendation engine ranks on.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::{GeoPoint, WeekSchedule};

/// Opaque venue identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VenueId(pub u64);

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How welcoming the venue is to people without a reservation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkIn {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceSpeed {
    Fast,
    #[default]
    Medium,
    Slow,
}

/// Likelihood of the bill running higher than the menu suggests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRisk {
    Low,
    #[default]
    Medium,
    High,
}

/// A deal or event active "today". Present or absent, never stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Special {
    pub title: String,
    pub description: String,
}

/// A venue as materialized from the venue store.
///
/// Optional fields default to empty/neutral values so a sparse record ranks
/// and filters without special-casing (missing data is a defined default,
/// never an error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub slug: String,
    pub name: String,
    pub location: GeoPoint,
    /// Free-text classification ("specialty cafe", "cocktail bar", …).
    #[serde(default)]
    pub category: String,
    /// Occasion tags the venue suits: "breakfast", "lunch", "dinner",
    /// "coffee", "drinks", "late", "fancy_dinner", …
    #[serde(default)]
    pub best_for: HashSet<String>,
    #[serde(default)]
    pub walk_in: WalkIn,
    #[serde(default)]
    pub service_speed: ServiceSpeed,
    #[serde(default)]
    pub price_risk: PriceRisk,
    /// 0 (casual) to 3 (fine dining).
    #[serde(default)]
    pub formality: u8,
    #[serde(default)]
    pub booking_likely: bool,
    #[serde(default)]
    pub vibe_tags: HashSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<WeekSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<Special>,
}

impl Venue {
    pub fn new(id: VenueId, slug: impl Into<String>, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            location,
            category: String::new(),
            best_for: HashSet::new(),
            walk_in: WalkIn::default(),
            service_speed: ServiceSpeed::default(),
            price_risk: PriceRisk::default(),
            formality: 0,
            booking_likely: false,
            vibe_tags: HashSet::new(),
            schedule: None,
            special: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_best_for(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.best_for = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_vibe_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.vibe_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_walk_in(mut self, walk_in: WalkIn) -> Self {
        self.walk_in = walk_in;
        self
    }

    pub fn with_service_speed(mut self, speed: ServiceSpeed) -> Self {
        self.service_speed = speed;
        self
    }

    pub fn with_price_risk(mut self, risk: PriceRisk) -> Self {
        self.price_risk = risk;
        self
    }

    /// Formality is a 0–3 scale; larger inputs saturate at 3.
    pub fn with_formality(mut self, level: u8) -> Self {
        self.formality = level.min(3);
        self
    }

    pub fn with_booking_likely(mut self, likely: bool) -> Self {
        self.booking_likely = likely;
        self
    }

    pub fn with_schedule(mut self, schedule: WeekSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn with_special(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.special = Some(Special {
            title: title.into(),
            description: description.into(),
        });
        self
    }

    pub fn has_special(&self) -> bool {
        self.special.is_some()
    }

    pub fn best_for_contains(&self, tag: &str) -> bool {
        self.best_for.contains(tag)
    }

    pub fn vibe_contains(&self, tag: &str) -> bool {
        self.vibe_tags.contains(tag)
    }
}
