//! Shared venue classification.
//!
//! Scoring and filtering both need the same category/tag facts ("is this a
//! café?", "does anything here smell like drinks?"). Deriving them once per
//! venue keeps the two predicates from drifting apart.

use super::Venue;

fn category_has(category: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| category.contains(n))
}

/// Category families and tag facets derived once per venue, consumed by
/// both the scorer and the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueClass {
    pub cafe: bool,
    pub bakery: bool,
    pub bar: bool,
    pub burger: bool,
    pub ice_cream: bool,
    pub dessert: bool,

    /// Category family or tags point at drinks (bar/pub/brewery/cocktail/
    /// wine, a "drinks" best-for tag, or beer/cocktail/wine vibes).
    pub drinks_signal: bool,
    /// Any tag reading as "fancy"/"date".
    pub fancy_tag: bool,
    pub lively: bool,

    pub best_breakfast: bool,
    pub best_lunch: bool,
    pub best_dinner: bool,
    pub best_coffee: bool,
    pub best_drinks: bool,
    pub best_late: bool,
    /// Best-for is exactly `{dinner}` — a dinner-only house.
    pub dinner_only: bool,
    /// Dinner/cocktail/beer shows up somewhere in the tags; a café without
    /// any of these is a "morning café" for evening curation.
    pub evening_tagged: bool,
}

impl VenueClass {
    pub fn of(venue: &Venue) -> Self {
        let category = venue.category.to_lowercase();

        let cafe = category_has(&category, &["cafe", "café", "coffee", "espresso"]);
        let bakery = category_has(&category, &["bakery"]);
        let bar = category_has(&category, &["bar", "pub", "brewery", "taproom", "cocktail", "wine"]);
        let burger = category_has(&category, &["burger"]);
        let ice_cream = category_has(&category, &["ice cream", "gelato"]);
        let dessert = ice_cream || category_has(&category, &["dessert"]);

        let best_breakfast = venue.best_for_contains("breakfast");
        let best_lunch = venue.best_for_contains("lunch");
        let best_dinner = venue.best_for_contains("dinner");
        let best_coffee = venue.best_for_contains("coffee");
        let best_drinks = venue.best_for_contains("drinks");
        let best_late = venue.best_for_contains("late");
        let dinner_only = venue.best_for.len() == 1 && best_dinner;

        let all_tags = || venue.best_for.iter().chain(venue.vibe_tags.iter());
        let fancy_tag = all_tags().any(|t| t.contains("fancy") || t == "date");
        let evening_tagged =
            best_dinner || all_tags().any(|t| t.contains("cocktail") || t.contains("beer"));
        let drinks_signal = bar
            || best_drinks
            || venue
                .vibe_tags
                .iter()
                .any(|t| t.contains("cocktail") || t.contains("wine") || t.contains("beer"));
        let lively = venue.vibe_contains("lively");

        Self {
            cafe,
            bakery,
            bar,
            burger,
            ice_cream,
            dessert,
            drinks_signal,
            fancy_tag,
            lively,
            best_breakfast,
            best_lunch,
            best_dinner,
            best_coffee,
            best_drinks,
            best_late,
            dinner_only,
            evening_tagged,
        }
    }

    /// Café or bakery — the family that gets a pass under breakfast and
    /// coffee intents even when it also pours drinks.
    pub fn cafe_like(&self) -> bool {
        self.cafe || self.bakery
    }
}
