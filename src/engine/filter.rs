//! View filtering.
//!
//! `matches` is a predicate, not a score: it decides whether a venue is
//! shown at all in a given view. It shares the [`VenueClass`] facts with
//! the scorer but never its weights, and it is idempotent: the same
//! venue/context pair always answers the same way.

use crate::model::{Context, Intent, SortMode, TimeLens, Venue, VenueClass};

use super::score::MealBucket;

/// Which consumer is asking. Distance caps only apply to the list view;
/// the radial view has its own geometric cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Radial,
}

/// List-view distance cap in km for a lens, if any.
fn distance_cap_km(lens: TimeLens) -> Option<f64> {
    match lens {
        TimeLens::Now => Some(10.0),
        TimeLens::LaterToday => Some(25.0),
        // Planning view: no cap.
        TimeLens::Tomorrow => None,
    }
}

/// Hour-keyed curation when the user has given no explicit signal at all
/// (no intent, not hunting deals, browsing "now").
fn smart_curation(class: &VenueClass, clock_minutes: u16) -> bool {
    match MealBucket::from_minutes(clock_minutes) {
        MealBucket::Breakfast => class.cafe_like() || class.best_breakfast,
        MealBucket::Lunch => class.best_lunch || class.cafe || class.burger || class.ice_cream,
        MealBucket::Afternoon => class.best_drinks || class.ice_cream || class.bar,
        MealBucket::Dinner | MealBucket::Late => {
            let evening = class.best_dinner || class.best_drinks || class.drinks_signal;
            // A morning café with no dinner/cocktail/beer signal has no
            // business in the evening feed.
            let morning_cafe = class.cafe && !class.evening_tagged;
            evening && !morning_cafe
        }
    }
}

fn intent_rules(venue: &Venue, class: &VenueClass, intent: Intent) -> bool {
    match intent {
        Intent::FancyDinner => venue.formality >= 2 || class.fancy_tag,
        Intent::Drinks => !(class.dessert || class.bakery) && class.drinks_signal,
        Intent::Breakfast => {
            let bar_blocked = class.bar && !class.cafe_like();
            !bar_blocked && (class.best_breakfast || class.cafe)
        }
        Intent::Coffee => {
            let bar_blocked = class.bar && !class.cafe_like();
            !bar_blocked && (class.best_coffee || class.cafe)
        }
        Intent::Lunch => class.best_lunch || class.cafe,
        Intent::Dinner => class.best_dinner,
    }
}

pub(crate) fn matches_classified(
    venue: &Venue,
    class: &VenueClass,
    ctx: &Context,
    view: View,
    distance_km: Option<f64>,
) -> bool {
    if view == View::List {
        if let (Some(cap), Some(km)) = (distance_cap_km(ctx.lens), distance_km) {
            if km > cap {
                return false;
            }
        }
    }

    // Deal hunting requires an active special regardless of intent.
    if ctx.sort == SortMode::Deals && !venue.has_special() {
        return false;
    }

    let curated = ctx.intent.is_none() && ctx.sort != SortMode::Deals && ctx.lens == TimeLens::Now;
    if curated {
        return smart_curation(class, ctx.clock_minutes());
    }

    // Explicit filtering. Tomorrow is a broad planning view: everything
    // that survived the deal check passes.
    if ctx.lens == TimeLens::Tomorrow {
        return true;
    }

    match ctx.intent {
        Some(intent) => intent_rules(venue, class, intent),
        None => true,
    }
}

/// Public predicate form of the filter, deriving classification and
/// distance itself. Missing distance skips the cap rather than excluding
/// the venue.
pub fn matches(venue: &Venue, ctx: &Context, view: View) -> bool {
    let class = VenueClass::of(venue);
    let distance_km = ctx.distance_km_to(venue.location);
    matches_classified(venue, &class, ctx, view, distance_km)
}
