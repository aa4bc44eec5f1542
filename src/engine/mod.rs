//! # Context-Aware Recommendation Engine
//!
//! Turns the venue snapshot plus a [`Context`] into a ranked, filtered
//! list. Scoring and filtering are two independent passes: the scorer runs
//! over the full set (stable relative order for every consumer), the filter
//! then removes entries for the requesting view.

pub mod score;
pub mod filter;

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::hours;
use crate::model::{Context, SortMode, Venue, VenueClass};

pub use filter::{matches, View};
pub use score::{score, MealBucket};

/// One venue annotated for the current render pass. Purely derived — never
/// persisted, recomputed on every context change.
#[derive(Debug, Clone, Serialize)]
pub struct RankedVenue<'a> {
    pub venue: &'a Venue,
    pub distance_km: Option<f64>,
    pub distance_label: Option<String>,
    pub open: bool,
    pub score: f64,
}

/// Human-readable distance: meters under a kilometer, one-decimal km above.
fn distance_label(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{km:.1} km")
    }
}

/// Score, filter, and order the venue list for the list view.
///
/// Ties are broken by ascending venue id, so equal scores order the same
/// way on every run regardless of sort implementation details.
pub fn rank<'a>(venues: &'a [Venue], ctx: &Context) -> Vec<RankedVenue<'a>> {
    let mut ranked: Vec<RankedVenue<'a>> = venues
        .iter()
        .map(|venue| {
            let class = VenueClass::of(venue);
            let distance_km = ctx.distance_km_to(venue.location);
            let open = hours::is_open_now(venue, ctx.now);
            let score = score::score(venue, &class, ctx, distance_km, open);
            (venue, class, distance_km, open, score)
        })
        .filter(|(venue, class, distance_km, _, _)| {
            filter::matches_classified(venue, class, ctx, View::List, *distance_km)
        })
        .map(|(venue, _, distance_km, open, score)| RankedVenue {
            venue,
            distance_km,
            distance_label: distance_km.map(distance_label),
            open,
            score,
        })
        .collect();

    ranked.sort_by(|a, b| match ctx.sort {
        SortMode::CloseBy => {
            let da = a.distance_km.unwrap_or(f64::INFINITY);
            let db = b.distance_km.unwrap_or(f64::INFINITY);
            da.partial_cmp(&db)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.venue.id.cmp(&b.venue.id))
        }
        SortMode::Best | SortMode::Deals => b
            .score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.venue.id.cmp(&b.venue.id)),
    });

    debug!(
        total = venues.len(),
        shown = ranked.len(),
        lens = ?ctx.lens,
        intent = ?ctx.intent,
        sort = ?ctx.sort,
        "ranked venue list"
    );

    ranked
}
