//! # venuescope — Context-Aware Venue Compass
//!
//! Context-aware venue recommendation plus a radial, viewer-centered
//! spatial layout, as a pure in-memory library.
//!
//! ## Design Principles
//!
//! 1. **Explicit clock and location**: `now` and the viewer coordinate are
//!    always parameters — nothing here reads process time or a GPS.
//! 2. **Clean DTOs**: `Venue`, `Context`, `RankedVenue`, `RadialPoint`
//!    cross all boundaries
//! 3. **Score and filter are independent**: scoring runs over the full set,
//!    filtering removes entries per view
//! 4. **Nothing is fatal**: a bad record degrades to a default or drops out
//!    of one view; it never stops the rest of the set
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use venuescope::{Context, GeoPoint, Intent, Scope, Venue, VenueId};
//!
//! # fn example() -> venuescope::Result<()> {
//! let viewer = GeoPoint::new(52.5200, 13.4050)?;
//! let venues = vec![
//!     Venue::new(VenueId(1), "cafe-luna", "Café Luna", GeoPoint::new(52.5210, 13.4070)?)
//!         .with_category("specialty cafe")
//!         .with_best_for(["coffee", "breakfast"]),
//! ];
//!
//! let now = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let ctx = Context::new(now).with_viewer(viewer).with_intent(Intent::Coffee);
//!
//! let scope = Scope::new(venues);
//! for entry in scope.ranked(&ctx) {
//!     println!("{} ({:?})", entry.venue.name, entry.distance_label);
//! }
//! for point in scope.radial(&ctx) {
//!     println!("{} at {:.0}°", point.venue.name, point.bearing_deg);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Availability | `hours` | `OpeningStatus` or heuristic label |
//! | Rank & filter | `engine` | `Vec<RankedVenue>` for the list view |
//! | Radial layout | `radial` | `Vec<RadialPoint>` for the dial view |
//! | Pan / teleport | `radial::pan` | a new viewer `GeoPoint` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod hours;
pub mod engine;
pub mod radial;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    ClockTime, Context, GeoPoint, Intent, Period, PriceRisk, ServiceSpeed, SortMode, Special,
    TimeLens, Venue, VenueClass, VenueId, WalkIn, WeekSchedule, Weekday,
};

// ============================================================================
// Re-exports: Engines
// ============================================================================

pub use hours::OpeningStatus;
pub use engine::{matches, rank, RankedVenue, View};
pub use radial::{pan, project, resolve_collisions, RadialPoint, ViewTransform};

// ============================================================================
// Top-level Scope handle
// ============================================================================

use tracing::warn;

/// The primary entry point. A `Scope` wraps one venue snapshot and answers
/// both views for any [`Context`].
///
/// Every answer is a pure function of the snapshot and the context, so
/// overlapping invocations are safe and "latest result wins" on the host
/// side is all the coordination required.
pub struct Scope {
    venues: Vec<Venue>,
}

impl Scope {
    /// Wrap an already-materialized venue snapshot.
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// Materialize a snapshot from a JSON array of venue records.
    ///
    /// Malformed records are skipped one-by-one with a warning; a single
    /// bad venue never aborts the batch.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let venues = raw
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<Venue>(record) {
                Ok(venue) => Some(venue),
                Err(err) => {
                    warn!(%err, "skipping malformed venue record");
                    None
                }
            })
            .collect();
        Ok(Self::new(venues))
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Ranked, filtered list for the list view.
    pub fn ranked(&self, ctx: &Context) -> Vec<RankedVenue<'_>> {
        engine::rank(&self.venues, ctx)
    }

    /// Projected, collision-resolved point set for the radial view.
    ///
    /// With no viewer coordinate there is nothing to center on, so the
    /// point set is empty — same contract, no special-casing at call sites.
    pub fn radial(&self, ctx: &Context) -> Vec<RadialPoint<'_>> {
        let Some(viewer) = ctx.viewer else {
            return Vec::new();
        };

        let visible = self
            .venues
            .iter()
            .filter(|venue| engine::matches(venue, ctx, View::Radial));
        let mut points = radial::project(visible, viewer);
        radial::resolve_collisions(&mut points);
        points
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("non-finite coordinate: lat={lat}, lng={lng}")]
    NonFiniteCoordinate { lat: f64, lng: f64 },

    #[error("malformed clock time {0:?}: expected zero-padded 24h HHMM")]
    MalformedClockTime(String),

    #[error("venue feed error: {0}")]
    Feed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
