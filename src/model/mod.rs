//! # Venue & Context Model
//!
//! Clean DTOs shared by every engine in the crate.
//! These types cross every boundary: ingestion ↔ hours ↔ engine ↔ radial ↔ host.
//!
//! Design rule: NO clock reads, NO location reads, NO I/O here.
//! This module is pure data — the current time and the viewer position are
//! always explicit inputs carried by [`Context`].

pub mod geo;
pub mod venue;
pub mod schedule;
pub mod context;
pub mod classify;

pub use geo::GeoPoint;
pub use venue::{Venue, VenueId, Special, WalkIn, ServiceSpeed, PriceRisk};
pub use schedule::{WeekSchedule, Weekday, Period, ClockTime};
pub use context::{Context, TimeLens, Intent, SortMode};
pub use classify::VenueClass;
