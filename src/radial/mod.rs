//! # Radial Spatial Projector
//!
//! Projects venue coordinates into a polar display centered on the viewer:
//! great-circle bearing for the angle, a compressed distance ratio for the
//! radius. Angular overlaps are then relaxed apart without ever touching a
//! point's radius, so distance rings stay meaningful. The inverse direction
//! (pan/teleport) turns screen-space gestures back into viewer coordinates.

pub mod project;
pub mod collide;
pub mod pan;

pub use project::{
    project, RadialPoint, FAR_CUTOFF, MAX_RADIUS_M, MIN_RADIUS_RATIO, RADIAL_COMPRESSION,
};
pub use collide::{resolve_collisions, MIN_SEPARATION, RELAX_GAIN, RELAX_PASSES};
pub use pan::{pan, ViewTransform, METERS_PER_DEG_LAT};
