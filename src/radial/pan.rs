//! Inverse projection: screen-space gestures back to geo coordinates.
//!
//! Dragging moves the viewport, so the viewer's coordinate moves the
//! opposite way: drag right → viewer west, drag down → viewer north
//! (screen y grows downward). The drag vector is first rotated back into
//! true-north terms when the display is rotated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::GeoPoint;

use super::project::MAX_RADIUS_M;

/// Meters per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// Current display transform: how many pixels the outer ring sits from the
/// center (`reference_px`), the zoom factor, and the rotation applied to
/// the whole dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub zoom: f64,
    pub rotation_deg: f64,
    pub reference_px: f64,
}

impl ViewTransform {
    pub fn new(zoom: f64, rotation_deg: f64, reference_px: f64) -> Self {
        Self { zoom, rotation_deg, reference_px }
    }

    /// Ground meters represented by one screen pixel.
    pub fn meters_per_pixel(&self) -> f64 {
        MAX_RADIUS_M / (self.reference_px * self.zoom)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { zoom: 1.0, rotation_deg: 0.0, reference_px: 320.0 }
    }
}

/// Convert a drag delta in pixels into a new viewer coordinate.
pub fn pan(viewer: GeoPoint, drag_px: (f64, f64), view: &ViewTransform) -> GeoPoint {
    let mpp = view.meters_per_pixel();
    let (dx, dy) = drag_px;

    // Undo the display rotation so the delta is north-relative.
    let theta = (-view.rotation_deg).to_radians();
    let rx = dx * theta.cos() - dy * theta.sin();
    let ry = dx * theta.sin() + dy * theta.cos();

    let east_m = -rx * mpp;
    let north_m = ry * mpp;

    // Longitude degrees shrink with cos(lat); bounded away from zero so a
    // polar viewer cannot produce a non-finite coordinate.
    let cos_lat = viewer.lat.to_radians().cos().abs().max(1e-6);
    let new_point = GeoPoint {
        lat: viewer.lat + north_m / METERS_PER_DEG_LAT,
        lng: viewer.lng + east_m / (METERS_PER_DEG_LAT * cos_lat),
    };

    debug!(%viewer, %new_point, dx, dy, "panned viewer");
    new_point
}
