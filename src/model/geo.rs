//! Geographic point and great-circle math.
//!
//! Distances use the haversine formula with a spherical Earth
//! (R = 6371 km); bearings are initial great-circle bearings
//! normalized to `[0, 360)`.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS84-style coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Construct a point, rejecting non-finite coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(Error::NonFiniteCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance to `other` in meters (haversine).
    pub fn haversine_m(&self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let dphi = (other.lat - self.lat).to_radians();
        let dlambda = (other.lng - self.lng).to_radians();

        let a = (dphi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn haversine_km(&self, other: GeoPoint) -> f64 {
        self.haversine_m(other) / 1000.0
    }

    /// Initial bearing from `self` toward `other`, in degrees `[0, 360)`.
    pub fn initial_bearing_deg(&self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let dlambda = (other.lng - self.lng).to_radians();

        let y = dlambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
        let deg = y.atan2(x).to_degrees().rem_euclid(360.0);
        // rem_euclid rounds up to the modulus itself for tiny negative inputs
        if deg >= 360.0 { 0.0 } else { deg }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(52.52, 13.405).is_ok());
    }

    #[test]
    fn test_zero_distance() {
        let a = p(52.52, 13.405);
        assert_eq!(a.haversine_m(a), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // One degree of latitude is roughly 111.2 km.
        let a = p(52.0, 13.0);
        let b = p(53.0, 13.0);
        let d = a.haversine_km(b);
        assert!((d - 111.2).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_bearing_cardinals() {
        let origin = p(52.0, 13.0);
        let north = origin.initial_bearing_deg(p(52.01, 13.0));
        let east = origin.initial_bearing_deg(p(52.0, 13.01));
        let south = origin.initial_bearing_deg(p(51.99, 13.0));
        let west = origin.initial_bearing_deg(p(52.0, 12.99));

        assert!(north.abs() < 0.5, "north was {north}");
        assert!((east - 90.0).abs() < 0.5, "east was {east}");
        assert!((south - 180.0).abs() < 0.5, "south was {south}");
        assert!((west - 270.0).abs() < 0.5, "west was {west}");
    }

    #[test]
    fn test_bearing_range() {
        let origin = p(52.0, 13.0);
        for i in 0..36 {
            let theta = f64::from(i) * 10.0_f64.to_radians();
            let target = p(52.0 + 0.02 * theta.cos(), 13.0 + 0.02 * theta.sin());
            let b = origin.initial_bearing_deg(target);
            assert!((0.0..360.0).contains(&b), "bearing {b} out of range");
        }
    }
}
