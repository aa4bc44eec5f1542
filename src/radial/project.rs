//! Forward projection: geo coordinates → (bearing, radius fraction).

use serde::Serialize;

use crate::model::{GeoPoint, Venue};

/// Display radius in meters — roughly a 15-minute walk.
pub const MAX_RADIUS_M: f64 = 1_200.0;

/// Lower clamp on the normalized distance ratio, so near-viewer venues
/// never collapse into the center point.
pub const MIN_RADIUS_RATIO: f64 = 0.05;

/// Sub-linear compression exponent: spreads near venues apart while
/// squeezing far ones toward the rim.
pub const RADIAL_COMPRESSION: f64 = 0.6;

/// Venues farther than this multiple of [`MAX_RADIUS_M`] are too far to
/// usefully show and are excluded from the projected set.
pub const FAR_CUTOFF: f64 = 1.5;

/// A venue placed on the radial display.
#[derive(Debug, Clone, Serialize)]
pub struct RadialPoint<'a> {
    pub venue: &'a Venue,
    /// Compass bearing from the viewer, degrees `[0, 360)`.
    pub bearing_deg: f64,
    /// Compressed, normalized distance in `[0, 1]`.
    pub radius_frac: f64,
    /// Raw great-circle distance in meters.
    pub distance_m: f64,
}

/// Project venues around `viewer`.
///
/// Venues past the far cutoff, or with degenerate coordinates, are skipped;
/// one bad record never prevents the rest of the set from projecting.
pub fn project<'a, I>(venues: I, viewer: GeoPoint) -> Vec<RadialPoint<'a>>
where
    I: IntoIterator<Item = &'a Venue>,
{
    venues
        .into_iter()
        .filter_map(|venue| {
            let distance_m = viewer.haversine_m(venue.location);
            if !distance_m.is_finite() || distance_m > FAR_CUTOFF * MAX_RADIUS_M {
                return None;
            }

            let ratio = (distance_m / MAX_RADIUS_M).clamp(MIN_RADIUS_RATIO, 1.0);
            let radius_frac = ratio.powf(RADIAL_COMPRESSION);
            let bearing_deg = viewer.initial_bearing_deg(venue.location);

            Some(RadialPoint {
                venue,
                bearing_deg,
                radius_frac,
                distance_m,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VenueId;

    fn viewer() -> GeoPoint {
        GeoPoint::new(52.52, 13.405).unwrap()
    }

    /// Exact meters per degree of latitude on the haversine sphere, so
    /// boundary distances land precisely where the test puts them.
    const M_PER_DEG_LAT: f64 = crate::model::geo::EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

    /// A venue `meters` due north of the viewer.
    fn venue_at_north(id: u64, meters: f64) -> Venue {
        let dlat = meters / M_PER_DEG_LAT;
        Venue::new(
            VenueId(id),
            "v",
            "V",
            GeoPoint::new(52.52 + dlat, 13.405).unwrap(),
        )
    }

    #[test]
    fn test_zero_distance_clamps_to_floor() {
        let v = vec![venue_at_north(1, 0.0)];
        let pts = project(v.iter(), viewer());
        assert_eq!(pts.len(), 1);

        let floor = MIN_RADIUS_RATIO.powf(RADIAL_COMPRESSION);
        assert!(pts[0].radius_frac >= floor);
        assert!((pts[0].radius_frac - floor).abs() < 1e-12);
        assert!(pts[0].radius_frac > 0.0);
    }

    #[test]
    fn test_max_radius_maps_to_one() {
        let v = vec![venue_at_north(1, 1_200.0)];
        let pts = project(v.iter(), viewer());
        assert_eq!(pts.len(), 1);
        assert!((pts[0].radius_frac - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_far_venues_excluded() {
        let v = vec![venue_at_north(1, 1_801.0), venue_at_north(2, 1_799.0)];
        let pts = project(v.iter(), viewer());
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].venue.id, VenueId(2));
    }

    #[test]
    fn test_radius_between_rim_and_cutoff_pins_to_rim() {
        let v = vec![venue_at_north(1, 1_500.0)];
        let pts = project(v.iter(), viewer());
        assert!((pts[0].radius_frac - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compression_is_sublinear() {
        // Half the max distance should land farther out than half the radius.
        let v = vec![venue_at_north(1, 600.0)];
        let pts = project(v.iter(), viewer());
        assert!(pts[0].radius_frac > 0.5);
        assert!(pts[0].radius_frac < 1.0);
    }

    #[test]
    fn test_bearing_points_north() {
        let v = vec![venue_at_north(1, 500.0)];
        let pts = project(v.iter(), viewer());
        assert!(pts[0].bearing_deg < 0.5 || pts[0].bearing_deg > 359.5);
    }

    #[test]
    fn test_bad_record_does_not_poison_the_set() {
        // Struct-literal venue with a NaN latitude sneaks past the checked
        // constructor; the projector must drop it and keep the rest.
        let mut bad = venue_at_north(1, 100.0);
        bad.location.lat = f64::NAN;
        let good = venue_at_north(2, 100.0);

        let list = vec![bad, good];
        let pts = project(list.iter(), viewer());
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].venue.id, VenueId(2));
    }
}
