//! Angle-only collision relaxation.
//!
//! A fixed number of symmetric pairwise passes pushes angularly-close
//! points apart. Only bearings move, never radii, and the pass count is
//! fixed: dense clusters may keep some residual overlap.

use tracing::trace;

use super::project::RadialPoint;

/// Number of relaxation passes.
pub const RELAX_PASSES: usize = 10;

/// Minimum separation between two points, as a fraction of the
/// visualization's half-width.
pub const MIN_SEPARATION: f64 = 0.12;

/// Empirical relaxation gain. Sized so the push overshoots the deficit at
/// every reachable radius: an isolated too-close pair clears the threshold
/// in one pass.
pub const RELAX_GAIN: f64 = 0.85;

/// Wrap an angular difference into `(-180, 180]`.
fn wrap_deg(d: f64) -> f64 {
    let w = d.rem_euclid(360.0);
    if w > 180.0 { w - 360.0 } else { w }
}

/// Normalize a bearing into `[0, 360)`.
fn norm_deg(d: f64) -> f64 {
    let n = d.rem_euclid(360.0);
    // rem_euclid rounds up to the modulus itself for tiny negative inputs
    if n >= 360.0 { 0.0 } else { n }
}

/// Pairwise separation in display space: radial difference plus an
/// arc-length approximation of the angular difference.
fn separation(a: &RadialPoint<'_>, b: &RadialPoint<'_>) -> (f64, f64, f64) {
    let dr = b.radius_frac - a.radius_frac;
    let da_rad = wrap_deg(b.bearing_deg - a.bearing_deg).to_radians();
    let avg_r = (a.radius_frac + b.radius_frac) / 2.0;
    let arc = avg_r * da_rad;
    ((dr * dr + arc * arc).sqrt(), avg_r, da_rad)
}

/// Relax angular overlaps in place. Only `bearing_deg` is mutated.
pub fn resolve_collisions(points: &mut [RadialPoint<'_>]) {
    for pass in 0..RELAX_PASSES {
        let mut pushed = 0usize;

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let (sep, avg_r, da_rad) = separation(&points[i], &points[j]);
                if sep >= MIN_SEPARATION {
                    continue;
                }

                let deficit = MIN_SEPARATION - sep;
                let push_rad = deficit * RELAX_GAIN / (avg_r + 0.1);
                let push_deg = push_rad.to_degrees();
                let dir = if da_rad >= 0.0 { 1.0 } else { -1.0 };

                points[i].bearing_deg = norm_deg(points[i].bearing_deg - dir * push_deg);
                points[j].bearing_deg = norm_deg(points[j].bearing_deg + dir * push_deg);
                pushed += 1;
            }
        }

        trace!(pass, pushed, "collision relaxation pass");
        if pushed == 0 {
            break;
        }
    }
}
