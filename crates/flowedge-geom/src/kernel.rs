//! Two-point edge geometry: the bow control point and the cubic through it.

use crate::fmt::{emit_cmd_cubic, emit_cmd_pair};

/// Fraction of the segment length the control point is pushed off the midpoint.
pub const DEFAULT_BOW: f64 = 0.2;

/// Control point for bowing the segment `source -> target` into a curve.
///
/// Equivalent to [`center_with_bow`] with [`DEFAULT_BOW`].
pub fn center(source_x: f64, source_y: f64, target_x: f64, target_y: f64) -> (f64, f64) {
    center_with_bow(source_x, source_y, target_x, target_y, DEFAULT_BOW)
}

/// Midpoint of the segment displaced along its left-hand normal (y-down) by
/// `bow * |target - source|`.
///
/// The displacement is `bow * (-dy, dx)`, so no normalization (and no division) happens. A
/// zero-length segment returns the shared point itself. If the displaced point would overflow
/// (coordinates near `f64::MAX`, or an extreme `bow`), the plain midpoint is returned.
pub fn center_with_bow(
    source_x: f64,
    source_y: f64,
    target_x: f64,
    target_y: f64,
    bow: f64,
) -> (f64, f64) {
    if source_x == target_x && source_y == target_y {
        return (source_x, source_y);
    }

    // Halve before adding: `(a + b) / 2` overflows near f64::MAX.
    let mid_x = source_x * 0.5 + target_x * 0.5;
    let mid_y = source_y * 0.5 + target_y * 0.5;
    let off_x = source_y * bow - target_y * bow;
    let off_y = target_x * bow - source_x * bow;

    let (cx, cy) = (mid_x + off_x, mid_y + off_y);
    if cx.is_finite() && cy.is_finite() {
        (cx, cy)
    } else {
        // Bowing would leave the f64 range; the midpoint always fits.
        (mid_x, mid_y)
    }
}

/// A single cubic from source to target bowing toward `center`.
///
/// `center` is treated as the control point of a quadratic curve, and the quadratic is
/// degree-elevated to the equivalent cubic `M s C c1 c2 t`.
pub fn cubic_path(
    source_x: f64,
    source_y: f64,
    center_x: f64,
    center_y: f64,
    target_x: f64,
    target_y: f64,
) -> String {
    const TWO_THIRDS: f64 = 2.0 / 3.0;

    let c1x = source_x + TWO_THIRDS * (center_x - source_x);
    let c1y = source_y + TWO_THIRDS * (center_y - source_y);
    let c2x = target_x + TWO_THIRDS * (center_x - target_x);
    let c2y = target_y + TWO_THIRDS * (center_y - target_y);

    let mut out = String::with_capacity(64);
    emit_cmd_pair(&mut out, 'M', source_x, source_y);
    emit_cmd_cubic(&mut out, c1x, c1y, c2x, c2y, target_x, target_y);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_offset_from_midpoint() {
        let (cx, cy) = center(0.0, 0.0, 10.0, 0.0);
        assert_eq!((cx, cy), (5.0, 2.0));
        assert_ne!((cx, cy), (5.0, 0.0));
    }

    #[test]
    fn center_offset_flips_with_direction() {
        let (_, down) = center(0.0, 0.0, 10.0, 0.0);
        let (_, up) = center(10.0, 0.0, 0.0, 0.0);
        assert!(down > 0.0);
        assert!(up < 0.0);
    }

    #[test]
    fn center_offset_is_perpendicular() {
        let (cx, cy) = center(0.0, 0.0, 0.0, 20.0);
        assert_eq!((cx, cy), (-4.0, 10.0));
    }

    #[test]
    fn center_of_coincident_points_is_the_point() {
        assert_eq!(center(3.5, -7.0, 3.5, -7.0), (3.5, -7.0));
        assert_eq!(center_with_bow(0.0, 0.0, 0.0, 0.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn center_stays_finite_near_f64_limits() {
        let (cx, cy) = center(-1e307, 1e307, 1e307, -1e307);
        assert!(cx.is_finite());
        assert!(cy.is_finite());

        let (cx, cy) = center(f64::MAX, 0.0, f64::MAX, -f64::MAX);
        assert_eq!((cx, cy), (f64::MAX, -f64::MAX * 0.5));

        let (cx, cy) = center_with_bow(0.0, 0.0, 10.0, 0.0, f64::MAX);
        assert_eq!((cx, cy), (5.0, 0.0));
    }

    #[test]
    fn cubic_path_near_f64_limits_keeps_real_coordinates() {
        let (cx, cy) = center(f64::MAX, 0.0, f64::MAX, -f64::MAX);
        let d = cubic_path(f64::MAX, 0.0, cx, cy, f64::MAX, -f64::MAX);
        assert!(!d.contains("inf") && !d.contains("NaN"), "{d}");
        // The control handles sit off the origin: no coordinate collapsed to `0`.
        let coords: Vec<&str> = d[1..].split(|c: char| c == ',' || c == 'C').collect();
        assert_eq!(coords.len(), 8, "{d}");
        assert_eq!(coords.iter().filter(|c| **c == "0").count(), 1, "{d}");
    }

    #[test]
    fn cubic_path_elevates_quadratic() {
        let d = cubic_path(0.0, 0.0, 3.0, 6.0, 6.0, 0.0);
        assert_eq!(d, "M0,0C2,4,4,4,6,0");
    }

    #[test]
    fn cubic_path_for_zero_length_edge_has_no_nan() {
        let (cx, cy) = center(4.0, 4.0, 4.0, 4.0);
        let d = cubic_path(4.0, 4.0, cx, cy, 4.0, 4.0);
        assert_eq!(d, "M4,4C4,4,4,4,4,4");
    }
}
