//! Multi-point interpolation for edges that carry explicit bend points.
//!
//! Waypoints are first pulled toward the start→end chord by the bundle factor `beta`
//! (`beta = 1` leaves them untouched), then threaded with a centripetal Catmull–Rom spline
//! emitted as cubic Béziers. Every (bundled) waypoint is the endpoint of an emitted segment, so
//! the drawn curve passes through each one exactly.

use crate::fmt::{emit_cmd_cubic, emit_cmd_pair};
use crate::section::Point;

/// Full bundling: waypoints are interpolated exactly.
pub const DEFAULT_BETA: f64 = 1.0;
/// Centripetal parameterization; avoids cusps and self-intersections on uneven spacing.
pub const DEFAULT_ALPHA: f64 = 0.5;

const EPSILON: f64 = 1e-12;

/// Pulls interior points toward the straight line from the first to the last point.
///
/// `beta` is clamped to `[0, 1]`. At `1` the input is returned unchanged; at `0` every point lands
/// on the chord at its proportional index.
pub fn bundle_points(points: &[Point], beta: f64) -> Vec<Point> {
    let beta = if beta.is_nan() { DEFAULT_BETA } else { beta.clamp(0.0, 1.0) };
    let n = points.len();
    if beta >= 1.0 || n < 3 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[n - 1];
    let dx = last.x - first.x;
    let dy = last.y - first.y;
    let denom = (n - 1) as f64;

    points
        .iter()
        .enumerate()
        .map(|(j, p)| {
            if j == 0 || j == n - 1 {
                return *p;
            }
            let t = j as f64 / denom;
            Point {
                x: beta * p.x + (1.0 - beta) * (first.x + t * dx),
                y: beta * p.y + (1.0 - beta) * (first.y + t * dy),
            }
        })
        .collect()
}

/// An interpolating spline through an ordered list of waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    waypoints: Vec<Point>,
    alpha: f64,
}

impl Spline {
    pub fn new(points: &[Point], beta: f64, alpha: f64) -> Self {
        Self {
            waypoints: bundle_points(points, beta),
            alpha: if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { DEFAULT_ALPHA },
        }
    }

    /// The points the emitted path passes through, in order.
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn to_path(&self) -> String {
        let mut out = String::with_capacity(self.waypoints.len().saturating_mul(64));
        let mut state = CatmullRom::new(self.alpha);
        for p in &self.waypoints {
            state.point(&mut out, p.x, p.y);
        }
        state.line_end(&mut out);
        out
    }
}

/// Streaming Catmull–Rom state: holds a sliding window of the last three points and the
/// `alpha`-powered chord lengths between them.
#[derive(Debug, Clone, Copy)]
struct CatmullRom {
    alpha: f64,
    seen: u8,
    p0: Point,
    p1: Point,
    p2: Point,
    // chord lengths ^alpha and ^(2 alpha) for p0p1, p1p2, p2p3
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl CatmullRom {
    fn new(alpha: f64) -> Self {
        Self {
            alpha,
            seen: 0,
            p0: Point::default(),
            p1: Point::default(),
            p2: Point::default(),
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    /// Emits the segment `p1 -> p2`, with tangents derived from `p0` and `(x, y)`.
    fn segment(&self, out: &mut String, x: f64, y: f64) {
        let Point { x: mut c1x, y: mut c1y } = self.p1;
        let Point { x: mut c2x, y: mut c2y } = self.p2;

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            if n != 0.0 && n.is_finite() {
                c1x = (c1x * a - self.p0.x * self.l12_2a + self.p2.x * self.l01_2a) / n;
                c1y = (c1y * a - self.p0.y * self.l12_2a + self.p2.y * self.l01_2a) / n;
            }
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            if m != 0.0 && m.is_finite() {
                c2x = (c2x * b + self.p1.x * self.l23_2a - x * self.l12_2a) / m;
                c2y = (c2y * b + self.p1.y * self.l23_2a - y * self.l12_2a) / m;
            }
        }

        emit_cmd_cubic(out, c1x, c1y, c2x, c2y, self.p2.x, self.p2.y);
    }

    fn point(&mut self, out: &mut String, x: f64, y: f64) {
        if self.seen != 0 {
            let dx = self.p2.x - x;
            let dy = self.p2.y - y;
            self.l23_2a = (dx * dx + dy * dy).powf(self.alpha);
            self.l23_a = self.l23_2a.sqrt();
        }

        match self.seen {
            0 => {
                self.seen = 1;
                emit_cmd_pair(out, 'M', x, y);
            }
            1 => self.seen = 2,
            2 => {
                self.seen = 3;
                self.segment(out, x, y);
            }
            _ => self.segment(out, x, y),
        }

        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;

        self.p0 = self.p1;
        self.p1 = self.p2;
        self.p2 = Point { x, y };
    }

    fn line_end(&mut self, out: &mut String) {
        match self.seen {
            2 => emit_cmd_pair(out, 'L', self.p2.x, self.p2.y),
            3 => {
                // Close the last segment with a zero-length phantom tangent.
                self.l23_a = 0.0;
                self.l23_2a = 0.0;
                self.segment(out, self.p2.x, self.p2.y);
            }
            _ => {}
        }
    }
}
