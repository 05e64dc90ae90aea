//! Chooses how an edge is drawn from its routed sections.

use crate::curve::{DEFAULT_ALPHA, DEFAULT_BETA, Spline};
use crate::kernel::{DEFAULT_BOW, center_with_bow, cubic_path};
use crate::section::{Point, RoutedSection};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathOptions {
    /// Control-point offset for bend-less edges, as a fraction of the edge length.
    pub bow: f64,
    /// Bundle factor for bend-point splines; `1.0` interpolates waypoints exactly.
    pub beta: f64,
    /// Catmull–Rom parameterization for bend-point splines.
    pub alpha: f64,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            bow: DEFAULT_BOW,
            beta: DEFAULT_BETA,
            alpha: DEFAULT_ALPHA,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EdgePathKind {
    /// No bend points: one cubic bowed through `control`.
    Curve { control: Point },
    /// Bend points present: a spline through `waypoints`, in order.
    Spline { waypoints: Vec<Point> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    /// SVG path data.
    pub d: String,
    pub kind: EdgePathKind,
}

/// Path data for an edge, with default options.
pub fn select_path(sections: &[RoutedSection]) -> Result<String> {
    compute_edge_path(sections, &PathOptions::default()).map(|p| p.d)
}

/// Computes the edge path from the first routed section.
///
/// Every section is validated; a missing section list or any non-finite coordinate is a
/// layout-integration bug and is reported instead of drawing something degenerate.
pub fn compute_edge_path(sections: &[RoutedSection], options: &PathOptions) -> Result<EdgePath> {
    let Some(first) = sections.first() else {
        return Err(Error::MissingSections);
    };
    for (i, s) in sections.iter().enumerate() {
        s.validate(i)?;
    }
    if sections.len() > 1 {
        tracing::debug!(
            ignored = sections.len() - 1,
            "edge has multiple routed sections; drawing the first"
        );
    }

    if first.has_bends() {
        let spline = Spline::new(&first.waypoints(), options.beta, options.alpha);
        let d = spline.to_path();
        tracing::debug!(points = spline.waypoints().len(), "edge path: bend-point spline");
        Ok(EdgePath {
            d,
            kind: EdgePathKind::Spline {
                waypoints: spline.waypoints().to_vec(),
            },
        })
    } else {
        let s = first.start_point;
        let t = first.end_point;
        let (cx, cy) = center_with_bow(s.x, s.y, t.x, t.y, options.bow);
        let d = cubic_path(s.x, s.y, cx, cy, t.x, t.y);
        tracing::debug!("edge path: bowed cubic");
        Ok(EdgePath {
            d,
            kind: EdgePathKind::Curve {
                control: Point::new(cx, cy),
            },
        })
    }
}
