//! Routed sections as emitted by an ELK-style layout engine.

use crate::{Error, Result};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Coordinate bits with `-0.0` folded into `0.0`; both render identically.
    fn key_bits(&self) -> (u64, u64) {
        let norm = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
        (norm(self.x), norm(self.y))
    }

    fn hash_bits<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One routed run between a source and a target anchor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_point: Point,
    pub end_point: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bend_points: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_shape: Option<String>,
}

impl RoutedSection {
    pub fn new(start_point: Point, end_point: Point) -> Self {
        Self {
            start_point,
            end_point,
            ..Default::default()
        }
    }

    pub fn with_bend_points(mut self, bend_points: impl IntoIterator<Item = Point>) -> Self {
        self.bend_points = Some(bend_points.into_iter().collect());
        self
    }

    /// Bend points in routing order; empty when the layout gave none.
    pub fn bends(&self) -> &[Point] {
        self.bend_points.as_deref().unwrap_or(&[])
    }

    pub fn has_bends(&self) -> bool {
        !self.bends().is_empty()
    }

    /// `[start, ...bends, end]`.
    pub fn waypoints(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.bends().len() + 2);
        out.push(self.start_point);
        out.extend_from_slice(self.bends());
        out.push(self.end_point);
        out
    }

    /// Rejects NaN/Infinity anywhere in the section. `index` is the section's position in the
    /// edge's section list and is only used for the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        let check = |field: PointField, p: &Point| -> Result<()> {
            if p.is_finite() {
                Ok(())
            } else {
                Err(Error::NonFiniteCoordinate {
                    section: index,
                    field,
                    x: p.x,
                    y: p.y,
                })
            }
        };
        check(PointField::Start, &self.start_point)?;
        for (i, p) in self.bends().iter().enumerate() {
            check(PointField::Bend(i), p)?;
        }
        check(PointField::End, &self.end_point)
    }

    fn hash_geometry<H: Hasher>(&self, state: &mut H) {
        self.start_point.hash_bits(state);
        self.end_point.hash_bits(state);
        let bends = self.bends();
        bends.len().hash(state);
        for p in bends {
            p.hash_bits(state);
        }
    }
}

/// Hash over the coordinates of every section. Ids and shape references do not take part:
/// they never influence the path.
pub fn geometry_fingerprint(sections: &[RoutedSection]) -> u64 {
    let mut h = FxHasher::default();
    sections.len().hash(&mut h);
    for s in sections {
        s.hash_geometry(&mut h);
    }
    h.finish()
}

/// Bitwise coordinate equality, consistent with [`geometry_fingerprint`].
///
/// Unlike `==` on `f64`, a NaN coordinate equals itself, so unchanged invalid input is
/// recognized as unchanged.
pub fn same_geometry(a: &[RoutedSection], b: &[RoutedSection]) -> bool {
    let same_points = |p: &[Point], q: &[Point]| {
        p.len() == q.len() && p.iter().zip(q).all(|(p, q)| p.key_bits() == q.key_bits())
    };
    a.len() == b.len()
        && a.iter().zip(b).all(|(a, b)| {
            a.start_point.key_bits() == b.start_point.key_bits()
                && a.end_point.key_bits() == b.end_point.key_bits()
                && same_points(a.bends(), b.bends())
        })
}

/// Which point of a section a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointField {
    Start,
    Bend(usize),
    End,
}

impl std::fmt::Display for PointField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("startPoint"),
            Self::Bend(i) => write!(f, "bendPoints[{i}]"),
            Self::End => f.write_str("endPoint"),
        }
    }
}

/// Parses an ELK-shaped `sections` array.
pub fn parse_sections(json: &str) -> Result<Vec<RoutedSection>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_elk_sections() {
        let sections = parse_sections(
            r#"[{
                "id": "e1_s0",
                "startPoint": {"x": 12, "y": 20.5},
                "endPoint": {"x": 100, "y": 20.5},
                "bendPoints": [{"x": 50, "y": 60}],
                "incomingShape": "n1",
                "outgoingShape": "n2"
            }]"#,
        )
        .expect("valid sections");
        assert_eq!(sections.len(), 1);
        let s = &sections[0];
        assert_eq!(s.id.as_deref(), Some("e1_s0"));
        assert_eq!(s.start_point, Point::new(12.0, 20.5));
        assert_eq!(s.bends(), &[Point::new(50.0, 60.0)]);
        assert_eq!(s.outgoing_shape.as_deref(), Some("n2"));
    }

    #[test]
    fn absent_and_empty_bends_are_equivalent() {
        let absent = RoutedSection::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let empty = absent.clone().with_bend_points([]);
        assert!(!absent.has_bends());
        assert!(!empty.has_bends());
        assert_eq!(
            geometry_fingerprint(std::slice::from_ref(&absent)),
            geometry_fingerprint(std::slice::from_ref(&empty))
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_sections(r#"[{"startPoint": {"x": 0}}]"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn validate_reports_offending_point() {
        let s = RoutedSection::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .with_bend_points([Point::new(0.5, 0.5), Point::new(f64::NAN, 0.0)]);
        let err = s.validate(3).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFiniteCoordinate {
                section: 3,
                field: PointField::Bend(1),
                ..
            }
        ));
        assert!(err.to_string().contains("bendPoints[1]"));
    }

    #[test]
    fn same_geometry_treats_nan_as_unchanged() {
        let a = vec![RoutedSection::new(Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0))];
        assert!(same_geometry(&a, &a.clone()));
        let b = vec![RoutedSection::new(Point::new(-0.0, 0.0), Point::new(1.0, 1.0))];
        let c = vec![RoutedSection::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))];
        assert!(same_geometry(&b, &c));
        assert!(!same_geometry(&a, &c));
        assert!(!same_geometry(&c, &[]));
    }

    #[test]
    fn fingerprint_ignores_ids_but_not_order() {
        let a = RoutedSection::new(Point::new(0.0, 0.0), Point::new(9.0, 0.0))
            .with_bend_points([Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        let mut b = a.clone();
        b.id = Some("other".to_string());
        let c = RoutedSection::new(Point::new(0.0, 0.0), Point::new(9.0, 0.0))
            .with_bend_points([Point::new(2.0, 2.0), Point::new(1.0, 1.0)]);
        assert_eq!(
            geometry_fingerprint(std::slice::from_ref(&a)),
            geometry_fingerprint(std::slice::from_ref(&b))
        );
        assert_ne!(
            geometry_fingerprint(std::slice::from_ref(&a)),
            geometry_fingerprint(std::slice::from_ref(&c))
        );
    }
}
