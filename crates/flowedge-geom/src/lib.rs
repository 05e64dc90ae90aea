#![forbid(unsafe_code)]

//! Edge path geometry for routed diagram connections.
//!
//! A layout engine (ELK-style) hands us one or more routed sections per edge. This crate turns
//! the first section into SVG path data:
//! - with bend points: a cubic spline threaded through `[start, ...bends, end]`
//! - without: a single cubic bowed through a control point offset from the midpoint
//!
//! Output is deterministic: the same sections always produce byte-identical path data.

pub mod curve;
pub mod fmt;
pub mod kernel;
pub mod section;
pub mod select;

pub use kernel::{center, center_with_bow, cubic_path};
pub use section::{Point, PointField, RoutedSection, parse_sections};
pub use select::{EdgePath, EdgePathKind, PathOptions, compute_edge_path, select_path};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("edge has no routed sections (layout output missing or empty)")]
    MissingSections,
    #[error("non-finite coordinate in section {section} at {field}: ({x}, {y})")]
    NonFiniteCoordinate {
        section: usize,
        field: PointField,
        x: f64,
        y: f64,
    },
    #[error("routed sections JSON error: {message}")]
    Json { message: String },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
