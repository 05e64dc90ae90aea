//! Path cache keyed on the value of an edge's routed sections.

use crate::Result;
use flowedge_geom::section::{geometry_fingerprint, same_geometry};
use flowedge_geom::{EdgePath, PathOptions, RoutedSection, compute_edge_path};

#[derive(Debug, Clone)]
struct Entry {
    fingerprint: u64,
    sections: Vec<RoutedSection>,
    options: PathOptions,
    path: Result<EdgePath>,
}

/// Holds the path computed for the last `(sections, options)` pair.
///
/// A lookup with equal inputs returns the stored result without touching the geometry code;
/// anything else recomputes and replaces the entry. Sections are compared by coordinate bits
/// (see [`same_geometry`]), so NaN input still counts as unchanged; ids and shape references do
/// not affect the path and are ignored. Failed computations are stored too, so a
/// broken layout reports the same error on every render.
#[derive(Debug, Clone, Default)]
pub struct PathMemo {
    entry: Option<Entry>,
    computations: u64,
}

impl PathMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        sections: &[RoutedSection],
        options: &PathOptions,
    ) -> Result<&EdgePath> {
        let fingerprint = geometry_fingerprint(sections);
        let entry = match self.entry.take() {
            Some(e)
                if e.fingerprint == fingerprint
                    && e.options == *options
                    && same_geometry(&e.sections, sections) =>
            {
                tracing::trace!(fingerprint, "edge path memo hit");
                e
            }
            _ => {
                self.computations += 1;
                Entry {
                    fingerprint,
                    sections: sections.to_vec(),
                    options: *options,
                    path: compute_edge_path(sections, options).map_err(Into::into),
                }
            }
        };

        match &self.entry.insert(entry).path {
            Ok(path) => Ok(path),
            Err(err) => Err(err.clone()),
        }
    }

    /// Number of times the geometry was actually computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
