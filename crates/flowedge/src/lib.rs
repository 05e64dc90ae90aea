#![forbid(unsafe_code)]

//! An interactive diagram edge.
//!
//! [`Edge`] owns an edge's identity and presentation, memoizes its path data (see
//! [`flowedge_geom`]), instantiates its labels, and turns raw pointer/keyboard events into
//! edge-scoped callbacks carrying the application's payload. It is stateless between renders:
//! everything visual is an input.

pub mod callbacks;
pub mod config;
pub mod edge;
pub mod event;
pub mod label;
pub mod memo;
pub mod render;

pub use callbacks::EdgeCallbacks;
pub use config::EdgeConfig;
pub use edge::{Edge, EdgeProps, InlineStyle};
pub use event::{KeyboardEvent, PointerEvent, SceneEvent, dispatch_bubbling};
pub use flowedge_geom as geom;
pub use flowedge_geom::{Point, RoutedSection};
pub use label::{LabelProps, instantiate_labels};
pub use render::EdgeElement;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] flowedge_geom::Error),
    #[error("invalid edge config: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
