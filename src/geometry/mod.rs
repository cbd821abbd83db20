//! Planar geometry shared by every pattern style
//!
//! Styles describe their motifs as sequences of path commands over points in
//! canvas coordinates (origin top-left, y pointing down).

/// Path command sequences and SVG path data formatting
pub mod path;
/// Canvas points and polar placement around a center
pub mod point;

pub use path::{PathCommand, PathSegment};
pub use point::Point;
