//! Pattern requests, canvas layout, metadata and rendering
//!
//! A [`GenerationRequest`] is consumed once by [`render`] and produces a
//! [`GeneratedPattern`]: the guide lattice, the styled decorative paths and
//! the display metadata. Nothing is cached between calls.

/// Closed set of pattern styles and their static lookup tables
pub mod kind;
/// Canvas dimensions and the guide-dot lattice
pub mod layout;
/// Display metadata derived from a request
pub mod metadata;
/// Sample configurations offered as starting points
pub mod presets;
/// Styling pass and final pattern assembly
pub mod renderer;
/// Validated generation parameters
pub mod request;
/// Catalogue of sample kolams filtered by category
pub mod samples;

pub use kind::PatternType;
pub use layout::{Canvas, GuideGrid};
pub use metadata::{Difficulty, PatternMetadata};
pub use renderer::{GeneratedPattern, Gradient, StyledPath, render};
pub use request::GenerationRequest;
