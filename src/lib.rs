//! Procedural kolam pattern generation rendered as standalone SVG documents
//!
//! A request names a dot-grid size, one of five styles and a complexity
//! level. Rendering lays out the guide lattice, draws concentric layers of
//! style-specific motifs, assigns strokes and derives display metadata.
//! Rendering is deterministic and never fails.

#![forbid(unsafe_code)]

/// Upload validation and the sample analysis record
pub mod analysis;
/// Canvas points and path construction
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Requests, layout, metadata and pattern assembly
pub mod pattern;
/// Per-style geometric constructions
pub mod styles;

pub use io::error::{KolamError, Result};
pub use pattern::{GeneratedPattern, GenerationRequest, PatternType, render};
