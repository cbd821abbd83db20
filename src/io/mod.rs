//! Input/output operations, configuration and error handling

/// Command-line interface and subcommand dispatch
pub mod cli;
/// Canvas constants, parameter ranges and runtime defaults
pub mod configuration;
/// Error types for generation, export and upload handling
pub mod error;
/// Writing generated patterns to disk
pub mod export;
/// Tracing subscriber setup for the binary
pub mod logging;
/// Progress display for batch rendering
pub mod progress;
/// Standalone SVG document serialization
pub mod svg;
