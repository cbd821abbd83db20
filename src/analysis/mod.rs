//! Upload handling for kolam photographs
//!
//! Uploads are validated and decoded but never inspected: the analysis
//! result is a fixed sample record, not a classification.

/// Fixed sample analysis record
pub mod report;
/// Upload validation and decoding
pub mod upload;

pub use report::{AnalysisReport, SimilarPattern};
pub use upload::UploadedImage;
