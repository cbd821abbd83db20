//! Fixed sample analysis record shown after an upload

use crate::analysis::UploadedImage;
use std::fmt;

/// A catalogue pattern resembling the upload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarPattern {
    /// Pattern name
    pub name: &'static str,
    /// Similarity score in `[0, 1]`
    pub similarity: f64,
}

/// Analysis result displayed for an uploaded image
///
/// Every field except the image summary is sample data; no image content
/// is examined.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Summary of the uploaded file
    pub image: UploadedImage,
    /// Identified pattern family
    pub pattern_type: &'static str,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// Complexity rating
    pub complexity: &'static str,
    /// Number of dots in the underlying grid
    pub dot_count: u32,
    /// Symmetry class
    pub symmetry: &'static str,
    /// Dominant color names
    pub dominant_colors: [&'static str; 3],
    /// Cultural context of the pattern family
    pub cultural_significance: &'static str,
    /// Closest catalogue patterns, most similar first
    pub similar_patterns: [SimilarPattern; 3],
}

impl AnalysisReport {
    /// Produce the sample report for `image`
    pub const fn sample(image: UploadedImage) -> Self {
        Self {
            image,
            pattern_type: "Traditional Pookalam",
            confidence: 0.89,
            complexity: "High",
            dot_count: 108,
            symmetry: "Radial",
            dominant_colors: ["Deep Red", "Golden Yellow", "White"],
            cultural_significance: "Festival decoration pattern commonly used during Onam celebrations",
            similar_patterns: [
                SimilarPattern {
                    name: "Lotus Kolam",
                    similarity: 0.76,
                },
                SimilarPattern {
                    name: "Rangoli Circular",
                    similarity: 0.71,
                },
                SimilarPattern {
                    name: "Mandala Basic",
                    similarity: 0.68,
                },
            ],
        }
    }

    /// Confidence as a whole percentage
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Identified as {} with {}% confidence",
            self.pattern_type,
            self.confidence_percent()
        )?;
        writeln!(
            f,
            "  Image:        {} ({}x{}, {} bytes)",
            self.image.format_name(),
            self.image.width,
            self.image.height,
            self.image.size_bytes
        )?;
        writeln!(f, "  Complexity:   {}", self.complexity)?;
        writeln!(f, "  Dot count:    {}", self.dot_count)?;
        writeln!(f, "  Symmetry:     {}", self.symmetry)?;
        writeln!(f, "  Colors:       {}", self.dominant_colors.join(", "))?;
        writeln!(f, "  Significance: {}", self.cultural_significance)?;
        writeln!(f, "  Similar patterns:")?;
        for similar in &self.similar_patterns {
            writeln!(
                f,
                "    {:<18} {:>3.0}%",
                similar.name,
                similar.similarity * 100.0
            )?;
        }
        Ok(())
    }
}
