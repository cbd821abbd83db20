//! Display metadata derived from a generation request
//!
//! Everything here is a pure function of the request. The rendered geometry
//! is never inspected.

use crate::io::configuration::MINUTES_PER_DOT_LEVEL;
use crate::pattern::{GenerationRequest, PatternType};
use std::fmt;

/// Skill level suggested for drawing a pattern by hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Complexity 1 or 2
    Beginner,
    /// Complexity 3 or 4
    Intermediate,
    /// Complexity 5 and above
    Advanced,
}

impl Difficulty {
    /// Difficulty for a complexity level
    pub const fn for_complexity(complexity: u32) -> Self {
        match complexity {
            0..=2 => Self::Beginner,
            3..=4 => Self::Intermediate,
            _ => Self::Advanced,
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata shown alongside a generated pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMetadata {
    /// Lattice dimensions, e.g. `"7 × 7"`
    pub grid_size_label: String,
    /// Number of guide dots
    pub total_dots: u32,
    /// Style label, absent for unrecognized styles
    pub pattern_type_label: Option<&'static str>,
    /// Requested complexity level
    pub complexity_level: u32,
    /// Estimated drawing time in minutes
    pub estimated_minutes: u32,
    /// Suggested skill level
    pub difficulty: Difficulty,
    /// Traditional name for this style and complexity
    pub traditional_name: &'static str,
    /// Suggested color names
    pub color_palette: [&'static str; 4],
}

impl PatternMetadata {
    /// Derive the metadata for `request`
    pub fn derive(request: &GenerationRequest) -> Self {
        let style = request.style_or_fallback();
        let total_dots = request.grid_size().saturating_mul(request.grid_size());

        Self {
            grid_size_label: format!("{0} × {0}", request.grid_size()),
            total_dots,
            pattern_type_label: request.pattern().map(PatternType::label),
            complexity_level: request.complexity(),
            estimated_minutes: estimated_minutes(total_dots, request.complexity()),
            difficulty: Difficulty::for_complexity(request.complexity()),
            traditional_name: traditional_name(style.traditional_names(), request.complexity()),
            color_palette: style.palette(),
        }
    }
}

/// Drawing time estimate, rounded half away from zero
pub fn estimated_minutes(total_dots: u32, complexity: u32) -> u32 {
    (f64::from(total_dots) * f64::from(complexity) * MINUTES_PER_DOT_LEVEL).round() as u32
}

// Levels are 1-based; anything out of range falls back to the first name
fn traditional_name(names: [&'static str; 5], complexity: u32) -> &'static str {
    let first = names.first().copied().unwrap_or_default();
    complexity
        .checked_sub(1)
        .and_then(|index| names.get(index as usize).copied())
        .unwrap_or(first)
}
