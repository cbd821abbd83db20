//! Catalogue of sample kolams browsable by category

use crate::io::error::{KolamError, Result};
use crate::pattern::{Difficulty, PatternType};
use std::fmt;
use std::str::FromStr;

/// A catalogued sample kolam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Display name
    pub name: &'static str,
    /// Style the sample belongs to
    pub category: PatternType,
    /// Suggested skill level
    pub difficulty: Difficulty,
    /// Number of guide dots
    pub dots: u32,
    /// One-line description
    pub description: &'static str,
}

/// The sample catalogue
pub static SAMPLES: [Sample; 4] = [
    Sample {
        name: "Classic Geometric",
        category: PatternType::Traditional,
        difficulty: Difficulty::Beginner,
        dots: 25,
        description: "Simple geometric pattern perfect for beginners",
    },
    Sample {
        name: "Lotus Bloom",
        category: PatternType::Floral,
        difficulty: Difficulty::Intermediate,
        dots: 49,
        description: "Beautiful floral motif with intricate curves",
    },
    Sample {
        name: "Festival Mandala",
        category: PatternType::Festival,
        difficulty: Difficulty::Advanced,
        dots: 81,
        description: "Colorful festival design for celebrations",
    },
    Sample {
        name: "Modern Fusion",
        category: PatternType::Modern,
        difficulty: Difficulty::Intermediate,
        dots: 36,
        description: "Contemporary interpretation of traditional art",
    },
];

/// Category selection for browsing the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFilter {
    /// Every sample
    #[default]
    All,
    /// Samples of one style only
    Category(PatternType),
}

impl SampleFilter {
    /// Tag accepted on the command line for [`SampleFilter::All`]
    pub const ALL_TAG: &'static str = "all";

    /// Whether `sample` passes this filter
    pub fn matches(self, sample: &Sample) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => sample.category == category,
        }
    }

    /// Samples passing this filter, in catalogue order
    pub fn select(self) -> impl Iterator<Item = &'static Sample> {
        SAMPLES.iter().filter(move |sample| self.matches(sample))
    }
}

impl FromStr for SampleFilter {
    type Err = KolamError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_TAG) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Category)
    }
}

impl fmt::Display for SampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_TAG),
            Self::Category(category) => write!(f, "{category}"),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.name, self.difficulty)?;
        writeln!(f, "  {}", self.description)?;
        write!(f, "  {} dots, {}", self.dots, self.category)
    }
}
