//! Pattern styles and the per-style lookup tables
//!
//! Every table here has a traditional fallback: requests carrying an
//! unrecognized style resolve backgrounds, palettes and names through
//! [`PatternType::default`].

use crate::io::error::KolamError;
use std::fmt;
use std::str::FromStr;

/// One of the five kolam styles the generator knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    /// Radial petal sectors with loops around guide dots
    #[default]
    Traditional,
    /// Nested polygons with curved edges and star diagonals
    Geometric,
    /// Layered lotus petals with stems on the outer ring
    Floral,
    /// Ray bursts with arrowheads and sparkles
    Festival,
    /// Wave-distorted rings with triangular accents
    Modern,
}

impl PatternType {
    /// All styles in the order the generator form lists them
    pub const ALL: [Self; 5] = [
        Self::Traditional,
        Self::Modern,
        Self::Geometric,
        Self::Floral,
        Self::Festival,
    ];

    /// Machine tag used on the command line
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Geometric => "geometric",
            Self::Floral => "floral",
            Self::Festival => "festival",
            Self::Modern => "modern",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Traditional => "Traditional Kolam",
            Self::Geometric => "Geometric",
            Self::Floral => "Floral Motifs",
            Self::Festival => "Festival Special",
            Self::Modern => "Modern Fusion",
        }
    }

    /// One-line description of the style
    pub const fn description(self) -> &'static str {
        match self {
            Self::Traditional => "Classic symmetric patterns",
            Self::Geometric => "Mathematical precision patterns",
            Self::Floral => "Nature-inspired designs",
            Self::Festival => "Celebration patterns",
            Self::Modern => "Contemporary artistic designs",
        }
    }

    /// Canvas background fill
    pub const fn background(self) -> &'static str {
        match self {
            Self::Traditional => "#fef7cd",
            Self::Geometric => "#f8fafc",
            Self::Floral => "#f0fdf4",
            Self::Festival => "#fef3c7",
            Self::Modern => "#f1f5f9",
        }
    }

    /// Named colors suggested for drawing the pattern
    pub const fn palette(self) -> [&'static str; 4] {
        match self {
            Self::Traditional => ["Saffron Gold", "Temple Red", "Sacred White", "Deep Maroon"],
            Self::Geometric => ["Royal Purple", "Golden Yellow", "Ocean Blue", "Pure White"],
            Self::Floral => ["Lotus Pink", "Leaf Green", "Petal Orange", "Sky Blue"],
            Self::Festival => [
                "Vibrant Orange",
                "Celebration Red",
                "Festive Gold",
                "Joyful Pink",
            ],
            Self::Modern => [
                "Contemporary Teal",
                "Urban Gray",
                "Artistic Blue",
                "Modern White",
            ],
        }
    }

    /// Traditional names, one per complexity level
    pub const fn traditional_names(self) -> [&'static str; 5] {
        match self {
            Self::Traditional => [
                "Pulli Kolam",
                "Kambi Kolam",
                "Margazhi Kolam",
                "Rangoli Mandala",
                "Chikku Kolam",
            ],
            Self::Geometric => [
                "Yantra Pattern",
                "Sacred Geometry",
                "Hexagonal Mandala",
                "Star Formation",
                "Crystal Grid",
            ],
            Self::Floral => [
                "Lotus Mandala",
                "Rose Petal Design",
                "Jasmine Pattern",
                "Marigold Circle",
                "Hibiscus Bloom",
            ],
            Self::Festival => [
                "Diwali Special",
                "Pongal Pattern",
                "New Year Design",
                "Celebration Mandala",
                "Joy Burst",
            ],
            Self::Modern => [
                "Contemporary Flow",
                "Urban Mandala",
                "Fusion Pattern",
                "Artistic Expression",
                "Modern Classic",
            ],
        }
    }

    /// Lenient tag lookup: trims and ignores case, `None` for anything else
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
    }
}

impl FromStr for PatternType {
    type Err = KolamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(KolamError::MissingPatternType);
        }
        Self::from_tag(s).ok_or_else(|| KolamError::UnknownPatternType { tag: s.to_string() })
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
