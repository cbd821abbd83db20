//! Sample configurations offered as one-click starting points

use crate::pattern::{GenerationRequest, PatternType};

/// A named starting configuration for the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Display name
    pub name: &'static str,
    /// Dots per side
    pub grid_size: u32,
    /// Style
    pub pattern: PatternType,
    /// Complexity level
    pub complexity: u32,
}

impl Preset {
    /// Request for this preset with the given seed
    pub fn request(&self, seed: u64) -> GenerationRequest {
        GenerationRequest::new(self.grid_size, Some(self.pattern), self.complexity, seed)
    }

    /// Look up a preset by name, ignoring case
    pub fn find(name: &str) -> Option<&'static Self> {
        let name = name.trim();
        PRESETS
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

/// The built-in presets
pub static PRESETS: [Preset; 5] = [
    Preset {
        name: "Sacred Lotus Mandala",
        grid_size: 7,
        pattern: PatternType::Traditional,
        complexity: 4,
    },
    Preset {
        name: "Cosmic Geometry",
        grid_size: 9,
        pattern: PatternType::Geometric,
        complexity: 5,
    },
    Preset {
        name: "Garden of Petals",
        grid_size: 6,
        pattern: PatternType::Floral,
        complexity: 3,
    },
    Preset {
        name: "Celebration Burst",
        grid_size: 8,
        pattern: PatternType::Festival,
        complexity: 4,
    },
    Preset {
        name: "Contemporary Flow",
        grid_size: 5,
        pattern: PatternType::Modern,
        complexity: 3,
    },
];
