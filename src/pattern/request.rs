//! Generation parameters as produced by the generator form

use crate::io::configuration::{MAX_COMPLEXITY, MAX_GRID_SIZE, MIN_COMPLEXITY, MIN_GRID_SIZE};
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::pattern::PatternType;

/// Parameters for a single pattern generation
///
/// `pattern` is `None` when the caller supplied a tag that names no known
/// style; such requests render only the guide lattice. Grid size and
/// complexity are always within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    grid_size: u32,
    pattern: Option<PatternType>,
    complexity: u32,
    seed: u64,
}

impl GenerationRequest {
    /// Build a request, clamping grid size and complexity into range
    pub fn new(grid_size: u32, pattern: Option<PatternType>, complexity: u32, seed: u64) -> Self {
        Self {
            grid_size: grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE),
            pattern,
            complexity: complexity.clamp(MIN_COMPLEXITY, MAX_COMPLEXITY),
            seed,
        }
    }

    /// Build a request, rejecting out-of-range grid size or complexity
    ///
    /// # Errors
    ///
    /// Returns [`KolamError::InvalidParameter`] if `grid_size` is outside
    /// 3..=12 or `complexity` is outside 1..=5
    pub fn validated(
        grid_size: u32,
        pattern: Option<PatternType>,
        complexity: u32,
        seed: u64,
    ) -> Result<Self> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(invalid_parameter(
                "grid_size",
                &grid_size,
                &format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"),
            ));
        }
        if !(MIN_COMPLEXITY..=MAX_COMPLEXITY).contains(&complexity) {
            return Err(invalid_parameter(
                "complexity",
                &complexity,
                &format!("must be between {MIN_COMPLEXITY} and {MAX_COMPLEXITY}"),
            ));
        }
        Ok(Self {
            grid_size,
            pattern,
            complexity,
            seed,
        })
    }

    /// Build a validated request from a raw pattern tag
    ///
    /// An empty tag means no style was selected and is refused. A non-empty
    /// tag that names no style is accepted and yields a request without a
    /// pattern.
    ///
    /// # Errors
    ///
    /// Returns [`KolamError::MissingPatternType`] for an empty tag, or the
    /// range errors of [`GenerationRequest::validated`]
    pub fn from_tag(grid_size: u32, tag: &str, complexity: u32, seed: u64) -> Result<Self> {
        if tag.trim().is_empty() {
            return Err(KolamError::MissingPatternType);
        }
        Self::validated(grid_size, PatternType::from_tag(tag), complexity, seed)
    }

    /// Dots per side of the square guide lattice
    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Selected style, if recognized
    pub const fn pattern(&self) -> Option<PatternType> {
        self.pattern
    }

    /// Motif density level
    pub const fn complexity(&self) -> u32 {
        self.complexity
    }

    /// Carried through to the output but not consulted by any geometry
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Style used for lookups, falling back to traditional
    pub fn style_or_fallback(&self) -> PatternType {
        self.pattern.unwrap_or_default()
    }
}
