//! Styling pass and final pattern assembly

use crate::geometry::PathSegment;
use crate::io::configuration::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, STROKE_WIDTH_STEP};
use crate::pattern::{Canvas, GenerationRequest, GuideGrid, PatternMetadata, PatternType};
use crate::styles::{StyleContext, build_paths};

/// Gradients declared in every generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    /// Diagonal red to gold
    Primary,
    /// Horizontal red to amber
    Accent,
    /// Radial deep brown
    Center,
    /// Faint radial fill for guide dots
    GuideDot,
}

impl Gradient {
    /// Element id inside `<defs>`
    pub const fn id(self) -> &'static str {
        match self {
            Self::Primary => "primaryGradient",
            Self::Accent => "accentGradient",
            Self::Center => "centerGradient",
            Self::GuideDot => "guideDotGradient",
        }
    }

    /// Stroke gradient for the path at `index`
    pub const fn for_path(index: usize) -> Self {
        match index % 3 {
            0 => Self::Primary,
            1 => Self::Accent,
            _ => Self::Center,
        }
    }
}

/// Stroke width for the path at `index`: 4.5, 4.0, 3.5, 3.0, repeating
pub fn stroke_width(index: usize) -> f64 {
    ((index % 4) as f64)
        .mul_add(-STROKE_WIDTH_STEP, MAX_STROKE_WIDTH)
        .max(MIN_STROKE_WIDTH)
}

/// A decorative path with its assigned stroke
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPath {
    /// Geometry
    pub segment: PathSegment,
    /// Stroke width
    pub stroke_width: f64,
    /// Stroke gradient
    pub gradient: Gradient,
}

/// A fully rendered pattern ready for display or export
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPattern {
    /// The request this pattern was rendered from
    pub request: GenerationRequest,
    /// Drawing surface
    pub canvas: Canvas,
    /// Background fill color
    pub background: &'static str,
    /// Guide-dot layer
    pub guide: GuideGrid,
    /// Decorative paths in drawing order
    pub paths: Vec<StyledPath>,
    /// Display metadata
    pub metadata: PatternMetadata,
}

/// Render `request` into a complete pattern
///
/// Deterministic: identical requests produce identical patterns, and the
/// seed has no effect on geometry. Requests without a recognized style
/// produce the guide lattice only, with traditional background and
/// metadata fallbacks.
pub fn render(request: &GenerationRequest) -> GeneratedPattern {
    let canvas = Canvas::STANDARD;
    let guide = GuideGrid::new(&canvas, request.grid_size() as usize);
    let context = StyleContext {
        center: canvas.center(),
        inner_size: canvas.inner_size(),
        complexity: request.complexity(),
        guide: &guide,
    };

    let paths: Vec<StyledPath> = build_paths(request.pattern(), &context)
        .into_iter()
        .enumerate()
        .map(|(index, segment)| StyledPath {
            segment,
            stroke_width: stroke_width(index),
            gradient: Gradient::for_path(index),
        })
        .collect();

    tracing::debug!(
        pattern = request.pattern().map_or("unrecognized", PatternType::tag),
        grid_size = request.grid_size(),
        complexity = request.complexity(),
        seed = request.seed(),
        paths = paths.len(),
        "rendered pattern"
    );

    GeneratedPattern {
        request: *request,
        canvas,
        background: request.style_or_fallback().background(),
        guide,
        paths,
        metadata: PatternMetadata::derive(request),
    }
}
