//! Per-style geometric constructions
//!
//! Each style is a stateless unit type implementing [`Style`]. The shared
//! scaffolding in [`build_paths`] walks the concentric layers and lets the
//! style append its motifs for each one. Styles never look at the seed.

/// Ray bursts with arrowhead tips and sparkles
pub mod festival;
/// Layered lotus petals
pub mod floral;
/// Nested polygons with star diagonals
pub mod geometric;
/// Wave-distorted rings with accents
pub mod modern;
/// Radial petal sectors looping around guide dots
pub mod traditional;

use crate::geometry::{PathSegment, Point};
use crate::pattern::{GuideGrid, PatternType};
use std::f64::consts::TAU;

/// Inputs shared by every style for one render
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    /// Canvas center, the origin of every layer
    pub center: Point,
    /// Side length of the padded drawable area
    pub inner_size: f64,
    /// Requested complexity level
    pub complexity: u32,
    /// Guide lattice, used as loop anchors by the traditional style
    pub guide: &'a GuideGrid,
}

/// A concentric-layer construction for one pattern type
pub trait Style {
    /// Number of layers drawn at `complexity`
    fn layer_count(&self, complexity: u32) -> u32;

    /// Divisor scaling layer radii: layer `l` of `n` sits at `l * inner / (n * divisor)`
    fn radius_divisor(&self) -> f64;

    /// Append the paths of `layer` (1-based, innermost first) to `paths`
    fn draw_layer(
        &self,
        context: &StyleContext<'_>,
        layer: u32,
        layers: u32,
        paths: &mut Vec<PathSegment>,
    );

    /// Radius of `layer` out of `layers`
    fn layer_radius(&self, inner_size: f64, layer: u32, layers: u32) -> f64 {
        f64::from(layer) * inner_size / (f64::from(layers) * self.radius_divisor())
    }
}

/// Look up the construction for a pattern type
pub fn style_for(pattern: PatternType) -> &'static dyn Style {
    match pattern {
        PatternType::Traditional => &traditional::Traditional,
        PatternType::Geometric => &geometric::Geometric,
        PatternType::Floral => &floral::Floral,
        PatternType::Festival => &festival::Festival,
        PatternType::Modern => &modern::Modern,
    }
}

/// Build every decorative path for `pattern`, innermost layer first
///
/// Unrecognized patterns produce no paths.
pub fn build_paths(pattern: Option<PatternType>, context: &StyleContext<'_>) -> Vec<PathSegment> {
    let mut paths = Vec::new();
    if let Some(pattern) = pattern {
        let style = style_for(pattern);
        let layers = style.layer_count(context.complexity);
        for layer in 1..=layers {
            style.draw_layer(context, layer, layers, &mut paths);
        }
    }
    paths
}

/// Angle of the `index`-th of `count` evenly spaced directions
pub fn sweep_angle(index: u32, count: u32) -> f64 {
    f64::from(index) * TAU / f64::from(count)
}
