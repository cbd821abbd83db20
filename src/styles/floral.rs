//! Floral motifs: lotus petal rings, stems on the outermost ring

use crate::geometry::{PathSegment, Point};
use crate::styles::{Style, StyleContext, sweep_angle};

/// Per-layer rotation of the petal ring, in radians
const LAYER_TWIST: f64 = 0.3;
/// Petal control points sit this far out relative to the layer radius
const PETAL_WIDTH_SCALE: f64 = 0.4;
/// Half-angle of a petal on the first layer; divided by the layer number
const PETAL_SPREAD: f64 = 0.6;
/// Stem length relative to the layer radius
const STEM_LENGTH_SCALE: f64 = 1.3;
/// Downward sag of the stem curve
const STEM_SAG: f64 = 20.0;

/// Layered lotus petals, at least four layers deep
#[derive(Debug, Clone, Copy, Default)]
pub struct Floral;

impl Floral {
    /// Petals around `layer`
    pub const fn petals(layer: u32) -> u32 {
        8 + layer * 6
    }
}

impl Style for Floral {
    fn layer_count(&self, complexity: u32) -> u32 {
        (complexity + 1).max(4)
    }

    fn radius_divisor(&self) -> f64 {
        2.5
    }

    fn draw_layer(
        &self,
        context: &StyleContext<'_>,
        layer: u32,
        layers: u32,
        paths: &mut Vec<PathSegment>,
    ) {
        let center = context.center;
        let radius = self.layer_radius(context.inner_size, layer, layers);
        let petals = Self::petals(layer);
        let spread = PETAL_SPREAD / f64::from(layer);

        for i in 0..petals {
            let angle = f64::from(layer).mul_add(LAYER_TWIST, sweep_angle(i, petals));
            let tip = Point::polar(center, angle, radius);
            let width = radius * PETAL_WIDTH_SCALE;
            let left = Point::polar(center, angle - spread, width);
            let right = Point::polar(center, angle + spread, width);

            paths.push(
                PathSegment::starting_at(center)
                    .cubic_to(left, left, tip)
                    .cubic_to(right, right, center),
            );

            if layer == layers {
                let stem = Point::polar(center, angle, radius * STEM_LENGTH_SCALE);
                let control = tip.midpoint(stem).offset(0.0, STEM_SAG);
                paths.push(PathSegment::starting_at(tip).quad_to(control, stem));
            }
        }
    }
}
