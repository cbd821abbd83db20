//! Festival bursts: rays with arrowhead tips and a ring of sparkles

use crate::geometry::{PathSegment, Point};
use crate::styles::{Style, StyleContext, sweep_angle};
use std::f64::consts::FRAC_PI_2;

/// Every n-th ray is long and carries an arrowhead
const LONG_RAY_STRIDE: u32 = 3;
/// Short ray length relative to the layer radius
const SHORT_RAY_SCALE: f64 = 0.7;
/// Arrowhead half-width relative to the layer radius
const ARROWHEAD_WIDTH_SCALE: f64 = 0.15;
/// Sparkle distance relative to the outermost radius
const SPARKLE_RADIUS_SCALE: f64 = 1.2;
/// Half the arm length of a sparkle cross
const SPARKLE_SIZE: f64 = 8.0;

/// Ray bursts, `complexity + 3` layers
#[derive(Debug, Clone, Copy, Default)]
pub struct Festival;

impl Festival {
    /// Rays on `layer`
    pub const fn rays(layer: u32) -> u32 {
        12 + layer * 8
    }

    /// Whether ray `index` reaches the full layer radius
    pub const fn is_long_ray(index: u32) -> bool {
        index % LONG_RAY_STRIDE == 0
    }
}

impl Style for Festival {
    fn layer_count(&self, complexity: u32) -> u32 {
        complexity + 3
    }

    fn radius_divisor(&self) -> f64 {
        2.2
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
        let rays = Self::rays(layer);

        for i in 0..rays {
            let angle = sweep_angle(i, rays);
            if Self::is_long_ray(i) {
                let tip = Point::polar(center, angle, radius);
                let width = radius * ARROWHEAD_WIDTH_SCALE;
                let side1 = Point::polar(tip, angle + FRAC_PI_2, width);
                let side2 = Point::polar(tip, angle - FRAC_PI_2, width);
                paths.push(
                    PathSegment::starting_at(center)
                        .line_to(side1)
                        .line_to(tip)
                        .line_to(side2)
                        .close(),
                );
            } else {
                let tip = Point::polar(center, angle, radius * SHORT_RAY_SCALE);
                paths.push(PathSegment::starting_at(center).line_to(tip));
            }
        }

        if layer == layers {
            for i in (0..rays).step_by(LONG_RAY_STRIDE as usize) {
                let spark =
                    Point::polar(center, sweep_angle(i, rays), radius * SPARKLE_RADIUS_SCALE);
                paths.push(sparkle(spark));
            }
        }
    }
}

fn sparkle(at: Point) -> PathSegment {
    PathSegment::starting_at(at.offset(-SPARKLE_SIZE, 0.0))
        .line_to(at.offset(SPARKLE_SIZE, 0.0))
        .move_to(at.offset(0.0, -SPARKLE_SIZE))
        .line_to(at.offset(0.0, SPARKLE_SIZE))
}
