//! Traditional kolam: rings of petal arcs with loops around nearby dots

use crate::geometry::{PathSegment, Point};
use crate::styles::{Style, StyleContext, sweep_angle};

/// Control points sit this far out relative to the layer radius
const CONTROL_RADIUS_SCALE: f64 = 1.6;
/// Loop anchors sit this far out relative to the layer radius
const LOOP_ANCHOR_SCALE: f64 = 0.6;
/// Dots closer than this many cells to an anchor get a loop
const LOOP_REACH_CELLS: f64 = 0.8;
/// Loop radius in cells
const LOOP_RADIUS_CELLS: f64 = 0.3;

/// Radial petal sectors, at least three layers deep
#[derive(Debug, Clone, Copy, Default)]
pub struct Traditional;

impl Traditional {
    /// Petals around `layer`
    pub const fn petals(layer: u32) -> u32 {
        8 + layer * 4
    }
}

impl Style for Traditional {
    fn layer_count(&self, complexity: u32) -> u32 {
        complexity.max(3)
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
        let radius = self.layer_radius(context.inner_size, layer, layers);
        let petals = Self::petals(layer);
        let cell = context.guide.cell_size();

        for i in 0..petals {
            let angle = sweep_angle(i, petals);
            let next_angle = sweep_angle(i + 1, petals);
            let start = Point::polar(context.center, angle, radius);
            let end = Point::polar(context.center, next_angle, radius);
            let control = Point::polar(
                context.center,
                angle + (next_angle - angle) / 2.0,
                radius * CONTROL_RADIUS_SCALE,
            );
            paths.push(PathSegment::starting_at(start).quad_to(control, end));

            if layer > 1 {
                let anchor = Point::polar(context.center, angle, radius * LOOP_ANCHOR_SCALE);
                for dot in context.guide.near(anchor, cell * LOOP_REACH_CELLS) {
                    paths.push(dot_loop(dot, cell * LOOP_RADIUS_CELLS));
                }
            }
        }
    }
}

// Full circle around `dot` drawn as two half arcs
fn dot_loop(dot: Point, radius: f64) -> PathSegment {
    let right = dot.offset(radius, 0.0);
    let left = dot.offset(-radius, 0.0);
    PathSegment::starting_at(right)
        .arc_to(radius, left)
        .arc_to(radius, right)
}
