//! Geometric patterns: nested polygons alternating straight and curved edges

use crate::geometry::{PathSegment, Point};
use crate::styles::{Style, StyleContext, sweep_angle};
use std::f64::consts::{FRAC_PI_2, PI};

/// Perpendicular offset of curved-edge control points relative to the radius
const ARC_OFFSET_SCALE: f64 = 0.3;

/// Concentric polygons, `complexity + 2` layers
#[derive(Debug, Clone, Copy, Default)]
pub struct Geometric;

/// A polygon corner and the angle it was placed at
#[derive(Debug, Clone, Copy)]
struct Vertex {
    point: Point,
    angle: f64,
}

impl Geometric {
    /// Polygon sides on `layer`
    pub const fn sides(layer: u32) -> u32 {
        6 + layer * 2
    }

    /// Whether `layer` joins its vertices with curves instead of straight edges
    pub const fn has_curved_edges(layer: u32) -> bool {
        layer % 2 == 0
    }
}

impl Style for Geometric {
    fn layer_count(&self, complexity: u32) -> u32 {
        complexity + 2
    }

    fn radius_divisor(&self) -> f64 {
        2.3
    }

    fn draw_layer(
        &self,
        context: &StyleContext<'_>,
        layer: u32,
        layers: u32,
        paths: &mut Vec<PathSegment>,
    ) {
        let radius = self.layer_radius(context.inner_size, layer, layers);
        let sides = Self::sides(layer);
        let twist = f64::from(layer) * PI / f64::from(sides);

        let vertices: Vec<Vertex> = (0..sides)
            .map(|i| {
                let angle = sweep_angle(i, sides) + twist;
                Vertex {
                    point: Point::polar(context.center, angle, radius),
                    angle,
                }
            })
            .collect();

        let successors = vertices.iter().cycle().skip(1);
        for (current, next) in vertices.iter().zip(successors) {
            let edge = PathSegment::starting_at(current.point);
            if Self::has_curved_edges(layer) {
                let midpoint = current.point.midpoint(next.point);
                let control = Point::polar(
                    midpoint,
                    current.angle + FRAC_PI_2,
                    radius * ARC_OFFSET_SCALE,
                );
                paths.push(edge.quad_to(control, next.point));
            } else {
                paths.push(edge.line_to(next.point));
            }
        }

        // Star diagonals from every other vertex to its opposite
        if layer > 1 {
            let half = vertices.len() / 2;
            for (index, current) in vertices.iter().enumerate().step_by(2) {
                if let Some(opposite) = vertices.get((index + half) % vertices.len()) {
                    paths.push(PathSegment::starting_at(current.point).line_to(opposite.point));
                }
            }
        }
    }
}
