//! Modern fusion: wave-distorted rings with triangle accents

use crate::geometry::{PathSegment, Point};
use crate::styles::{Style, StyleContext, sweep_angle};

/// Wave lobes per revolution
const WAVE_FREQUENCY: f64 = 3.0;
/// Wave amplitude relative to the layer radius
const WAVE_AMPLITUDE_SCALE: f64 = 0.3;
/// Accent distance relative to the layer radius
const ACCENT_RADIUS_SCALE: f64 = 0.8;
/// Half-width and half-height of an accent triangle
const ACCENT_SIZE: f64 = 12.0;

/// Wave rings, `complexity + 2` layers
#[derive(Debug, Clone, Copy, Default)]
pub struct Modern;

impl Modern {
    /// Wave points on `layer`
    pub const fn segments(layer: u32) -> u32 {
        16 + layer * 4
    }

    /// Accent triangles on `layer`; the innermost layer has none
    pub const fn accents(layer: u32) -> u32 {
        if layer > 1 { layer * 3 } else { 0 }
    }

    /// Distance from the center of the wave point at `angle` on `layer`
    pub fn wave_radius(radius: f64, angle: f64, layer: u32) -> f64 {
        let phase = angle.mul_add(WAVE_FREQUENCY, f64::from(layer));
        (phase.sin() * radius).mul_add(WAVE_AMPLITUDE_SCALE, radius)
    }
}

impl Style for Modern {
    fn layer_count(&self, complexity: u32) -> u32 {
        complexity + 2
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
        let segments = Self::segments(layer);

        let wave: Vec<Point> = (0..segments)
            .map(|i| {
                let angle = sweep_angle(i, segments);
                Point::polar(center, angle, Self::wave_radius(radius, angle, layer))
            })
            .collect();

        let ahead_one = wave.iter().cycle().skip(1);
        let ahead_two = wave.iter().cycle().skip(2);
        for ((current, through), end) in wave.iter().zip(ahead_one).zip(ahead_two) {
            paths.push(PathSegment::starting_at(*current).quad_to(*through, *end));
        }

        let accents = Self::accents(layer);
        for i in 0..accents {
            let at = Point::polar(
                center,
                sweep_angle(i, accents),
                radius * ACCENT_RADIUS_SCALE,
            );
            paths.push(accent(at));
        }
    }
}

fn accent(at: Point) -> PathSegment {
    PathSegment::starting_at(at.offset(0.0, -ACCENT_SIZE))
        .line_to(at.offset(ACCENT_SIZE, ACCENT_SIZE))
        .line_to(at.offset(-ACCENT_SIZE, ACCENT_SIZE))
        .close()
}
