//! Canvas dimensions and the guide-dot lattice

use crate::geometry::Point;
use crate::io::configuration::{
    CANVAS_PADDING, CANVAS_SIZE, GUIDE_DOT_RADIUS_DIVISOR, MIN_GUIDE_DOT_RADIUS,
};
use ndarray::Array2;

/// Square drawing surface with a uniform margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Width and height
    pub size: f64,
    /// Margin around the drawable area
    pub padding: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Canvas {
    /// The fixed 700x700 canvas with 50 units of padding
    pub const STANDARD: Self = Self {
        size: CANVAS_SIZE,
        padding: CANVAS_PADDING,
    };

    /// Side length of the padded drawable area
    pub fn inner_size(&self) -> f64 {
        2.0f64.mul_add(-self.padding, self.size)
    }

    /// Center of the canvas
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }
}

/// Evenly spaced `n x n` lattice of guide dots inside the padded area
///
/// Dot `[i, j]` sits at column `i + 1` and row `j + 1` of a lattice with
/// `n + 1` cells per side, so no dot touches the padding boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideGrid {
    dots: Array2<Point>,
    cell_size: f64,
    dot_radius: f64,
}

impl GuideGrid {
    /// Lay out a `grid_size x grid_size` lattice on `canvas`
    pub fn new(canvas: &Canvas, grid_size: usize) -> Self {
        let cell_size = canvas.inner_size() / (grid_size + 1) as f64;
        let dot_radius = (cell_size / GUIDE_DOT_RADIUS_DIVISOR).max(MIN_GUIDE_DOT_RADIUS);
        let dots = Array2::from_shape_fn((grid_size, grid_size), |(i, j)| {
            Point::new(
                (i + 1) as f64 * cell_size + canvas.padding,
                (j + 1) as f64 * cell_size + canvas.padding,
            )
        });

        Self {
            dots,
            cell_size,
            dot_radius,
        }
    }

    /// Number of dots per side
    pub fn grid_size(&self) -> usize {
        self.dots.nrows()
    }

    /// Total number of dots
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Whether the lattice has no dots
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Distance between neighbouring dots
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Rendered radius of each dot
    pub const fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    /// Dot at lattice position `[i, j]`
    pub fn get(&self, i: usize, j: usize) -> Option<Point> {
        self.dots.get([i, j]).copied()
    }

    /// All dots in lattice order, `i` outer and `j` inner
    pub fn dots(&self) -> impl Iterator<Item = Point> + '_ {
        self.dots.iter().copied()
    }

    /// Dots strictly closer than `max_distance` to `anchor`
    pub fn near(&self, anchor: Point, max_distance: f64) -> impl Iterator<Item = Point> + '_ {
        self.dots()
            .filter(move |dot| dot.distance(anchor) < max_distance)
    }
}
