//! Path command sequences rendered as SVG path data
//!
//! A [`PathSegment`] is one drawable unit of a pattern: the styling pass
//! assigns stroke width and gradient per segment, so a segment may hold
//! several subpaths (e.g. the two strokes of a sparkle cross).

use crate::geometry::Point;
use std::fmt;

/// Decimal places kept when writing coordinates
const COORDINATE_PRECISION: usize = 3;

/// A single SVG path command in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Quadratic Bézier curve
    QuadTo {
        /// Control point
        control: Point,
        /// End point
        end: Point,
    },
    /// Cubic Bézier curve
    CubicTo {
        /// First control point
        control1: Point,
        /// Second control point
        control2: Point,
        /// End point
        end: Point,
    },
    /// Circular arc (equal x and y radii, no rotation)
    ArcTo {
        /// Arc radius
        radius: f64,
        /// Take the larger of the two candidate arcs
        large_arc: bool,
        /// Sweep in the positive-angle direction
        sweep: bool,
        /// End point
        end: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// Points referenced by this command, control points included
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Self::MoveTo(point) | Self::LineTo(point) => vec![point],
            Self::QuadTo { control, end } => vec![control, end],
            Self::CubicTo {
                control1,
                control2,
                end,
            } => vec![control1, control2, end],
            Self::ArcTo { end, .. } => vec![end],
            Self::Close => Vec::new(),
        }
    }

    /// Whether this command draws a curve rather than a straight edge
    pub const fn is_curve(&self) -> bool {
        matches!(
            self,
            Self::QuadTo { .. } | Self::CubicTo { .. } | Self::ArcTo { .. }
        )
    }
}

struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.*}", COORDINATE_PRECISION, self.0);
        let trimmed = text.trim_end_matches('0').trim_end_matches('.');
        // Avoid emitting "-0" for values that round to zero
        if trimmed == "-0" {
            f.write_str("0")
        } else {
            f.write_str(trimmed)
        }
    }
}

struct Pair(Point);

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Coord(self.0.x), Coord(self.0.y))
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MoveTo(point) => write!(f, "M {}", Pair(point)),
            Self::LineTo(point) => write!(f, "L {}", Pair(point)),
            Self::QuadTo { control, end } => write!(f, "Q {} {}", Pair(control), Pair(end)),
            Self::CubicTo {
                control1,
                control2,
                end,
            } => write!(
                f,
                "C {} {} {}",
                Pair(control1),
                Pair(control2),
                Pair(end)
            ),
            Self::ArcTo {
                radius,
                large_arc,
                sweep,
                end,
            } => write!(
                f,
                "A {r} {r} 0 {} {} {}",
                u8::from(large_arc),
                u8::from(sweep),
                Pair(end),
                r = Coord(radius)
            ),
            Self::Close => f.write_str("Z"),
        }
    }
}

/// An ordered sequence of path commands forming one drawable unit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathSegment {
    commands: Vec<PathCommand>,
}

impl PathSegment {
    /// Begin a segment with a move to `start`
    pub fn starting_at(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    /// Start another subpath within this segment
    #[must_use]
    pub fn move_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    /// Append a straight line
    #[must_use]
    pub fn line_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    /// Append a quadratic Bézier curve
    #[must_use]
    pub fn quad_to(mut self, control: Point, end: Point) -> Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Append a cubic Bézier curve
    #[must_use]
    pub fn cubic_to(mut self, control1: Point, control2: Point, end: Point) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
        self
    }

    /// Append a large positive-sweep circular arc
    #[must_use]
    pub fn arc_to(mut self, radius: f64, end: Point) -> Self {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc: true,
            sweep: true,
            end,
        });
        self
    }

    /// Close the current subpath
    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Commands in drawing order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Every point referenced by the segment, control points included
    pub fn points(&self) -> Vec<Point> {
        self.commands.iter().flat_map(PathCommand::points).collect()
    }

    /// Whether the last command closes the path
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// SVG path data (`d` attribute) for this segment
    pub fn to_path_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
