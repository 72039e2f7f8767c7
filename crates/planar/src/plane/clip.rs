//! Finite segments for drawing infinite lines inside a display window.

use super::ops::{distance, intersection};
use super::types::{point, Line, Point};

/// Axis-aligned display bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            min_x: -100.0,
            max_x: 100.0,
            min_y: -100.0,
            max_y: 100.0,
        }
    }
}

impl Viewport {
    /// Closed containment test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.a, self.b)
    }
}

/// Segment of `line` spanning the viewport along its dominant axis.
///
/// - vertical: bottom edge to top edge;
/// - `|slope| <= 1`: cut by the left and right edges;
/// - steeper: cut by the bottom and top edges.
///
/// Endpoints may fall outside the viewport on the other axis.
pub fn extend_to_viewport(line: &Line, vp: &Viewport) -> Segment {
    match *line {
        Line::Vertical { x } => Segment::new(point(x, vp.min_y), point(x, vp.max_y)),
        Line::Sloped { slope, .. } if (-1.0..=1.0).contains(&slope) => Segment::new(
            intersection(line, &Line::vertical(vp.min_x)),
            intersection(line, &Line::vertical(vp.max_x)),
        ),
        Line::Sloped { .. } => Segment::new(
            intersection(line, &Line::horizontal(vp.min_y)),
            intersection(line, &Line::horizontal(vp.max_y)),
        ),
    }
}
