//! Distance, slope, intercept and intersection.

use super::types::{point, Line, Point};

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).norm()
}

/// Slope of the line through `p1` and `p2`; `+inf` when the x-difference is
/// exactly zero (this includes coincident points).
#[inline]
pub fn slope(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    if dx == 0.0 {
        f64::INFINITY
    } else {
        (p2.y - p1.y) / dx
    }
}

/// y-intercept of the line through `p1` and `p2`, or its x-intercept `p1.x`
/// when the line is vertical.
#[inline]
pub fn intercept(p1: Point, p2: Point) -> f64 {
    let m = slope(p1, p2);
    if m == f64::INFINITY {
        p1.x
    } else {
        p1.y - m * p1.x
    }
}

/// Intersection of two lines.
///
/// Pre: the lines are not parallel. For parallel input the result is
/// whatever the arithmetic gives (non-finite in general); see `try_intersection`.
pub fn intersection(l1: &Line, l2: &Line) -> Point {
    match (*l1, *l2) {
        // Second line evaluated through its scalar form, so two verticals
        // propagate inf/NaN instead of picking a point.
        (Line::Vertical { x }, other) => point(x, other.slope() * x + other.intercept()),
        (this, Line::Vertical { x }) => point(x, this.slope() * x + this.intercept()),
        (
            Line::Sloped {
                slope: m1,
                intercept: b1,
            },
            Line::Sloped {
                slope: m2,
                intercept: b2,
            },
        ) => {
            let x = (b2 - b1) / (m1 - m2);
            point(x, m1 * x + b1)
        }
    }
}

/// `intersection` guarded by the non-parallel precondition.
#[inline]
pub fn try_intersection(l1: &Line, l2: &Line) -> Option<Point> {
    if l1.is_parallel(l2) {
        None
    } else {
        Some(intersection(l1, l2))
    }
}
