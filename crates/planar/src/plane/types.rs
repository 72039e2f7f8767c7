//! Point and line types plus the tolerance config for `_eps` helpers.

use nalgebra::Vector2;

use super::ops;

/// A point in the plane.
pub type Point = Vector2<f64>;

#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Tolerances for checked helpers. Never consulted by branch selection.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_on_line: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_on_line: 1e-9 }
    }
}

/// A line in the plane.
///
/// `Sloped` is `y = slope·x + intercept` with a finite (or at least not `+inf`)
/// slope. Build lines through `from_parts`/`through` to keep that invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Vertical { x: f64 },
    Sloped { slope: f64, intercept: f64 },
}

impl Line {
    #[inline]
    pub fn vertical(x: f64) -> Self {
        Line::Vertical { x }
    }

    #[inline]
    pub fn horizontal(y: f64) -> Self {
        Line::Sloped {
            slope: 0.0,
            intercept: y,
        }
    }

    /// From the scalar form: `slope == +inf` means vertical at `x = intercept`.
    #[inline]
    pub fn from_parts(slope: f64, intercept: f64) -> Self {
        if slope == f64::INFINITY {
            Line::Vertical { x: intercept }
        } else {
            Line::Sloped { slope, intercept }
        }
    }

    /// Line through two points. Coincident points give a vertical line.
    #[inline]
    pub fn through(p1: Point, p2: Point) -> Self {
        Self::from_parts(ops::slope(p1, p2), ops::intercept(p1, p2))
    }

    /// Slope, `+inf` for vertical lines.
    #[inline]
    pub fn slope(&self) -> f64 {
        match *self {
            Line::Vertical { .. } => f64::INFINITY,
            Line::Sloped { slope, .. } => slope,
        }
    }

    /// x-intercept for vertical lines, y-intercept otherwise.
    #[inline]
    pub fn intercept(&self) -> f64 {
        match *self {
            Line::Vertical { x } => x,
            Line::Sloped { intercept, .. } => intercept,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    /// Both vertical, or exactly equal slopes.
    pub fn is_parallel(&self, other: &Line) -> bool {
        match (*self, *other) {
            (Line::Vertical { .. }, Line::Vertical { .. }) => true,
            (Line::Sloped { slope: m1, .. }, Line::Sloped { slope: m2, .. }) => m1 == m2,
            _ => false,
        }
    }

    /// `y` at the given `x`; `None` for vertical lines.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Line::Vertical { .. } => None,
            Line::Sloped { slope, intercept } => Some(slope * x + intercept),
        }
    }

    /// Residual of `p` against the line equation is at most `eps`.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        let residual = match *self {
            Line::Vertical { x } => p.x - x,
            Line::Sloped { slope, intercept } => p.y - (slope * p.x + intercept),
        };
        residual.abs() <= eps
    }

    /// `contains_eps` with `cfg.eps_on_line` scaled by the magnitude of `p`.
    #[inline]
    pub fn contains(&self, p: Point, cfg: &GeomCfg) -> bool {
        self.contains_eps(p, cfg.eps_on_line * (1.0 + p.x.abs() + p.y.abs()))
    }
}
