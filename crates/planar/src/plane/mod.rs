//! Planar geometry kernel.
//!
//! Purpose
//! - Distance, slope and intercept of the line through two points, and the
//!   intersection of two lines.
//! - Deterministic text for points `(x,y)` and line equations.
//!
//! Line model
//! - `Line::Vertical { x }` or `Line::Sloped { slope, intercept }`.
//! - The scalar convention (slope = +inf, intercept = x) is still available via
//!   `Line::from_parts`, `Line::slope` and `Line::intercept`, and the free
//!   functions `slope`/`intercept` return it, so both forms branch identically.
//!
//! Numerics
//! - No epsilon comparisons in branch selection. Parallel input to
//!   `intersection` yields whatever IEEE arithmetic produces (inf/NaN);
//!   use `try_intersection` to get `None` instead.

mod clip;
mod format;
mod ops;
mod types;

pub use clip::{extend_to_viewport, Segment, Viewport};
pub use format::{format_line, format_point};
pub use ops::{distance, intercept, intersection, slope, try_intersection};
pub use types::{point, GeomCfg, Line, Point};
