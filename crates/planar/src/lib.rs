//! Planar line geometry.
//!
//! - `plane`: the geometry kernel (points, lines, distance, slope/intercept,
//!   intersections, canonical text for points and line equations).
//! - `sketch`: state of an interactive two-line construction, owned by the
//!   front-end and rendered by it; no windowing or drawing happens here.
//!
//! API Policy
//! - All kernel operations are pure and total over their preconditions.
//! - Exact floating-point equality selects branches (vertical detection,
//!   slope special cases). Tolerances only appear in explicitly `_eps` helpers.

pub mod api;
pub mod plane;
pub mod sketch;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use plane::{GeomCfg, Line, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::{
        distance, extend_to_viewport, format_line, format_point, intercept, intersection, point,
        slope, try_intersection, GeomCfg, Line, Point, Segment, Viewport,
    };
    pub use crate::sketch::{Group, Label, Mode, Placement, Scene, Sketch};
}
