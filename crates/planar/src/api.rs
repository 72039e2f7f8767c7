//! Curated surface for front-ends (UNSTABLE).
//!
//! A visualizer needs the kernel calls for labels and intersections, the
//! viewport extension for drawing infinite lines, and the sketch state.

pub use crate::plane::{
    distance, extend_to_viewport, format_line, format_point, intercept, intersection, slope,
    try_intersection, Line, Point, Segment, Viewport,
};
pub use crate::sketch::{Group as SketchGroup, Mode as SketchMode, Scene, Sketch};
