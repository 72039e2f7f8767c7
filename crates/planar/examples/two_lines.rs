//! Build the classic two-line sketch and print what a front-end would draw.
//!
//! Usage:
//!   cargo run -p planar --example two_lines

use planar::prelude::*;

fn main() {
    let vp = Viewport::default();
    let mut sketch = Sketch::new();
    sketch.place(point(-40.0, -20.0));
    sketch.place(point(60.0, 30.0));
    sketch.set_mode(Mode::Vertical);
    sketch.place(point(25.0, 70.0));

    let scene = sketch.scene(&vp);
    for (group, seg) in &scene.segments {
        println!(
            "{group:?} segment {} -> {}",
            format_point(&seg.a),
            format_point(&seg.b)
        );
    }
    for label in &scene.labels {
        println!(
            "{:?} label {:?} at {}",
            label.group,
            label.text,
            format_point(&label.anchor)
        );
    }
}
