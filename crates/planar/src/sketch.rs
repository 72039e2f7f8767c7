//! Two-line construction state for an interactive front-end.
//!
//! The front-end feeds clicks into `Sketch::place` and toggles construction
//! modes; `Sketch::scene` turns the current state into segments and labels
//! ready to draw. Nothing here touches a window.
//!
//! Placement rules
//! - Points 1-2 define the first line, points 3-4 the second; at most four.
//! - In `Mode::Vertical` the first point of a pair also places its partner
//!   `(x, 0)`; in `Mode::Horizontal` the partner is `(0, y)`. The mode then
//!   falls back to `Mode::Free`.

use crate::plane::{
    extend_to_viewport, format_point, point, try_intersection, Line, Point, Segment, Viewport,
};

pub const MAX_POINTS: usize = 4;

/// Offset of a point label from the point it names.
const LABEL_OFFSET: f64 = 5.0;
/// Inset of the equation labels from the viewport's bottom-left corner.
const EQUATION_INSET_X: f64 = 10.0;
const EQUATION_ROWS: [f64; 2] = [15.0, 25.0];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Free,
    Vertical,
    Horizontal,
}

/// Outcome of `Sketch::place`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Single,
    /// The point plus an automatically placed partner.
    WithPartner(Point),
    /// Four points already exist; nothing was placed.
    Full,
}

/// Which part of the construction a drawable belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    First,
    Second,
    Intersection,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub group: Group,
    pub text: String,
    pub anchor: Point,
}

/// Everything a front-end draws for the current sketch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub segments: Vec<(Group, Segment)>,
    pub labels: Vec<Label>,
    pub intersection: Option<Point>,
}

#[derive(Clone, Debug, Default)]
pub struct Sketch {
    points: Vec<Point>,
    mode: Mode,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_POINTS
    }

    pub fn place(&mut self, p: Point) -> Placement {
        if self.is_full() {
            return Placement::Full;
        }
        self.points.push(p);
        if self.points.len() % 2 == 0 {
            return Placement::Single;
        }
        let partner = match self.mode {
            Mode::Free => return Placement::Single,
            Mode::Vertical => point(p.x, 0.0),
            Mode::Horizontal => point(0.0, p.y),
        };
        self.points.push(partner);
        self.mode = Mode::Free;
        Placement::WithPartner(partner)
    }

    /// Drops all points. The mode is kept.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    fn line(&self, pair: usize) -> Option<Line> {
        let a = self.points.get(2 * pair)?;
        let b = self.points.get(2 * pair + 1)?;
        Some(Line::through(*a, *b))
    }

    pub fn first_line(&self) -> Option<Line> {
        self.line(0)
    }

    pub fn second_line(&self) -> Option<Line> {
        self.line(1)
    }

    /// `None` until both lines exist, and for parallel lines.
    pub fn intersection(&self) -> Option<Point> {
        try_intersection(&self.first_line()?, &self.second_line()?)
    }

    /// Dashed guide shown while a vertical/horizontal construction is armed.
    pub fn guide(&self, cursor: Point, vp: &Viewport) -> Option<Segment> {
        match self.mode {
            Mode::Free => None,
            Mode::Vertical => Some(Segment::new(
                point(cursor.x, vp.min_y),
                point(cursor.x, vp.max_y),
            )),
            Mode::Horizontal => Some(Segment::new(
                point(vp.min_x, cursor.y),
                point(vp.max_x, cursor.y),
            )),
        }
    }

    pub fn scene(&self, vp: &Viewport) -> Scene {
        let mut scene = Scene::default();
        for (pair, (group, row)) in [Group::First, Group::Second]
            .into_iter()
            .zip(EQUATION_ROWS)
            .enumerate()
        {
            let pts = self.points.iter().skip(2 * pair).take(2);
            for p in pts {
                scene.labels.push(point_label(group, *p));
            }
            if let Some(line) = self.line(pair) {
                scene.segments.push((group, extend_to_viewport(&line, vp)));
                scene.labels.push(Label {
                    group,
                    text: line.to_string(),
                    anchor: point(vp.min_x + EQUATION_INSET_X, vp.min_y + row),
                });
            }
        }
        scene.intersection = self.intersection();
        if let Some(p) = scene.intersection {
            scene.labels.push(point_label(Group::Intersection, p));
        }
        scene
    }
}

fn point_label(group: Group, p: Point) -> Label {
    Label {
        group,
        text: format_point(&p),
        anchor: point(p.x + LABEL_OFFSET, p.y + LABEL_OFFSET),
    }
}
