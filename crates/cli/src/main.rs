use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use planar::plane::{
    distance, format_point, point, try_intersection, GeomCfg, Line, Point, Segment, Viewport,
};
use planar::sketch::{Group, Mode, Placement, Sketch, MAX_POINTS};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Distances, line equations and intersections in the plane")]
struct Cmd {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Distance between two points
    Distance {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
    },
    /// Equation, slope and intercept of the line through two points
    Line {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
    },
    /// Intersection of line a1-a2 with line b1-b2
    Intersect {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a1: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a2: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b1: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b2: Point,
    },
    /// Labels and segments of a two-line sketch built from up to four points
    Scene {
        #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<Point>,
        /// Construction mode armed before the first point
        #[arg(long, value_enum, default_value_t = ModeArg::Free)]
        mode: ModeArg,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Free,
    Vertical,
    Horizontal,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Free => Mode::Free,
            ModeArg::Vertical => Mode::Vertical,
            ModeArg::Horizontal => Mode::Horizontal,
        }
    }
}

#[derive(Args)]
struct BoundsArgs {
    #[arg(long, default_value_t = Viewport::default().min_x, allow_hyphen_values = true)]
    min_x: f64,
    #[arg(long, default_value_t = Viewport::default().max_x, allow_hyphen_values = true)]
    max_x: f64,
    #[arg(long, default_value_t = Viewport::default().min_y, allow_hyphen_values = true)]
    min_y: f64,
    #[arg(long, default_value_t = Viewport::default().max_y, allow_hyphen_values = true)]
    max_y: f64,
}

impl BoundsArgs {
    fn viewport(&self) -> Result<Viewport> {
        ensure!(
            self.min_x < self.max_x && self.min_y < self.max_y,
            "empty viewport: x in [{}, {}], y in [{}, {}]",
            self.min_x,
            self.max_x,
            self.min_y,
            self.max_y
        );
        Ok(Viewport {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
        })
    }
}

/// Parses `x,y`.
fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in `{s}`"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in `{s}`"))?;
    ensure!(
        x.is_finite() && y.is_finite(),
        "coordinates must be finite, got `{s}`"
    );
    Ok(point(x, y))
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

#[derive(Serialize)]
struct LineReport {
    equation: String,
    vertical: bool,
    /// None for vertical lines.
    slope: Option<f64>,
    /// x-intercept for vertical lines, y-intercept otherwise.
    intercept: f64,
}

impl From<Line> for LineReport {
    fn from(l: Line) -> Self {
        Self {
            equation: l.to_string(),
            vertical: l.is_vertical(),
            slope: (!l.is_vertical()).then(|| l.slope()),
            intercept: l.intercept(),
        }
    }
}

#[derive(Serialize)]
struct IntersectReport {
    first: LineReport,
    second: LineReport,
    point: [f64; 2],
    text: String,
}

#[derive(Serialize)]
struct LabelReport {
    group: &'static str,
    text: String,
    anchor: [f64; 2],
}

#[derive(Serialize)]
struct SegmentReport {
    group: &'static str,
    from: [f64; 2],
    to: [f64; 2],
}

#[derive(Serialize)]
struct SceneReport {
    segments: Vec<SegmentReport>,
    labels: Vec<LabelReport>,
    intersection: Option<[f64; 2]>,
}

fn group_name(g: Group) -> &'static str {
    match g {
        Group::First => "first",
        Group::Second => "second",
        Group::Intersection => "intersection",
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = execute(cmd)?;
    println!("{out}");
    Ok(())
}

fn execute(cmd: Cmd) -> Result<String> {
    let json = cmd.json;
    match cmd.action {
        Action::Distance { from, to } => distance_cmd(from, to, json),
        Action::Line { from, to } => line_cmd(from, to, json),
        Action::Intersect { a1, a2, b1, b2 } => intersect_cmd([a1, a2], [b1, b2], json),
        Action::Scene {
            points,
            mode,
            bounds,
        } => scene_cmd(&points, mode.into(), &bounds.viewport()?, json),
    }
}

fn distance_cmd(from: Point, to: Point, json: bool) -> Result<String> {
    let d = distance(from, to);
    tracing::info!(from = ?xy(from), to = ?xy(to), d, "distance");
    if json {
        Ok(serde_json::to_string_pretty(&serde_json::json!({ "distance": d }))?)
    } else {
        Ok(d.to_string())
    }
}

fn line_cmd(from: Point, to: Point, json: bool) -> Result<String> {
    let line = Line::through(from, to);
    tracing::info!(from = ?xy(from), to = ?xy(to), %line, "line");
    if from == to {
        tracing::warn!("coincident points; reporting a vertical line");
    }
    let report = LineReport::from(line);
    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    let slope = report
        .slope
        .map_or_else(|| "undefined (vertical)".to_string(), |m| m.to_string());
    Ok(format!(
        "{}\nslope: {}\nintercept: {}",
        report.equation, slope, report.intercept
    ))
}

fn intersect_cmd(a: [Point; 2], b: [Point; 2], json: bool) -> Result<String> {
    let l1 = Line::through(a[0], a[1]);
    let l2 = Line::through(b[0], b[1]);
    tracing::info!(first = %l1, second = %l2, "intersect");
    let Some(p) = try_intersection(&l1, &l2) else {
        bail!("lines `{l1}` and `{l2}` are parallel; no unique intersection");
    };
    let cfg = GeomCfg::default();
    if !(l1.contains(p, &cfg) && l2.contains(p, &cfg)) {
        tracing::warn!(point = ?xy(p), "nearly parallel lines; intersection is ill-conditioned");
    }
    let report = IntersectReport {
        first: l1.into(),
        second: l2.into(),
        point: xy(p),
        text: format_point(&p),
    };
    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.text)
    }
}

fn scene_cmd(points: &[Point], mode: Mode, vp: &Viewport, json: bool) -> Result<String> {
    let mut sketch = Sketch::new();
    sketch.set_mode(mode);
    for p in points {
        let placed = sketch.place(*p);
        tracing::debug!(point = ?xy(*p), ?placed, "place");
        // automatic partner points count towards the limit
        if placed == Placement::Full {
            bail!(
                "sketch already holds {MAX_POINTS} points; cannot place {}",
                format_point(p)
            );
        }
    }
    let scene = sketch.scene(vp);
    tracing::info!(
        points = sketch.points().len(),
        segments = scene.segments.len(),
        labels = scene.labels.len(),
        "scene"
    );
    if json {
        let report = SceneReport {
            segments: scene
                .segments
                .iter()
                .map(|(g, s): &(Group, Segment)| SegmentReport {
                    group: group_name(*g),
                    from: xy(s.a),
                    to: xy(s.b),
                })
                .collect(),
            labels: scene
                .labels
                .iter()
                .map(|l| LabelReport {
                    group: group_name(l.group),
                    text: l.text.clone(),
                    anchor: xy(l.anchor),
                })
                .collect(),
            intersection: scene.intersection.map(xy),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    let lines: Vec<String> = scene
        .labels
        .iter()
        .map(|l| format!("{:<12} {}", group_name(l.group), l.text))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cmd = Cmd::try_parse_from(std::iter::once("planar").chain(args.iter().copied()))?;
        execute(cmd)
    }

    #[test]
    fn parse_point_accepts_and_rejects() {
        assert_eq!(parse_point("3,-4").unwrap(), point(3.0, -4.0));
        assert_eq!(parse_point(" 1.5 , 2 ").unwrap(), point(1.5, 2.0));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("inf,0").is_err());
        assert!(parse_point("1,NaN").is_err());
        assert!(run(&["distance", "--from", "-inf,0", "--to", "0,0"]).is_err());
    }

    #[test]
    fn distance_and_line_text() {
        assert_eq!(run(&["distance", "--from", "0,0", "--to", "3,4"]).unwrap(), "5");
        assert_eq!(
            run(&["line", "--from", "0,-3", "--to", "1,-1"]).unwrap(),
            "y = 2x - 3\nslope: 2\nintercept: -3"
        );
        assert_eq!(
            run(&["line", "--from", "1,1", "--to", "1,5"]).unwrap(),
            "x = 1\nslope: undefined (vertical)\nintercept: 1"
        );
    }

    #[test]
    fn line_json_has_null_slope_for_vertical() {
        let out = run(&["--json", "line", "--from", "2,0", "--to", "2,9"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["equation"], "x = 2");
        assert_eq!(v["vertical"], true);
        assert!(v["slope"].is_null());
        assert_eq!(v["intercept"], 2.0);
    }

    #[test]
    fn intersect_reports_point_or_parallel_error() {
        let out = run(&[
            "intersect", "--a1", "-1,-1", "--a2", "1,1", "--b1", "-1,1", "--b2", "1,-1",
        ])
        .unwrap();
        assert_eq!(out, "(0,0)");

        let err = run(&[
            "intersect", "--a1", "0,0", "--a2", "1,1", "--b1", "0,2", "--b2", "1,3",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("parallel"));
    }

    #[test]
    fn scene_text_and_json() {
        let out = run(&[
            "scene", "--point", "0,0", "--point", "2,4", "--point", "0,4", "--point", "4,0",
        ])
        .unwrap();
        let texts: Vec<&str> = out.lines().map(|l| l.split_whitespace().next().unwrap()).collect();
        assert_eq!(texts.len(), 7);
        assert!(out.contains("y = 2x"));
        assert!(out.contains("y = -x + 4"));
        assert!(out.lines().last().unwrap().starts_with("intersection"));

        let out = run(&["--json", "scene", "--mode", "vertical", "--point", "3,8"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["segments"][0]["from"], serde_json::json!([3.0, -100.0]));
        assert_eq!(v["labels"][2]["text"], "x = 3");
        assert!(v["intersection"].is_null());
    }

    #[test]
    fn scene_rejects_bad_input() {
        let five = [
            "scene", "--point", "0,0", "--point", "1,0", "--point", "2,0", "--point", "3,1",
            "--point", "4,4",
        ];
        assert!(run(&five).is_err());
        assert!(run(&["scene", "--min-x", "5", "--max-x", "-5"]).is_err());
    }

    #[test]
    fn scene_counts_partner_points_towards_limit() {
        // the vertical partner (3,0) fills the sketch before (9,-9)
        let err = run(&[
            "scene", "--mode", "vertical", "--point", "3,8", "--point", "1,1", "--point", "5,5",
            "--point", "9,-9",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("(9,-9)"), "{err}");

        let ok = run(&[
            "--json", "scene", "--mode", "vertical", "--point", "3,8", "--point", "1,1",
            "--point", "5,5",
        ])
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&ok).unwrap();
        assert_eq!(v["intersection"], serde_json::json!([3.0, 3.0]));
    }
}
