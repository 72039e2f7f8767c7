//! Canonical text for points and line equations.
//!
//! Numbers use Rust's shortest round-trip `Display` for `f64`
//! (`3.0` renders as `3`, `-0.5` as `-0.5`).

use std::fmt;

use super::types::{Line, Point};

/// `(x,y)` without spaces.
pub fn format_point(p: &Point) -> String {
    format!("({},{})", p.x, p.y)
}

/// Equation text for the scalar line form (`slope == +inf` is vertical).
pub fn format_line(slope: f64, intercept: f64) -> String {
    Line::from_parts(slope, intercept).to_string()
}

/// Writes ` + b`, ` - |b|` for negative `b`.
fn write_offset(f: &mut fmt::Formatter<'_>, b: f64) -> fmt::Result {
    if b < 0.0 {
        write!(f, " - {}", -b)
    } else {
        write!(f, " + {}", b)
    }
}

impl fmt::Display for Line {
    /// Branch order matters: vertical, slope 1, slope -1, slope 0, zero
    /// intercept, general. `y = 0` renders as `UNDEFINED`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, b) = match *self {
            Line::Vertical { x } => return write!(f, "x = {}", x),
            Line::Sloped { slope, intercept } => (slope, intercept),
        };
        if m == 1.0 || m == -1.0 {
            let lead = if m == 1.0 { "y = x" } else { "y = -x" };
            f.write_str(lead)?;
            if b == 0.0 {
                Ok(())
            } else {
                write_offset(f, b)
            }
        } else if m == 0.0 {
            if b == 0.0 {
                f.write_str("UNDEFINED")
            } else {
                write!(f, "y = {}", b)
            }
        } else if b == 0.0 {
            write!(f, "y = {}x", m)
        } else {
            write!(f, "y = {}x", m)?;
            write_offset(f, b)
        }
    }
}
