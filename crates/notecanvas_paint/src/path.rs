//! Path building
//!
//! Turns move/line/curve/arc/close operations into SVG path data. Every
//! coordinate is rounded to a fixed number of decimal places before it is
//! written, so equal inputs always give identical strings.

use std::f64::consts::{PI, TAU};

use notecanvas_core::{fmt_num, Point};

/// Decimal rounding applied to path coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Precision {
    factor: f64,
}

impl Precision {
    /// Most decimal places an `f64` coordinate can meaningfully carry
    pub const MAX_PLACES: u32 = 15;

    /// Round to `places` decimals, capped at [`Precision::MAX_PLACES`]
    pub fn new(places: u32) -> Self {
        let places = places.min(Self::MAX_PLACES);
        Self {
            factor: 10f64.powi(places as i32),
        }
    }

    pub fn round(&self, value: f64) -> f64 {
        (value * self.factor).round() / self.factor
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Map an angle in radians into `[0, 2π)`
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// The pending path: accumulated data plus the pen position.
///
/// Finishing a path into a node does not reset the builder; only
/// [`PathBuilder::begin`] does.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    data: String,
    pen: Point,
    precision: Precision,
}

impl PathBuilder {
    pub fn new(precision: Precision) -> Self {
        Self {
            data: String::new(),
            pen: Point::UNSET,
            precision,
        }
    }

    /// Path data accumulated so far
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Last pen position, NaN before the first move
    pub fn pen(&self) -> Point {
        self.pen
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop the accumulated data and forget the pen position
    pub fn begin(&mut self) {
        self.data.clear();
        self.pen = Point::UNSET;
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.push('M', &[point]);
        self.pen = point;
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.push('L', &[point]);
        self.pen = point;
    }

    pub fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        let end = Point::new(x, y);
        self.push('C', &[Point::new(c1x, c1y), Point::new(c2x, c2y), end]);
        self.pen = end;
    }

    pub fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        let end = Point::new(x, y);
        self.push('Q', &[Point::new(cx, cy), end]);
        self.pen = end;
    }

    /// Circular arc around `(cx, cy)` from `start` to `end` radians.
    ///
    /// Always starts a new subpath at the start point. A full turn is written
    /// as two half arcs, since a single arc command with coinciding end
    /// points draws nothing.
    pub fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        counterclockwise: bool,
    ) {
        let center = Point::new(cx, cy);
        let from = Point::on_circle(center, radius, start);
        let norm_start = normalize_angle(start);
        let norm_end = normalize_angle(end);
        let span = if counterclockwise {
            start - end
        } else {
            end - start
        };
        let sweep = !counterclockwise;

        self.push('M', &[from]);

        if span >= TAU || start == end || norm_start == norm_end {
            let opposite = Point::on_circle(center, radius, start + PI);
            self.push_arc(radius, false, sweep, opposite);
            self.push_arc(radius, false, sweep, from);
            self.pen = from;
            return;
        }

        let to = Point::on_circle(center, radius, end);
        let mut large = if (norm_end - norm_start).abs() < PI {
            counterclockwise
        } else {
            !counterclockwise
        };
        if norm_start > norm_end {
            large = !large;
        }
        self.push_arc(radius, large, sweep, to);
        self.pen = to;
    }

    /// Close the current subpath; the pen is left where it was
    pub fn close_path(&mut self) {
        self.data.push('Z');
    }

    fn push(&mut self, command: char, points: &[Point]) {
        let operands = points
            .iter()
            .map(|point| format!("{} {}", self.coord(point.x), self.coord(point.y)))
            .collect::<Vec<_>>()
            .join(",");
        self.data.push(command);
        self.data.push_str(&operands);
    }

    fn push_arc(&mut self, radius: f64, large: bool, sweep: bool, to: Point) {
        let r = self.coord(radius);
        let segment = format!(
            "A{r} {r} 0 {} {} {} {}",
            u8::from(large),
            u8::from(sweep),
            self.coord(to.x),
            self.coord(to.y)
        );
        self.data.push_str(&segment);
    }

    fn coord(&self, value: f64) -> String {
        fmt_num(self.precision.round(value))
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new(Precision::default())
    }
}
