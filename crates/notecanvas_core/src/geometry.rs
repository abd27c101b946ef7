//! Core geometry types
//!
//! Coordinates are `f64` throughout so that path data rounded to a fixed
//! number of decimal places is reproducible for equal inputs.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// A point whose coordinates are both NaN, used as "no pen position yet"
    pub const UNSET: Point = Point {
        x: f64::NAN,
        y: f64::NAN,
    };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle of `radius` around `center` at `angle` radians
    pub fn on_circle(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// True until both coordinates hold a number
    pub fn is_unset(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Build a rect, folding a negative height into the origin.
    ///
    /// `(x, y, w, -h)` becomes `(x, y - h, w, h)`. Width is left alone.
    pub fn normalized(x: f64, y: f64, width: f64, height: f64) -> Self {
        if height < 0.0 {
            Self::new(x, y + height, width, -height)
        } else {
            Self::new(x, y, width, height)
        }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_negative_height() {
        let r = Rect::normalized(5.0, 50.0, 10.0, -20.0);
        assert_eq!(r, Rect::new(5.0, 30.0, 10.0, 20.0));

        let r = Rect::normalized(5.0, 50.0, 10.0, 20.0);
        assert_eq!(r, Rect::new(5.0, 50.0, 10.0, 20.0));
    }

    #[test]
    fn test_normalized_keeps_nan() {
        let r = Rect::normalized(0.0, f64::NAN, 1.0, f64::NAN);
        assert!(r.y().is_nan());
        assert!(r.height().is_nan());
    }

    #[test]
    fn test_point_on_circle() {
        let p = Point::on_circle(Point::new(10.0, 10.0), 5.0, 0.0);
        assert_eq!(p, Point::new(15.0, 10.0));
        assert!(Point::UNSET.is_unset());
        assert!(!p.is_unset());
    }
}
