use std::ops::{Add, AddAssign, Mul};

use serde_tuple::{Deserialize_tuple, Serialize_tuple};

/// A position or displacement in pen space.
///
/// Serializes as a `[x, y]` tuple, which is how glyph offsets and advances are written in atlas
/// descriptors.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize_tuple, Deserialize_tuple)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub type Vector = Point;

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x.into(), y.into())
    }
}

impl From<Point> for (f64, f64) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}
