use crate::{Contains, Point, Size};

/// An axis aligned rectangle in y-up pen space.
///
/// `left <= right` and `bottom <= top` for all rectangles produced by this crate. Rectangles are
/// not normalized on construction from raw components.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
        top: 0.0,
    };

    /// A rectangle hanging down from `top_left`.
    ///
    /// This is how glyph boxes are placed: the glyph origin is the top left corner and the bitmap
    /// extends `size.height` downwards.
    #[must_use]
    pub fn hanging(top_left: impl Into<Point>, size: impl Into<Size>) -> Self {
        let top_left = top_left.into();
        let size = size.into();
        Self {
            left: top_left.x,
            bottom: top_left.y - size.height,
            right: top_left.x + size.width,
            top: top_left.y,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn size(&self) -> Size {
        (self.width(), self.height()).into()
    }

    pub fn top_left(&self) -> Point {
        (self.left, self.top).into()
    }

    pub fn bottom_right(&self) -> Point {
        (self.right, self.bottom).into()
    }

    pub fn is_empty(&self) -> bool {
        // Written as the NOT of a non-empty rect, so NaN components count as empty.
        !(self.left < self.right && self.bottom < self.top)
    }

    /// Returns the corners clockwise, starting at left / top.
    pub fn to_quad(&self) -> [Point; 4] {
        [
            (self.left, self.top).into(),
            (self.right, self.top).into(),
            (self.right, self.bottom).into(),
            (self.left, self.bottom).into(),
        ]
    }

    /// The smallest rectangle containing both.
    ///
    /// Unlike [`Rect::is_empty`] this also joins zero sized rectangles, a glyph without a bitmap
    /// still occupies its position.
    #[must_use]
    pub fn joined(&self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self {
            left: self.left.min(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
        }
    }

    pub fn to_scalars(&self) -> [f64; 4] {
        [self.left, self.bottom, self.right, self.top]
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    /// `(left, bottom, right, top)`
    fn from((left, bottom, right, top): (f64, f64, f64, f64)) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

impl Contains<Point> for Rect {
    fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }
}

impl Contains<&Rect> for Rect {
    fn contains(&self, r: &Rect) -> bool {
        self.left <= r.left && self.bottom <= r.bottom && self.right >= r.right && self.top >= r.top
    }
}
