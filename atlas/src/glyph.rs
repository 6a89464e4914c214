use bitfont_geometry::{SizePx, Vector};

/// Metrics and atlas region of one character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRecord {
    /// The Unicode scalar value this glyph is drawn for.
    pub char_code: u32,
    /// Bitmap size in pixels.
    pub width: u32,
    pub height: u32,
    /// The top left of the bitmap relative to the pen.
    pub offset_x: i32,
    pub offset_y: i32,
    /// Pen displacement after the glyph is drawn.
    pub advance_x: f64,
    pub advance_y: f64,
    /// Atlas texture coordinates, `(s0, t0)` is the top left, `(s1, t1)` the bottom right.
    pub s0: f32,
    pub t0: f32,
    pub s1: f32,
    pub t1: f32,
}

impl GlyphRecord {
    /// A glyph covering the pixel region `origin` .. `origin + size` of a texture of
    /// `texture_size`.
    ///
    /// Offset and advance are zero and need to be set with [`Self::with_offset`] and
    /// [`Self::with_advance`].
    pub fn from_pixel_region(
        char_code: u32,
        origin: (u32, u32),
        size: SizePx,
        texture_size: SizePx,
    ) -> Self {
        let tw = texture_size.width as f32;
        let th = texture_size.height as f32;
        let (x, y) = origin;
        Self {
            char_code,
            width: size.width,
            height: size.height,
            offset_x: 0,
            offset_y: 0,
            advance_x: 0.0,
            advance_y: 0.0,
            s0: x as f32 / tw,
            t0: y as f32 / th,
            s1: (x as f32 + size.width as f32) / tw,
            t1: (y as f32 + size.height as f32) / th,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    #[must_use]
    pub fn with_advance(mut self, advance: impl Into<Vector>) -> Self {
        let advance = advance.into();
        self.advance_x = advance.x;
        self.advance_y = advance.y;
        self
    }

    /// The character this record is for, `None` if `char_code` is not a Unicode scalar value.
    pub fn char(&self) -> Option<char> {
        char::from_u32(self.char_code)
    }

    pub fn size(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }

    pub fn offset(&self) -> Vector {
        (self.offset_x, self.offset_y).into()
    }

    pub fn advance(&self) -> Vector {
        (self.advance_x, self.advance_y).into()
    }

    /// The four texture coordinates, clockwise from the top left.
    pub fn uv_corners(&self) -> [[f32; 2]; 4] {
        [
            [self.s0, self.t0],
            [self.s1, self.t0],
            [self.s1, self.t1],
            [self.s0, self.t1],
        ]
    }
}
