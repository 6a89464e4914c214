use bitfont_atlas::GlyphRecord;
use bitfont_geometry::{Color, Point, Rect};

/// Index order of the two triangles of a quad, over its clockwise corners.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];
pub const VERTICES_PER_QUAD: usize = 4;
pub const INDICES_PER_QUAD: usize = QUAD_INDICES.len();

/// One placed glyph: a textured rectangle in pen space.
///
/// Corners are clockwise starting at the top left. The UVs are the glyph record's, untransformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub char_code: u32,
    pub positions: [Point; 4],
    pub uvs: [[f32; 2]; 4],
    /// Always opaque white, not interpolated.
    pub tint: Color,
}

impl Quad {
    /// Places `glyph` with its origin relative to `pen`.
    pub fn place(glyph: &GlyphRecord, pen: Point) -> Self {
        let rect = Rect::hanging(pen + glyph.offset(), glyph.size());

        Self {
            char_code: glyph.char_code,
            positions: rect.to_quad(),
            uvs: glyph.uv_corners(),
            tint: Color::WHITE,
        }
    }

    pub fn bounds(&self) -> Rect {
        let [top_left, _, bottom_right, _] = self.positions;
        (top_left.x, bottom_right.y, bottom_right.x, top_left.y).into()
    }

    /// The six vertices of the two triangles covering the quad.
    pub fn triangles(&self) -> [(Point, [f32; 2]); 6] {
        QUAD_INDICES.map(|i| (self.positions[i as usize], self.uvs[i as usize]))
    }
}

#[cfg(test)]
mod tests {
    use bitfont_geometry::SizePx;

    use super::*;

    fn glyph() -> GlyphRecord {
        GlyphRecord::from_pixel_region('g'.into(), (8, 0), SizePx::new(4, 6), SizePx::new(16, 16))
            .with_offset(1, 4)
    }

    #[test]
    fn glyph_hangs_from_its_offset() {
        let quad = Quad::place(&glyph(), Point::new(10.0, 20.0));
        assert_eq!(quad.bounds().to_scalars(), [11.0, 18.0, 15.0, 24.0]);
        assert_eq!(quad.positions[0], Point::new(11.0, 24.0));
        assert_eq!(quad.positions[2], Point::new(15.0, 18.0));
        assert_eq!(quad.tint, Color::WHITE);
    }

    #[test]
    fn uvs_pair_with_corners() {
        let quad = Quad::place(&glyph(), Point::ZERO);
        assert_eq!(quad.uvs[0], [0.5, 0.0]);
        assert_eq!(quad.uvs[2], [0.75, 0.375]);
    }

    #[test]
    fn triangles_share_the_diagonal() {
        let quad = Quad::place(&glyph(), Point::ZERO);
        let t = quad.triangles();
        // Both triangles start at the top left and share the bottom right corner.
        assert_eq!(t[0], t[3]);
        assert_eq!(t[2], t[4]);
        assert_eq!(t[1].0, quad.positions[1]);
        assert_eq!(t[5].0, quad.positions[3]);
    }
}
