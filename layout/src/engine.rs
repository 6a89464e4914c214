use std::{iter::FusedIterator, str::Chars};

use bitfont_atlas::FontAtlas;
use bitfont_geometry::{Point, Rect, Transform};
use tracing::instrument;

use crate::Quad;

/// Lays out `text` starting at `pen`.
///
/// Every character found in the atlas produces one quad. Before each of those glyphs the pen
/// moves right by `kerning_offset`, after it by the glyph's advance. Characters without a glyph
/// (including space, if the atlas has none) are skipped and do not move the pen.
#[instrument(skip_all)]
pub fn layout<'a>(
    atlas: &'a FontAtlas,
    pen: impl Into<Point>,
    text: &'a str,
    kerning_offset: f64,
) -> LayoutResult<'a> {
    LayoutResult::new(Quads::new(atlas, pen.into(), text, kerning_offset), 1.0)
}

/// All inputs of a layout call.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRequest<'a> {
    pub atlas: &'a FontAtlas,
    pub pen: Point,
    pub text: &'a str,
    /// Uniform scale the renderer applies to the whole result.
    pub scale: f64,
    /// Added to the pen before every glyph. This is not pairwise kerning.
    pub kerning_offset: f64,
}

impl<'a> LayoutRequest<'a> {
    pub fn new(atlas: &'a FontAtlas, text: &'a str) -> Self {
        Self {
            atlas,
            pen: Point::ZERO,
            text,
            scale: 1.0,
            kerning_offset: 0.0,
        }
    }

    pub fn with_pen(mut self, pen: impl Into<Point>) -> Self {
        self.pen = pen.into();
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_kerning_offset(mut self, kerning_offset: f64) -> Self {
        self.kerning_offset = kerning_offset;
        self
    }

    #[instrument(skip_all)]
    pub fn layout(&self) -> LayoutResult<'a> {
        let quads = Quads::new(self.atlas, self.pen, self.text, self.kerning_offset);
        LayoutResult::new(quads, self.scale)
    }
}

/// The outcome of a layout call.
///
/// The quads are produced lazily and every call to [`LayoutResult::quads`] starts over, yielding
/// the same sequence. The final pen position is known up front.
#[derive(Debug, Clone)]
pub struct LayoutResult<'a> {
    /// Never advanced, cloned for every iteration.
    quads: Quads<'a>,
    pen: Point,
    scale: f64,
}

impl<'a> LayoutResult<'a> {
    fn new(quads: Quads<'a>, scale: f64) -> Self {
        let mut walk = quads.clone();
        walk.by_ref().for_each(drop);
        let pen = walk.pen();

        Self { quads, pen, scale }
    }

    pub fn quads(&self) -> Quads<'a> {
        self.quads.clone()
    }

    /// The pen position layout started at.
    pub fn start(&self) -> Point {
        self.quads.pen()
    }

    /// The pen position after the last glyph, where a following layout on the same line
    /// continues.
    pub fn pen(&self) -> Point {
        self.pen
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The transform to wrap around the quads. Coordinates are never pre-scaled.
    pub fn transform(&self) -> Transform {
        Transform::from_scale(self.scale)
    }

    pub fn quad_count(&self) -> usize {
        self.quads().count()
    }

    pub fn is_empty(&self) -> bool {
        self.quads().next().is_none()
    }

    /// The area covered by all quads, `None` if there are none.
    pub fn bounds(&self) -> Option<Rect> {
        self.quads()
            .map(|quad| quad.bounds())
            .reduce(|a, b| a.joined(b))
    }

    /// The pen position a following line starts at: back to the starting x and down by
    /// `line_height`.
    pub fn next_line(&self, line_height: f64) -> Point {
        Point::new(self.start().x, self.pen.y - line_height)
    }

    pub fn to_vec(&self) -> Vec<Quad> {
        self.quads().collect()
    }
}

impl<'a> IntoIterator for &LayoutResult<'a> {
    type Item = Quad;
    type IntoIter = Quads<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads()
    }
}

/// Iterator over the quads of a layout, in text order.
#[derive(Debug, Clone)]
pub struct Quads<'a> {
    atlas: &'a FontAtlas,
    chars: Chars<'a>,
    pen: Point,
    kerning_offset: f64,
}

impl<'a> Quads<'a> {
    fn new(atlas: &'a FontAtlas, pen: Point, text: &'a str, kerning_offset: f64) -> Self {
        Self {
            atlas,
            chars: text.chars(),
            pen,
            kerning_offset,
        }
    }

    /// The current pen position: the start, or the position after the quad returned last.
    pub fn pen(&self) -> Point {
        self.pen
    }
}

impl Iterator for Quads<'_> {
    type Item = Quad;

    fn next(&mut self) -> Option<Self::Item> {
        for c in self.chars.by_ref() {
            let Some(glyph) = self.atlas.glyph_for(c) else {
                log::trace!("No glyph for {c:?} in `{}`, skipped", self.atlas.name());
                continue;
            };

            self.pen.x += self.kerning_offset;
            let quad = Quad::place(glyph, self.pen);
            self.pen += glyph.advance();
            return Some(quad);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Chars' upper bound is the number of remaining bytes.
        (0, self.chars.size_hint().1)
    }
}

impl FusedIterator for Quads<'_> {}

#[cfg(test)]
mod tests {
    use std::thread;

    use approx::assert_relative_eq;
    use bitfont_atlas::{FontId, FontMetrics, GlyphRecord};

    use super::*;

    fn glyph(
        c: char,
        advance_x: f64,
        offset: (i32, i32),
        size: (u32, u32),
        uv: [f32; 4],
    ) -> GlyphRecord {
        let [s0, t0, s1, t1] = uv;
        GlyphRecord {
            char_code: c.into(),
            width: size.0,
            height: size.1,
            offset_x: offset.0,
            offset_y: offset.1,
            advance_x,
            advance_y: 0.0,
            s0,
            t0,
            s1,
            t1,
        }
    }

    /// 'A' and 'B', nothing else.
    fn ab_atlas() -> FontAtlas {
        FontAtlas::new(
            "ab",
            (64, 64),
            FontMetrics {
                size: 9.0,
                line_height: 11.0,
                ascender: 9.0,
                descender: -2.0,
            },
            vec![
                glyph('A', 10.0, (0, 0), (8, 8), [0.0, 0.0, 0.1, 0.1]),
                glyph('B', 12.0, (1, 0), (9, 9), [0.1, 0.0, 0.2, 0.1]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn two_glyphs_with_kerning() {
        let atlas = ab_atlas();
        let result = layout(&atlas, (0.0, 0.0), "AB", 2.0);
        let quads = result.to_vec();

        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].char_code, 'A' as u32);
        assert_eq!(quads[0].bounds().to_scalars(), [2.0, -8.0, 10.0, 0.0]);
        assert_eq!(quads[1].char_code, 'B' as u32);
        assert_eq!(quads[1].bounds().to_scalars(), [15.0, -9.0, 24.0, 0.0]);
        assert_eq!(result.pen(), Point::new(26.0, 0.0));
    }

    #[test]
    fn pen_after_each_glyph() {
        let atlas = ab_atlas();
        let mut quads = layout(&atlas, (0.0, 0.0), "AB", 2.0).quads();

        assert_eq!(quads.pen(), Point::ZERO);
        quads.next();
        assert_eq!(quads.pen(), Point::new(12.0, 0.0));
        quads.next();
        assert_eq!(quads.pen(), Point::new(26.0, 0.0));
        assert!(quads.next().is_none());
        assert!(quads.next().is_none());
    }

    #[test]
    fn unsupported_characters_are_skipped() {
        let atlas = ab_atlas();
        let result = layout(&atlas, (0.0, 0.0), "A C", 2.0);

        let quads = result.to_vec();
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].char_code, 'A' as u32);
        // Kerning and advance of 'A' only.
        assert_eq!(result.pen(), Point::new(12.0, 0.0));
    }

    #[test]
    fn skipped_characters_do_not_move_following_glyphs() {
        let atlas = ab_atlas();
        let plain = layout(&atlas, (3.0, 4.0), "AB", 1.5).to_vec();
        let interrupted = layout(&atlas, (3.0, 4.0), " A\u{1F600}x\nB ", 1.5).to_vec();
        assert_eq!(plain, interrupted);
    }

    #[test]
    fn empty_text_is_identity() {
        let atlas = ab_atlas();
        let result = layout(&atlas, (5.5, -3.25), "", 2.0);
        assert!(result.is_empty());
        assert_eq!(result.quad_count(), 0);
        assert_eq!(result.pen(), Point::new(5.5, -3.25));
        assert_eq!(result.start(), result.pen());
        assert_eq!(result.bounds(), None);
    }

    #[test]
    fn empty_atlas_yields_nothing() {
        let atlas = FontAtlas::empty("empty", (1, 1), FontMetrics::default());
        let result = layout(&atlas, (1.0, 2.0), "ABC", 2.0);
        assert_eq!(result.quad_count(), 0);
        assert_eq!(result.pen(), Point::new(1.0, 2.0));
    }

    #[test]
    fn one_quad_per_supported_character_in_order() {
        let atlas = FontAtlas::builtin(FontId::Sans);
        let text = "Sphinx_of_black_quartz,judge_my_vow!";
        let result = layout(atlas, (0.0, 0.0), text, 0.0);

        let codes: Vec<u32> = result.quads().map(|q| q.char_code).collect();
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn quads_are_restartable_and_layout_is_idempotent() {
        let atlas = FontAtlas::builtin(FontId::Mono);
        let first = layout(atlas, (0.25, 7.0), "fixed{pitch}", 0.5);
        let second = layout(atlas, (0.25, 7.0), "fixed{pitch}", 0.5);

        assert_eq!(first.to_vec(), first.to_vec());
        assert_eq!(first.to_vec(), second.to_vec());
        assert_eq!(first.pen(), second.pen());
        assert_eq!((&first).into_iter().count(), 12);
    }

    #[test]
    fn uvs_are_the_records_corners() {
        let atlas = FontAtlas::builtin(FontId::Sans);
        for quad in &layout(atlas, (0.0, 0.0), "UV~check", 1.0) {
            let g = atlas.glyph(quad.char_code).unwrap();
            assert_eq!(
                quad.uvs,
                [[g.s0, g.t0], [g.s1, g.t0], [g.s1, g.t1], [g.s0, g.t1]]
            );
        }
    }

    #[test]
    fn fractional_advances_are_not_snapped() {
        let atlas = FontAtlas::builtin(FontId::Sans);
        let result = layout(atlas, (0.0, 0.0), "ab", 0.125);

        let expected: f64 = "ab"
            .chars()
            .map(|c| atlas.glyph_for(c).unwrap().advance_x + 0.125)
            .sum();
        assert_relative_eq!(result.pen().x, expected);
        assert_ne!(result.pen().x, result.pen().x.round());
    }

    #[test]
    fn vertical_advance_moves_the_pen_down_the_line() {
        let glyph = GlyphRecord::from_pixel_region('d'.into(), (0, 0), (2, 2).into(), (8, 8).into())
            .with_advance((3.0, -1.5));
        let atlas =
            FontAtlas::new("diagonal", (8, 8), FontMetrics::default(), vec![glyph]).unwrap();

        let quads = layout(&atlas, (0.0, 0.0), "ddd", 1.0).to_vec();
        let tops: Vec<(f64, f64)> = quads.iter().map(|q| q.positions[0].into()).collect();
        assert_eq!(tops, [(1.0, 0.0), (5.0, -1.5), (9.0, -3.0)]);
    }

    #[test]
    fn multibyte_characters_are_looked_up_by_code_point() {
        let atlas = FontAtlas::new(
            "latin1",
            (16, 16),
            FontMetrics::default(),
            vec![
                glyph('é', 6.0, (0, 5), (5, 5), [0.0, 0.0, 0.5, 0.5]),
                glyph('ß', 7.0, (0, 8), (6, 8), [0.5, 0.0, 1.0, 0.5]),
            ],
        )
        .unwrap();

        let result = layout(&atlas, (0.0, 0.0), "éßé", 0.0);
        let codes: Vec<u32> = result.quads().map(|q| q.char_code).collect();
        assert_eq!(codes, [0xE9, 0xDF, 0xE9]);
        assert_eq!(result.pen(), Point::new(19.0, 0.0));
    }

    #[test]
    fn scale_is_not_baked_into_coordinates() {
        let atlas = ab_atlas();
        let request = LayoutRequest::new(&atlas, "AB").with_kerning_offset(2.0);
        let unscaled = request.layout();
        let scaled = request.with_scale(3.0).layout();

        assert_eq!(unscaled.to_vec(), scaled.to_vec());
        assert_eq!(scaled.scale(), 3.0);
        assert_eq!(
            scaled.transform().transform_point(scaled.pen()),
            Point::new(78.0, 0.0)
        );
        assert!(unscaled.transform().is_identity());
    }

    #[test]
    fn request_and_free_function_agree() {
        let atlas = ab_atlas();
        let request = LayoutRequest::new(&atlas, "BAB")
            .with_pen((4.0, 2.0))
            .with_kerning_offset(-1.0);
        let a = request.layout();
        let b = layout(&atlas, (4.0, 2.0), "BAB", -1.0);
        assert_eq!(a.to_vec(), b.to_vec());
        assert_eq!(a.pen(), b.pen());
    }

    #[test]
    fn bounds_and_next_line() {
        let atlas = ab_atlas();
        let result = layout(&atlas, (10.0, 100.0), "AB", 2.0);

        let bounds = result.bounds().unwrap();
        assert_eq!(bounds.to_scalars(), [12.0, 91.0, 34.0, 100.0]);

        let line_height = atlas.metrics().line_height;
        assert_eq!(result.next_line(line_height), Point::new(10.0, 89.0));
    }

    #[test]
    fn shared_atlas_across_threads() {
        let atlas = FontAtlas::builtin(FontId::Mono);
        let reference = layout(atlas, (0.0, 0.0), "threads", 1.0).to_vec();

        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(move || layout(atlas, (0.0, 0.0), "threads", 1.0).to_vec()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    }
}
