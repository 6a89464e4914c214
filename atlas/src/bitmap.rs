use anyhow::{Result, bail};
use bitfont_geometry::{Color, SizePx};

/// A single channel coverage bitmap, as baked by the atlas tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaBitmap {
    size: SizePx,
    data: Vec<u8>,
}

impl AlphaBitmap {
    pub fn new(size: impl Into<SizePx>, data: Vec<u8>) -> Result<Self> {
        let size = size.into();
        if data.len() != size.area() {
            bail!(
                "Alpha bitmap of {}x{} needs {} bytes, got {}",
                size.width,
                size.height,
                size.area(),
                data.len()
            );
        }
        Ok(Self { size, data })
    }

    pub fn size(&self) -> SizePx {
        self.size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Expands coverage into RGBA8 texels of the given tint.
    ///
    /// The color channels of every texel are the tint, alpha is the coverage scaled by the tint's
    /// alpha. A white tint produces the plain white glyph texture.
    pub fn to_rgba(&self, tint: Color) -> Vec<u8> {
        let [r, g, b, _] = tint.to_rgba8();
        let alpha = tint.alpha.clamp(0.0, 1.0);
        self.data
            .iter()
            .flat_map(|&coverage| [r, g, b, (coverage as f32 * alpha).round() as u8])
            .collect()
    }
}
