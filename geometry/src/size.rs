use derive_more::Constructor;

/// Pixel dimensions of a texture or a glyph bitmap.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash, Constructor)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<(u32, u32)> for SizePx {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Float dimensions in pen space.
#[derive(Copy, Clone, PartialEq, Debug, Default, Constructor)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Size::new(width, height)
    }
}

impl From<SizePx> for Size {
    fn from(size: SizePx) -> Self {
        Size::new(size.width.into(), size.height.into())
    }
}
