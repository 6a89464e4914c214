use std::collections::{HashMap, hash_map::Entry};

use anyhow::{Result, bail};
use bitfont_geometry::SizePx;
use serde::Deserialize;

use crate::GlyphRecord;

/// Nominal metrics of a font, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontMetrics {
    pub size: f64,
    pub line_height: f64,
    pub ascender: f64,
    pub descender: f64,
}

/// The glyph table of one atlas texture.
///
/// An atlas is immutable after construction. Every `char_code` appears at most once, so lookups
/// are unambiguous.
#[derive(Debug, Clone)]
pub struct FontAtlas {
    name: String,
    texture_size: SizePx,
    metrics: FontMetrics,
    glyphs: Vec<GlyphRecord>,
    /// `char_code` to position in `glyphs`.
    index: HashMap<u32, usize>,
}

impl FontAtlas {
    /// Builds an atlas. Fails if a `char_code` appears more than once.
    pub fn new(
        name: impl Into<String>,
        texture_size: impl Into<SizePx>,
        metrics: FontMetrics,
        glyphs: Vec<GlyphRecord>,
    ) -> Result<Self> {
        let name = name.into();
        let texture_size = texture_size.into();

        let mut index = HashMap::with_capacity(glyphs.len());
        for (i, glyph) in glyphs.iter().enumerate() {
            match index.entry(glyph.char_code) {
                Entry::Occupied(_) => bail!(
                    "Font atlas `{name}`: duplicate glyph for char code U+{:04X}",
                    glyph.char_code
                ),
                Entry::Vacant(e) => {
                    e.insert(i);
                }
            }
        }

        log::debug!(
            "Font atlas `{name}`: {} glyphs, texture {}x{}",
            glyphs.len(),
            texture_size.width,
            texture_size.height
        );

        Ok(Self {
            name,
            texture_size,
            metrics,
            glyphs,
            index,
        })
    }

    /// An atlas without glyphs. Every lookup fails.
    pub fn empty(
        name: impl Into<String>,
        texture_size: impl Into<SizePx>,
        metrics: FontMetrics,
    ) -> Self {
        Self {
            name: name.into(),
            texture_size: texture_size.into(),
            metrics,
            glyphs: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture_size(&self) -> SizePx {
        self.texture_size
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// All glyphs in table order.
    pub fn glyphs(&self) -> &[GlyphRecord] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The glyph for `char_code`, if the atlas has one.
    pub fn glyph(&self, char_code: u32) -> Option<&GlyphRecord> {
        self.index.get(&char_code).map(|&i| &self.glyphs[i])
    }

    pub fn glyph_for(&self, c: char) -> Option<&GlyphRecord> {
        self.glyph(c.into())
    }

    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&u32::from(c))
    }
}
