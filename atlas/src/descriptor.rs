//! TOML atlas descriptors.
//!
//! ```toml
//! name = "mono"
//! texture = { width = 128, height = 128 }
//! metrics = { size = 12.0, line_height = 14.0, ascender = 9.0, descender = -3.0 }
//!
//! [[glyph]]
//! char = "A"
//! width = 7
//! height = 9
//! offset = [0, 9]
//! advance = [8.0, 0.0]
//! uv = [0.0, 0.0, 0.0546875, 0.0703125]
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use bitfont_geometry::{SizePx, Vector};
use serde::Deserialize;

use crate::{FontAtlas, FontMetrics, GlyphRecord};

/// Intermediate representation of an atlas descriptor file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtlasDescriptor {
    pub name: String,
    pub texture: TextureSection,
    #[serde(default)]
    pub metrics: FontMetrics,
    #[serde(default, rename = "glyph")]
    pub glyphs: Vec<GlyphSection>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextureSection {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlyphSection {
    /// The character as a one character string.
    #[serde(default, rename = "char")]
    pub character: Option<String>,
    /// The character as a code point, for characters awkward to write in TOML.
    #[serde(default)]
    pub code: Option<u32>,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub offset: [i32; 2],
    #[serde(default)]
    pub advance: Vector,
    /// `[s0, t0, s1, t1]`
    pub uv: [f32; 4],
}

impl AtlasDescriptor {
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        toml::from_str(toml).context("Failed to parse atlas descriptor")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read atlas descriptor {}", path.display()))?;
        Self::from_toml_str(&toml).with_context(|| format!("In {}", path.display()))
    }

    pub fn into_atlas(self) -> Result<FontAtlas> {
        let name = self.name;
        let glyphs = self
            .glyphs
            .into_iter()
            .enumerate()
            .map(|(i, section)| {
                section
                    .into_record()
                    .with_context(|| format!("Font atlas `{name}`: glyph #{i}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let texture = SizePx::new(self.texture.width, self.texture.height);
        FontAtlas::new(name, texture, self.metrics, glyphs)
    }
}

impl GlyphSection {
    fn char_code(&self) -> Result<u32> {
        match (&self.character, self.code) {
            (Some(_), Some(_)) => bail!("Specify either `char` or `code`, not both"),
            (None, None) => bail!("Missing `char` or `code`"),
            (None, Some(code)) => Ok(code),
            (Some(s), None) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c.into()),
                    _ => bail!("`char` must be exactly one character, got {s:?}"),
                }
            }
        }
    }

    fn into_record(self) -> Result<GlyphRecord> {
        let char_code = self.char_code()?;
        let [s0, t0, s1, t1] = self.uv;
        let [offset_x, offset_y] = self.offset;
        Ok(GlyphRecord {
            char_code,
            width: self.width,
            height: self.height,
            offset_x,
            offset_y,
            advance_x: self.advance.x,
            advance_y: self.advance.y,
            s0,
            t0,
            s1,
            t1,
        })
    }
}

impl FontAtlas {
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        AtlasDescriptor::from_toml_str(toml)?.into_atlas()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        AtlasDescriptor::load(path)?.into_atlas()
    }
}
