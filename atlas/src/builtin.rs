use std::{fmt, str::FromStr, sync::LazyLock};

use anyhow::{Error, bail};

use crate::FontAtlas;

/// The fonts compiled into this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    /// Fixed pitch, 8x12 pixel cells.
    Mono,
    /// Proportional, 16 pixels.
    Sans,
}

impl FontId {
    pub const ALL: [FontId; 2] = [FontId::Mono, FontId::Sans];

    pub fn name(&self) -> &'static str {
        match self {
            FontId::Mono => "mono",
            FontId::Sans => "sans",
        }
    }

    fn descriptor(&self) -> &'static str {
        match self {
            FontId::Mono => include_str!("fonts/mono.toml"),
            FontId::Sans => include_str!("fonts/sans.toml"),
        }
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::ALL.into_iter().find(|id| id.name() == s) {
            Some(id) => Ok(id),
            None => bail!("Unknown font `{s}`, available: mono, sans"),
        }
    }
}

static MONO: LazyLock<FontAtlas> = LazyLock::new(|| parse_builtin(FontId::Mono));
static SANS: LazyLock<FontAtlas> = LazyLock::new(|| parse_builtin(FontId::Sans));

fn parse_builtin(id: FontId) -> FontAtlas {
    // The descriptors are part of the source tree, an invalid one is a build defect.
    FontAtlas::from_toml_str(id.descriptor())
        .unwrap_or_else(|e| panic!("Built-in font `{id}` is invalid: {e:#}"))
}

impl FontAtlas {
    /// The shared atlas of a built-in font. Parsed on first use.
    pub fn builtin(id: FontId) -> &'static FontAtlas {
        match id {
            FontId::Mono => &*MONO,
            FontId::Sans => &*SANS,
        }
    }
}
