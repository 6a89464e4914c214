//! Bitmap font atlases: the glyph metric tables that back one atlas texture each.

mod atlas;
mod bitmap;
mod builtin;
mod descriptor;
mod glyph;

pub use atlas::*;
pub use bitmap::*;
pub use builtin::*;
pub use descriptor::*;
pub use glyph::*;
