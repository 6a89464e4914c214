//! Glyph layout over bitmap font atlases.
//!
//! [`layout`] walks a string, places one [`Quad`] per character found in the atlas and reports
//! where the pen ends up. Nothing here touches a GPU: the result is consumed by a renderer,
//! optionally through a [`QuadBatch`].

mod batch;
mod engine;
mod quad;

pub use batch::*;
pub use engine::*;
pub use quad::*;
