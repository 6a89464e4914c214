//! Float 2D primitives shared by the atlas and the glyph layouter.
//!
//! Pen space is y-up: a glyph box extends _downwards_ from its origin, so `top` is the larger y
//! value.

mod color;
mod point;
mod rect;
mod size;
mod transform;

pub use color::*;
pub use point::*;
pub use rect::*;
pub use size::*;
pub use transform::*;

pub type Matrix4 = glam::DMat4;
pub type Vector3 = glam::DVec3;

pub trait Contains<Other> {
    fn contains(&self, other: Other) -> bool;
}
