use std::ops::Mul;

use crate::{Matrix4, Point, Vector, Vector3};

/// A uniform scale followed by a translation.
///
/// Layout results are produced unscaled. A renderer wraps them in one of these instead of scaling
/// every coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Vector,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate: Vector::ZERO,
        scale: 1.0,
    };

    pub fn new(translate: impl Into<Vector>, scale: f64) -> Self {
        Self {
            translate: translate.into(),
            scale,
        }
    }

    pub fn from_scale(scale: f64) -> Self {
        Self::new(Vector::ZERO, scale)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn transform_point(&self, point: Point) -> Point {
        point * self.scale + self.translate
    }

    /// The 3D matrix for the renderer. Scales x and y only, z is left untouched.
    pub fn to_matrix4(&self) -> Matrix4 {
        Matrix4::from_translation(Vector3::new(self.translate.x, self.translate.y, 0.0))
            * Matrix4::from_scale(Vector3::new(self.scale, self.scale, 1.0))
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// `self` applied after `rhs`.
    fn mul(self, rhs: Transform) -> Self::Output {
        Transform {
            translate: self.translate + rhs.translate * self.scale,
            scale: self.scale * rhs.scale,
        }
    }
}
