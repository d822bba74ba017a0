use std::ops::Mul;

use crate::{
    error::MathResult,
    types::{mat3, Mat3, Vec2},
};


/// 2D affine transform accumulated as a homogeneous [`Mat3`].
///
/// Each builder step applies after the ones before it, so
/// `identity().scale(..).rotate(..).translate(..)` is `T * R * S`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform2 {
    m: Mat3,
}

impl From<Transform2> for Mat3 {
    #[inline]
    fn from(value: Transform2) -> Self {
        value.m
    }
}

impl From<Mat3> for Transform2 {
    #[inline]
    fn from(value: Mat3) -> Self {
        Self { m: value }
    }
}

/// `a * b` applies `b` first.
impl Mul<Transform2> for Transform2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Transform2) -> Self::Output {
        Self {
            m: mat3::multiply(self.m, rhs.m),
        }
    }
}

impl Transform2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Mat3::identity(),
        }
    }

    #[inline]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self {
            m: Mat3::from_scale(sx, sy) * self.m,
        }
    }

    #[inline]
    pub fn rotate(self, angle: f64) -> Self {
        Self {
            m: Mat3::from_rotation(angle) * self.m,
        }
    }

    #[inline]
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        Self {
            m: Mat3::from_translation(tx, ty) * self.m,
        }
    }

    #[inline]
    pub fn matrix(&self) -> Mat3 {
        self.m
    }

    #[inline]
    pub fn apply_point(&self, p: Vec2) -> Vec2 {
        self.m.transform_point(p)
    }

    #[inline]
    pub fn apply_direction(&self, v: Vec2) -> Vec2 {
        self.m.transform_direction(v)
    }

    pub fn inverse(&self) -> MathResult<Self> {
        Ok(Self {
            m: mat3::invert(self.m)?,
        })
    }
}
