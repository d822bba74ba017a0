use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{Display, Formatter},
    ops,
};

use super::EPSILON;
use crate::error::{MathError, MathResult};


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2 {
        x: a.x + b.x,
        y: a.y + b.y,
    }
}

#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    Vec2 {
        x: a.x - b.x,
        y: a.y - b.y,
    }
}

#[inline]
pub fn scale(v: Vec2, s: f64) -> Vec2 {
    Vec2 {
        x: v.x * s,
        y: v.y * s,
    }
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has zero magnitude.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let magnitude = v.magnitude();
    if magnitude == 0.0 {
        return Vec2::default();
    }
    Vec2 {
        x: v.x / magnitude,
        y: v.y / magnitude,
    }
}

/// `a + (b - a) * t`. `t` is not clamped.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Views a slice of vectors as a flat `x, y, x, y, ...` buffer.
#[inline]
pub fn flatten(vectors: &[Vec2]) -> &[f64] {
    bytemuck::cast_slice(vectors)
}

impl ops::Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}

impl ops::Mul<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        scale(self, rhs)
    }
}

impl ops::Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        scale(rhs, self)
    }
}

impl ops::Div<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        scale(self, rhs.recip())
    }
}

impl ops::Index<usize> for Vec2 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Invalid index {} for Vec2!", index),
        }
    }
}

impl ops::IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Invalid index {} for Vec2!", index),
        }
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(value: [f64; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl Display for Vec2 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

impl Vec2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    #[inline]
    pub fn y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    /// Reads the first two elements; anything after them is ignored.
    pub fn from_array(values: &[f64]) -> MathResult<Self> {
        match values {
            [x, y, ..] => Ok(Self { x: *x, y: *y }),
            _ => Err(MathError::InvalidArgument {
                expected: 2,
                actual: values.len(),
            }),
        }
    }

    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        bytemuck::try_pod_read_unaligned(bytes).map_err(|_| MathError::InvalidArgument {
            expected: std::mem::size_of::<Self>(),
            actual: bytes.len(),
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn add(&mut self, rhs: Vec2) -> &mut Self {
        *self = add(*self, rhs);
        self
    }

    #[inline]
    pub fn subtract(&mut self, rhs: Vec2) -> &mut Self {
        *self = subtract(*self, rhs);
        self
    }

    #[inline]
    pub fn scale(&mut self, s: f64) -> &mut Self {
        *self = scale(*self, s);
        self
    }

    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = normalize(*self);
        self
    }

    #[inline]
    pub fn lerp(&mut self, rhs: Vec2, t: f64) -> &mut Self {
        *self = lerp(*self, rhs, t);
        self
    }

    #[inline]
    pub fn dot(&self, rhs: Vec2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance_to(&self, rhs: Vec2) -> f64 {
        subtract(*self, rhs).magnitude()
    }

    /// Angle in radians between `self` and `rhs`.
    ///
    /// Unlike `normalize`, a zero-magnitude operand is an error here.
    pub fn angle_between(&self, rhs: Vec2) -> MathResult<f64> {
        if self.magnitude() == 0.0 || rhs.magnitude() == 0.0 {
            return Err(MathError::DomainError("zero magnitude"));
        }
        // unit vectors keep the cosine finite at both ends of the exponent range
        Ok(normalize(*self)
            .dot(normalize(rhs))
            .clamp(-1.0, 1.0)
            .acos())
    }

    #[inline]
    pub fn equals(&self, rhs: Vec2) -> bool {
        self.equals_eps(rhs, EPSILON)
    }

    #[inline]
    pub fn equals_eps(&self, rhs: Vec2, epsilon: f64) -> bool {
        (self.x - rhs.x).abs() < epsilon && (self.y - rhs.y).abs() < epsilon
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}
