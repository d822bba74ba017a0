use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{Display, Formatter},
    ops,
};

use super::{Vec2, Vec3, EPSILON};
use crate::error::{MathError, MathResult};


/// 3x3 matrix stored row-major: element `(row, col)` lives at `row * 3 + col`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Mat3 {
    elements: [f64; 9],
}

#[inline]
pub fn identity() -> Mat3 {
    Mat3 {
        elements: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    }
}

pub fn multiply(a: Mat3, b: Mat3) -> Mat3 {
    let mut elements = [0.0; 9];
    for row in 0..3 {
        for col in 0..3 {
            elements[row * 3 + col] = (0..3)
                .map(|k| a.elements[row * 3 + k] * b.elements[k * 3 + col])
                .sum();
        }
    }
    Mat3 { elements }
}

#[inline]
pub fn transpose(m: Mat3) -> Mat3 {
    let mut elements = m.elements;
    elements.swap(1, 3);
    elements.swap(2, 6);
    elements.swap(5, 7);
    Mat3 { elements }
}

/// Fails with [`MathError::SingularMatrix`] only when the determinant is exactly zero.
/// Nearly singular matrices are inverted regardless of how ill-conditioned the result is.
pub fn invert(m: Mat3) -> MathResult<Mat3> {
    let c = cofactors(&m.elements);
    let det = determinant_from(&m.elements, &c);
    if det == 0.0 {
        return Err(MathError::SingularMatrix);
    }
    let inv_det = det.recip();
    // adjugate is the transposed cofactor matrix
    Ok(Mat3 {
        elements: [
            c[0] * inv_det,
            c[3] * inv_det,
            c[6] * inv_det,
            c[1] * inv_det,
            c[4] * inv_det,
            c[7] * inv_det,
            c[2] * inv_det,
            c[5] * inv_det,
            c[8] * inv_det,
        ],
    })
}

/// Signed cofactors `C(row, col)` laid out row-major.
#[inline]
fn cofactors(e: &[f64; 9]) -> [f64; 9] {
    let [a, b, c, d, f, g, h, i, j] = *e;
    [
        f * j - g * i,
        -(d * j - g * h),
        d * i - f * h,
        -(b * j - c * i),
        a * j - c * h,
        -(a * i - b * h),
        b * g - c * f,
        -(a * g - c * d),
        a * f - b * d,
    ]
}

/// Expansion along the first row.
#[inline]
fn determinant_from(e: &[f64; 9], cofactors: &[f64; 9]) -> f64 {
    e[0] * cofactors[0] + e[1] * cofactors[1] + e[2] * cofactors[2]
}

#[inline]
fn index(row: usize, col: usize) -> MathResult<usize> {
    if row < 3 && col < 3 {
        Ok(row * 3 + col)
    } else {
        Err(MathError::OutOfRange { row, col })
    }
}

impl Default for Mat3 {
    #[inline]
    fn default() -> Self {
        identity()
    }
}

impl ops::Mul<Mat3> for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        multiply(self, rhs)
    }
}

impl ops::MulAssign<Mat3> for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat3) {
        self.multiply(rhs);
    }
}

impl ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.multiply_vector(rhs)
    }
}

impl From<[f64; 9]> for Mat3 {
    #[inline]
    fn from(elements: [f64; 9]) -> Self {
        Self { elements }
    }
}

impl TryFrom<&[f64]> for Mat3 {
    type Error = MathError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl Display for Mat3 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let e = &self.elements;
        write!(
            f,
            "[{}, {}, {}]\n[{}, {}, {}]\n[{}, {}, {}]",
            e[0], e[1], e[2], e[3], e[4], e[5], e[6], e[7], e[8]
        )
    }
}

impl Mat3 {
    #[inline]
    pub fn new(elements: [f64; 9]) -> Self {
        Self { elements }
    }

    pub fn from_slice(values: &[f64]) -> MathResult<Self> {
        let elements = <[f64; 9]>::try_from(values).map_err(|_| MathError::InvalidArgument {
            expected: 9,
            actual: values.len(),
        })?;
        Ok(Self { elements })
    }

    #[inline]
    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self {
            elements: [r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z],
        }
    }

    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        bytemuck::try_pod_read_unaligned(bytes).map_err(|_| MathError::InvalidArgument {
            expected: std::mem::size_of::<Self>(),
            actual: bytes.len(),
        })
    }

    #[inline]
    pub fn identity() -> Self {
        identity()
    }

    /// Counter-clockwise 2D rotation in homogeneous coordinates. Does not rotate about any 3D axis.
    #[inline]
    pub fn from_rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            elements: [cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0],
        }
    }

    #[inline]
    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Self {
            elements: [sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0],
        }
    }

    #[inline]
    pub fn from_translation(tx: f64, ty: f64) -> Self {
        Self {
            elements: [1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0],
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// `self = self * rhs`.
    #[inline]
    pub fn multiply(&mut self, rhs: Mat3) -> &mut Self {
        *self = multiply(*self, rhs);
        self
    }

    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        *self = transpose(*self);
        self
    }

    /// Leaves `self` untouched when the matrix is singular.
    #[inline]
    pub fn invert(&mut self) -> MathResult<&mut Self> {
        *self = invert(*self)?;
        Ok(self)
    }

    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = identity();
        self
    }

    pub fn multiply_vector(&self, v: Vec3) -> Vec3 {
        let e = &self.elements;
        Vec3 {
            x: e[0] * v.x + e[1] * v.y + e[2] * v.z,
            y: e[3] * v.x + e[4] * v.y + e[5] * v.z,
            z: e[6] * v.x + e[7] * v.y + e[8] * v.z,
        }
    }

    /// Applies the matrix to `p` as a homogeneous point (w = 1). No perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.multiply_vector(Vec3::point(p)).xy()
    }

    #[inline]
    pub fn transform_direction(&self, v: Vec2) -> Vec2 {
        self.multiply_vector(Vec3::direction(v)).xy()
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        determinant_from(&self.elements, &cofactors(&self.elements))
    }

    #[inline]
    pub fn trace(&self) -> f64 {
        self.elements[0] + self.elements[4] + self.elements[8]
    }

    #[inline]
    pub fn element(&self, row: usize, col: usize) -> MathResult<f64> {
        Ok(self.elements[index(row, col)?])
    }

    #[inline]
    pub fn set_element(&mut self, row: usize, col: usize, value: f64) -> MathResult<&mut Self> {
        self.elements[index(row, col)?] = value;
        Ok(self)
    }

    pub fn row(&self, row: usize) -> MathResult<Vec3> {
        let start = index(row, 0)?;
        let [x, y, z] = [
            self.elements[start],
            self.elements[start + 1],
            self.elements[start + 2],
        ];
        Ok(Vec3 { x, y, z })
    }

    pub fn column(&self, col: usize) -> MathResult<Vec3> {
        let start = index(0, col)?;
        Ok(Vec3 {
            x: self.elements[start],
            y: self.elements[start + 3],
            z: self.elements[start + 6],
        })
    }

    #[inline]
    pub fn equals(&self, rhs: Mat3) -> bool {
        self.equals_eps(rhs, EPSILON)
    }

    #[inline]
    pub fn equals_eps(&self, rhs: Mat3, epsilon: f64) -> bool {
        self.elements
            .iter()
            .zip(rhs.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.elements.iter().all(|e| e.is_finite())
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 9] {
        self.elements
    }
}
