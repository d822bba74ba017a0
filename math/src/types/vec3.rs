use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{Display, Formatter},
    ops,
};

use super::{Vec2, EPSILON};
use crate::error::{MathError, MathResult};

#[cfg(test)]
mod test_vec3 {
    use super::{Vec2, Vec3, EPSILON};
    use crate::error::MathError;
    use crate::types::vec3;

    #[test]
    fn cross() {
        assert!(Vec3::x().cross(Vec3::y()).equals(Vec3::z()));
        assert!(Vec3::y().cross(Vec3::x()).equals(-Vec3::z()));
        assert!(vec3::cross(Vec3::z(), Vec3::x()).equals(Vec3::y()));
    }

    #[test]
    fn mutating_chain() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.add(Vec3::new(1.0, 1.0, 1.0))
            .subtract(Vec3::z())
            .scale(0.5);
        assert!(v.equals(Vec3::new(1.0, 1.5, 1.5)));
    }

    #[test]
    fn pure_and_mutating_agree() {
        let a = Vec3::new(0.3, -7.1, 4.0);
        let b = Vec3::new(2.25, 1e-3, -0.5);
        let mut m = a;
        m.lerp(b, 0.61).normalize();
        assert_eq!(m, vec3::normalize(vec3::lerp(a, b, 0.61)));
        assert_eq!(vec3::scale(a, 3.0), a * 3.0);
    }

    #[test]
    fn normalize_zero_falls_back_to_zero() {
        let mut v = Vec3::default();
        v.normalize();
        assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn magnitude() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert!((v.magnitude() - 7.0).abs() < EPSILON);
        let v = Vec3::new(2e300, 3e300, 6e300);
        assert!((v.magnitude() / 7e300 - 1.0).abs() < EPSILON);
    }

    #[test]
    fn dot_and_distance() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(3.0, 5.0, 9.0);
        assert_eq!(a.dot(b), 40.0);
        assert!((a.distance_to(b) - 7.0).abs() < EPSILON);
    }

    #[test]
    fn angle_between() {
        let angle = Vec3::x().angle_between(Vec3::z()).unwrap();
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < EPSILON);
        let angle = Vec3::x().angle_between(-Vec3::x()).unwrap();
        assert!((angle - std::f64::consts::PI).abs() < EPSILON);
        assert_eq!(
            Vec3::x().angle_between(Vec3::default()),
            Err(MathError::DomainError("zero magnitude"))
        );
    }

    #[test]
    fn angle_between_extreme_magnitudes() {
        let angle = Vec3::new(1e200, 0.0, 0.0)
            .angle_between(Vec3::new(1e200, 1e200, 0.0))
            .unwrap();
        assert!((angle - std::f64::consts::FRAC_PI_4).abs() < EPSILON);
        let angle = Vec3::new(0.0, 1e-200, 0.0)
            .angle_between(Vec3::new(0.0, 1e-200, 1e-200))
            .unwrap();
        assert!((angle - std::f64::consts::FRAC_PI_4).abs() < EPSILON);
    }

    #[test]
    fn lerp_extrapolates() {
        let mut v = Vec3::new(0.0, 0.0, 0.0);
        v.lerp(Vec3::new(10.0, -10.0, 4.0), 1.5);
        assert!(v.equals(Vec3::new(15.0, -15.0, 6.0)));
        let v = vec3::lerp(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, -10.0, 4.0), -0.5);
        assert!(v.equals(Vec3::new(-5.0, 5.0, -2.0)));
    }

    #[test]
    fn homogeneous() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(Vec3::point(p), Vec3::new(3.0, 4.0, 1.0));
        assert_eq!(Vec3::direction(p), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(Vec3::from(p), Vec3::direction(p));
        assert_eq!(Vec3::point(p).xy(), p);
    }

    #[test]
    fn from_array() {
        assert_eq!(
            Vec3::from_array(&[1.0, 2.0, 3.0, 4.0]).unwrap().to_array(),
            [1.0, 2.0, 3.0]
        );
        let v = Vec3::new(-1.0, 0.5, 8.0);
        assert_eq!(Vec3::from(v.to_array()), v);
        assert_eq!(
            Vec3::from_array(&[1.0, 2.0]),
            Err(MathError::InvalidArgument {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Vec3::new(0.5, 0.0, -1.0).to_string(), "Vec3(0.5, 0, -1)");
    }

    #[test]
    fn flatten() {
        let points = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        assert_eq!(vec3::flatten(&points), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let v = points[1];
        assert_eq!(Vec3::try_from_le_bytes(v.as_bytes()), Ok(v));
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3 {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
}

#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    Vec3 {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
}

#[inline]
pub fn scale(v: Vec3, s: f64) -> Vec3 {
    Vec3 {
        x: v.x * s,
        y: v.y * s,
        z: v.z * s,
    }
}

#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let magnitude = v.magnitude();
    if magnitude == 0.0 {
        return Vec3::default();
    }
    Vec3 {
        x: v.x / magnitude,
        y: v.y / magnitude,
        z: v.z / magnitude,
    }
}

#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    Vec3 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
        z: a.z + (b.z - a.z) * t,
    }
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3 {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

#[inline]
pub fn flatten(vectors: &[Vec3]) -> &[f64] {
    bytemuck::cast_slice(vectors)
}

impl ops::Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl ops::Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl ops::Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}

impl ops::Mul<f64> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        scale(self, rhs)
    }
}

impl ops::Mul<Vec3> for f64 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        scale(rhs, self)
    }
}

impl ops::Div<f64> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        scale(self, rhs.recip())
    }
}

impl ops::Index<usize> for Vec3 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid index {} for Vec3!", index),
        }
    }
}

impl ops::IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Invalid index {} for Vec3!", index),
        }
    }
}

impl From<Vec2> for Vec3 {
    #[inline]
    fn from(value: Vec2) -> Self {
        Self::direction(value)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(value: [f64; 3]) -> Self {
        Self {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vec3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn x() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn y() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn z() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }

    /// Homogeneous point, affected by translation.
    #[inline]
    pub fn point(p: Vec2) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: 1.0,
        }
    }

    /// Homogeneous direction, unaffected by translation.
    #[inline]
    pub fn direction(v: Vec2) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: 0.0,
        }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn from_array(values: &[f64]) -> MathResult<Self> {
        match values {
            [x, y, z, ..] => Ok(Self {
                x: *x,
                y: *y,
                z: *z,
            }),
            _ => Err(MathError::InvalidArgument {
                expected: 3,
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
    pub fn add(&mut self, rhs: Vec3) -> &mut Self {
        *self = add(*self, rhs);
        self
    }

    #[inline]
    pub fn subtract(&mut self, rhs: Vec3) -> &mut Self {
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
    pub fn lerp(&mut self, rhs: Vec3, t: f64) -> &mut Self {
        *self = lerp(*self, rhs, t);
        self
    }

    #[inline]
    pub fn cross(&self, rhs: Vec3) -> Vec3 {
        cross(*self, rhs)
    }

    #[inline]
    pub fn dot(&self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    #[inline]
    pub fn distance_to(&self, rhs: Vec3) -> f64 {
        subtract(*self, rhs).magnitude()
    }

    pub fn angle_between(&self, rhs: Vec3) -> MathResult<f64> {
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
    pub fn equals(&self, rhs: Vec3) -> bool {
        self.equals_eps(rhs, EPSILON)
    }

    #[inline]
    pub fn equals_eps(&self, rhs: Vec3, epsilon: f64) -> bool {
        (self.x - rhs.x).abs() < epsilon
            && (self.y - rhs.y).abs() < epsilon
            && (self.z - rhs.z).abs() < epsilon
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
