pub mod mat3;
pub mod vec2;
pub mod vec3;

pub use mat3::Mat3;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Default absolute tolerance used by the `equals` family.
pub const EPSILON: f64 = 1e-10;
