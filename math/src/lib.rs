pub mod error;
pub mod transform;
pub mod types;

pub use error::{MathError, MathResult};
pub use transform::Transform2;
pub use types::{mat3, vec2, vec3, Mat3, Vec2, Vec3, EPSILON};
