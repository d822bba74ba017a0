use colored::Colorize;
use std::{error::Error, result::Result};

use linmath::{mat3, vec2, Mat3, MathError, Transform2, Vec2, Vec3};


#[derive(Debug, Clone, Copy)]
pub struct SandboxConfig {
    pub angle: f64,
    pub scale: (f64, f64),
    pub translation: (f64, f64),
    pub epsilon: f64,
}

impl SandboxConfig {
    pub fn builder() -> SandboxConfigBuilder {
        SandboxConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct SandboxConfigBuilder {
    angle: Option<f64>,
    scale: Option<(f64, f64)>,
    translation: Option<(f64, f64)>,
    epsilon: Option<f64>,
}

impl SandboxConfigBuilder {
    pub fn build(self) -> Result<SandboxConfig, Box<dyn Error>> {
        let config = SandboxConfig {
            angle: self.angle.ok_or("Rotation angle not provided")?,
            scale: self.scale.unwrap_or((1.0, 1.0)),
            translation: self.translation.unwrap_or((0.0, 0.0)),
            epsilon: self.epsilon.unwrap_or(linmath::EPSILON),
        };
        Ok(config)
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale = Some((sx, sy));
        self
    }

    pub fn with_translation(mut self, tx: f64, ty: f64) -> Self {
        self.translation = Some((tx, ty));
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }
}

fn report(label: &str, passed: bool) {
    let status = if passed { "OK".green() } else { "FAILED".red() }.bold();
    println!("[{}] {}", status, label);
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = SandboxConfig::builder()
        .with_angle(std::f64::consts::FRAC_PI_3)
        .with_scale(2.0, 0.5)
        .with_translation(3.0, 4.0)
        .with_epsilon(1e-9)
        .build()?;
    let (sx, sy) = config.scale;
    let (tx, ty) = config.translation;

    let transform = Transform2::identity()
        .scale(sx, sy)
        .rotate(config.angle)
        .translate(tx, ty);
    let m = transform.matrix();
    println!("{}\n{}", "Composed transform:".bold(), m);
    println!("{} {}", "det:".dimmed(), m.determinant());

    let mut chained = Mat3::from_translation(tx, ty);
    chained
        .multiply(Mat3::from_rotation(config.angle))
        .multiply(Mat3::from_scale(sx, sy));
    report(
        "builder matches translation * rotation * scale",
        chained.equals_eps(m, config.epsilon),
    );

    let inverse = transform.inverse()?;
    let round_trip = mat3::multiply(inverse.matrix(), m);
    report(
        "inverse * transform is identity",
        round_trip.equals_eps(Mat3::identity(), config.epsilon),
    );

    let corners = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let transformed: Vec<Vec2> = corners.iter().map(|p| transform.apply_point(*p)).collect();
    for (p, q) in corners.iter().zip(transformed.iter()) {
        println!("  {} -> {}", p, q.to_string().cyan());
    }
    println!(
        "{} {:?}",
        "vertex buffer:".dimmed(),
        vec2::flatten(&transformed)
    );

    let homogeneous = m.multiply_vector(Vec3::point(corners[0]));
    report(
        "origin lands on the translation",
        homogeneous.equals_eps(Vec3::new(tx, ty, 1.0), config.epsilon),
    );

    let singular = Mat3::new([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 1.0, 1.0]);
    match mat3::invert(singular) {
        Err(MathError::SingularMatrix) => report("singular matrix is rejected", true),
        Err(error) => return Err(error.into()),
        Ok(_) => report("singular matrix is rejected", false),
    }

    let mut zero = Vec2::default();
    zero.normalize();
    report("zero vector normalizes to zero", zero == Vec2::default());
    match Vec2::x().angle_between(zero) {
        Err(error) => println!("{} {}", "expected:".dimmed(), error.to_string().yellow()),
        Ok(angle) => println!("{} {}", "unexpected angle:".red(), angle),
    }
    Ok(())
}
