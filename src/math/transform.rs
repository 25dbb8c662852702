use glam::Vec3;

/// Decimal places kept for emitted mesh coordinates
pub const DEFAULT_PRECISION: u32 = 2;

/// Rounds half away from zero to `precision` decimal places
pub fn round_to_digits(value: f32, precision: u32) -> f32 {
    let base = 10f64.powi(precision as i32);
    ((value as f64 * base).round() / base) as f32
}

pub fn round_vec3(v: Vec3, precision: u32) -> Vec3 {
    Vec3::new(
        round_to_digits(v.x, precision),
        round_to_digits(v.y, precision),
        round_to_digits(v.z, precision),
    )
}

/// Places mesh vertices in the scene: `v * scale + offset`
pub fn transform_vertices(vertices: &[Vec3], scale: Option<f32>, offset: Option<Vec3>) -> Vec<Vec3> {
    let scale = scale.unwrap_or(1.0);
    let offset = offset.unwrap_or(Vec3::ZERO);
    vertices.iter().map(|&v| v * scale + offset).collect()
}
