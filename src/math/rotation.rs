use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Eye position the harness shader renders from
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, -25.0);

/// View rotation for a scene's `cameraAngle`.
///
/// Angles are multiples of PI and applied around x, then y, then z;
/// zero angles are skipped.
pub fn camera_rotation(camera_angle: Option<[f32; 3]>) -> Mat4 {
    let Some(angles) = camera_angle else {
        return Mat4::IDENTITY;
    };

    [Vec3::X, Vec3::Y, Vec3::Z]
        .into_iter()
        .zip(angles)
        .filter(|(_, angle)| *angle != 0.0)
        .fold(Mat4::IDENTITY, |matrix, (axis, angle)| {
            matrix * Mat4::from_axis_angle(axis, angle * PI)
        })
}
