mod rotation;
mod transform;

pub use rotation::{camera_rotation, DEFAULT_CAMERA_POSITION};
pub use transform::{round_to_digits, round_vec3, transform_vertices, DEFAULT_PRECISION};
