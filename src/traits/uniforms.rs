use glam::{Mat4, Vec3};

/// Uniform variables of a linked shader program
pub trait UniformSink {
    fn set_int(&mut self, name: &str, value: i32);

    fn set_float(&mut self, name: &str, value: f32);

    fn set_vec3(&mut self, name: &str, value: Vec3);

    fn set_mat4(&mut self, name: &str, value: &Mat4);
}
