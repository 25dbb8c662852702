use glam::{Mat4, Vec3};

use crate::math::{camera_rotation, DEFAULT_CAMERA_POSITION};
use crate::scene::Scene;
use crate::traits::uniforms::UniformSink;

/// Feeds scene camera and light data into a linked program
#[derive(Debug, Clone, Copy)]
pub struct UniformBinder {
    pub camera_position: Vec3,
}

impl Default for UniformBinder {
    fn default() -> Self {
        Self {
            camera_position: DEFAULT_CAMERA_POSITION,
        }
    }
}

impl UniformBinder {
    pub fn new(camera_position: Vec3) -> Self {
        Self { camera_position }
    }

    /// Per-scene uniforms. Lights are written in list order, which is the
    /// index the shader reads them by.
    pub fn bind_scene(&self, scene: &Scene, program: &mut dyn UniformSink) {
        program.set_vec3("camera", self.camera_position);
        program.set_mat4("uMVMatrix", &camera_rotation(scene.camera_angle));

        for (index, light) in scene.lights.iter().enumerate() {
            let prefix = format!("lights[{index}]");
            program.set_vec3(&format!("{prefix}.position"), Vec3::from_array(light.position));
            program.set_vec3(&format!("{prefix}.color"), Vec3::from_array(light.color));
            program.set_float(&format!("{prefix}.intensity"), light.intensity);
            program.set_float(&format!("{prefix}.attenuate"), light.attenuate);
        }
        program.set_int("num_lights", scene.lights.len() as i32);
    }

    /// Per-frame uniforms; the frame counter only matters to animated shaders
    pub fn bind_frame(&self, frame: u32, view: &Mat4, animated: bool, program: &mut dyn UniformSink) {
        if animated {
            program.set_int("frame", frame as i32);
        }
        program.set_mat4("uMVMatrix", view);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec3([f32; 3]),
    Mat4([f32; 16]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniformWrite {
    pub name: String,
    pub value: UniformValue,
}

/// Records uniform writes in order
#[derive(Debug, Clone, Default)]
pub struct UniformLog {
    pub writes: Vec<UniformWrite>,
}

impl UniformLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value written to `name`
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.writes
            .iter()
            .rev()
            .find(|write| write.name == name)
            .map(|write| &write.value)
    }

    fn push(&mut self, name: &str, value: UniformValue) {
        self.writes.push(UniformWrite {
            name: name.to_string(),
            value,
        });
    }
}

impl UniformSink for UniformLog {
    fn set_int(&mut self, name: &str, value: i32) {
        self.push(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.push(name, UniformValue::Float(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.push(name, UniformValue::Vec3(value.to_array()));
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.push(name, UniformValue::Mat4(value.to_cols_array()));
    }
}
