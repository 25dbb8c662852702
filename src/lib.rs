pub mod binder;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod loaders;
pub mod material;
pub mod math;
pub mod scene;
pub mod traits;

pub use binder::{UniformBinder, UniformLog, UniformValue};
pub use codegen::{compile_scene, with_prelude, CompileWarning, CompiledShader, ShaderEmitter};
pub use config::{CompilerConfig, HitTest};
pub use error::{CompileError, MeshLoadError, SceneLoadError};
pub use scene::{Light, Scene, SceneObject, Shape};
