//! Scene-to-GLSL compiler backend.
//!
//! Every scene object becomes a `Material` constant plus one or more
//! intersection calls inside `ray_intersect_scene`; meshes are fan-split into
//! triangle calls under a per-compile triangle budget.

pub mod budget;
mod emitter;
pub mod glsl;

pub use budget::TriangleBudget;
pub use emitter::{CompileWarning, CompiledShader, ShaderEmitter};

use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::scene::Scene;
use crate::traits::mesh_source::MeshSource;

/// Compiles `scene` with the policy selected by `config`
pub fn compile_scene(
    scene: &Scene,
    meshes: &dyn MeshSource,
    config: CompilerConfig,
) -> Result<CompiledShader, CompileError> {
    ShaderEmitter::new(config).compile(scene, meshes)
}

/// Appends generated scene code to the hand-written fragment shader
pub fn with_prelude(fragment_shader: &str, scene_code: &str) -> String {
    let mut source = String::with_capacity(fragment_shader.len() + scene_code.len() + 1);
    source.push_str(fragment_shader);
    if !fragment_shader.is_empty() && !fragment_shader.ends_with('\n') {
        source.push('\n');
    }
    source.push_str(scene_code);
    source
}
