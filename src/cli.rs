// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::{CompilerConfig, HitTest, DEFAULT_MAX_TRIANGLES};
use crate::loaders::{DEFAULT_SCENES_DIR, DEFAULT_SCENE_NAME};
use crate::math::DEFAULT_PRECISION;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-compiler")]
#[command(about = "Compiles ray tracer scene files into GLSL intersection code", long_about = None)]
pub struct Cli {
    /// Scene name, resolved to <scenes-dir>/<scene>.json
    #[arg(long, env = "SCENE", default_value = DEFAULT_SCENE_NAME)]
    pub scene: String,

    /// Directory holding scene documents
    #[arg(long = "scenes-dir", default_value = DEFAULT_SCENES_DIR)]
    pub scenes_dir: PathBuf,

    /// Directory mesh `objFile` paths are relative to
    #[arg(long = "asset-root", default_value = ".")]
    pub asset_root: PathBuf,

    /// Maximum number of mesh triangles emitted per scene
    #[arg(long = "max-triangles", default_value_t = DEFAULT_MAX_TRIANGLES)]
    pub max_triangles: usize,

    /// Decimal places for emitted literals
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: u32,

    /// Compare hit distances inline instead of calling choose_closer_intersection
    #[arg(long = "inline-hit-test", default_value = "false")]
    pub inline_hit_test: bool,

    /// Fragment shader to prepend to the generated code
    #[arg(long)]
    pub prelude: Option<PathBuf>,

    /// Write the shader here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn compiler_config(&self) -> CompilerConfig {
        CompilerConfig {
            max_triangles: self.max_triangles,
            precision: self.precision,
            hit_test: if self.inline_hit_test {
                HitTest::Inline
            } else {
                HitTest::Runtime
            },
        }
    }
}
