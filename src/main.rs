use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::time::Instant;

use scene_compiler::cli::Cli;
use scene_compiler::loaders::{FsMeshSource, SceneLibrary};
use scene_compiler::{with_prelude, ShaderEmitter};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let library = SceneLibrary::new(&cli.scenes_dir);
    let scene = library
        .load(&cli.scene)
        .with_context(|| format!("Failed to load scene {:?}", cli.scene))?;

    let meshes = FsMeshSource::new(&cli.asset_root);
    let emitter = ShaderEmitter::new(cli.compiler_config());

    let start = Instant::now();
    let compiled = emitter
        .compile(&scene, &meshes)
        .with_context(|| format!("Failed to compile scene {:?}", cli.scene))?;
    info!(
        "Scene {:?} compiled in {:.2}ms",
        cli.scene,
        start.elapsed().as_secs_f64() * 1000.0
    );
    if !compiled.warnings.is_empty() {
        warn!("{} objects were skipped or truncated", compiled.warnings.len());
    }

    let source = match &cli.prelude {
        Some(path) => {
            let fragment = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read fragment shader {:?}", path))?;
            with_prelude(&fragment, &compiled.source)
        }
        None => compiled.source,
    };

    match &cli.output {
        Some(path) => std::fs::write(path, source)
            .with_context(|| format!("Failed to write shader to {:?}", path))?,
        None => print!("{}", source),
    }

    Ok(())
}
