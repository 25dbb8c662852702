pub mod assets;
pub mod mesh;
pub mod scene;

pub use assets::FsMeshSource;
pub use mesh::{parse_mesh, MeshGeometry};
pub use scene::{load_scene, SceneLibrary, DEFAULT_SCENES_DIR, DEFAULT_SCENE_NAME};
