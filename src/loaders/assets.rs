use std::path::PathBuf;

use crate::error::MeshLoadError;
use crate::traits::mesh_source::MeshSource;

/// Reads mesh files relative to the harness asset root
#[derive(Debug, Clone)]
pub struct FsMeshSource {
    pub root: PathBuf,
}

impl FsMeshSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl MeshSource for FsMeshSource {
    fn read_mesh(&self, obj_file: &str) -> Result<String, MeshLoadError> {
        let path = self.root.join(obj_file);
        std::fs::read_to_string(&path).map_err(|source| MeshLoadError::Read { path, source })
    }
}
