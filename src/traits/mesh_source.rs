use std::collections::HashMap;

use crate::error::MeshLoadError;

/// Supplies the full text of mesh files referenced by scene objects
pub trait MeshSource {
    /// Read the mesh file named by an object's `objFile`
    fn read_mesh(&self, obj_file: &str) -> Result<String, MeshLoadError>;
}

/// In-memory meshes keyed by `objFile`
impl MeshSource for HashMap<String, String> {
    fn read_mesh(&self, obj_file: &str) -> Result<String, MeshLoadError> {
        self.get(obj_file)
            .cloned()
            .ok_or_else(|| MeshLoadError::Missing(obj_file.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_source() {
        let mut meshes = HashMap::new();
        meshes.insert("tri.obj".to_string(), "v 0 0 0".to_string());

        assert_eq!(meshes.read_mesh("tri.obj").unwrap(), "v 0 0 0");
        assert!(matches!(
            meshes.read_mesh("cube.obj"),
            Err(MeshLoadError::Missing(name)) if name == "cube.obj"
        ));
    }
}
