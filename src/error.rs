use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or decoding a scene description
#[derive(Debug, Error)]
pub enum SceneLoadError {
    #[error("Failed to read scene file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed scene document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {type_name} object at index {index}: {source}")]
    InvalidObject {
        index: usize,
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid light at index {index}: {source}")]
    InvalidLight {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while reading or parsing a mesh file
#[derive(Debug, Error)]
pub enum MeshLoadError {
    #[error("Failed to read mesh file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Mesh file {0:?} is not available")]
    Missing(String),

    #[error("Malformed vertex on line {line}: {text:?}")]
    MalformedVertex { line: usize, text: String },

    #[error("Malformed face index {token:?} on line {line}")]
    MalformedFace { line: usize, token: String },

    #[error("Unsupported face index {index} on line {line} (only positive 1-based indices are supported)")]
    UnsupportedIndex { line: usize, index: i64 },

    #[error("Face on line {line} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// Fatal failures of a scene compile pass
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Mesh object {index} ({obj_file}) could not be loaded: {source}")]
    Mesh {
        index: usize,
        obj_file: String,
        #[source]
        source: MeshLoadError,
    },

    #[error("Mesh object {index} ({obj_file}) has vertices that overflow after scale and offset")]
    NonFiniteVertex { index: usize, obj_file: String },

    #[error("Failed to format shader source: {0}")]
    Format(#[from] std::fmt::Error),
}
