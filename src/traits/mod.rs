pub mod hit_policy;
pub mod mesh_source;
pub mod uniforms;

pub use hit_policy::*;
pub use mesh_source::*;
pub use uniforms::*;
