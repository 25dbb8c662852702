use serde::Deserialize;

use crate::material::Material;

/// Geometry of one scene object, discriminated by the document's `type` tag
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Shape {
    Sphere {
        center: [f32; 3],
        radius: f32,
    },
    Plane {
        normal: [f32; 3],
        dist: f32,
    },
    Box {
        min_corner: [f32; 3],
        max_corner: [f32; 3],
    },
    Cylinder {
        bottom_center: [f32; 3],
        top_center: [f32; 3],
        radius: f32,
    },
    Cone {
        bottom_center: [f32; 3],
        top_center: [f32; 3],
        radius: f32,
    },
    Triangle {
        t1: [f32; 3],
        t2: [f32; 3],
        t3: [f32; 3],
    },
    Mesh {
        obj_file: String,
        scale: Option<f32>,
        offset: Option<[f32; 3]>,
    },
    /// Entry whose `type` tag is missing or not one of the above.
    /// Kept so object indices follow document order; the emitter skips it.
    #[serde(skip)]
    Unknown { type_name: String },
}

impl Shape {
    pub const KNOWN_TYPES: [&'static str; 7] =
        ["sphere", "plane", "box", "cylinder", "cone", "triangle", "mesh"];

    pub fn is_known_type(type_name: &str) -> bool {
        Self::KNOWN_TYPES.contains(&type_name)
    }

    /// False when any coordinate or scalar is infinite or NaN
    pub fn is_finite(&self) -> bool {
        let finite = |values: &[f32]| values.iter().all(|v| v.is_finite());
        match self {
            Shape::Sphere { center, radius } => finite(center) && radius.is_finite(),
            Shape::Plane { normal, dist } => finite(normal) && dist.is_finite(),
            Shape::Box {
                min_corner,
                max_corner,
            } => finite(min_corner) && finite(max_corner),
            Shape::Cylinder {
                bottom_center,
                top_center,
                radius,
            }
            | Shape::Cone {
                bottom_center,
                top_center,
                radius,
            } => finite(bottom_center) && finite(top_center) && radius.is_finite(),
            Shape::Triangle { t1, t2, t3 } => finite(t1) && finite(t2) && finite(t3),
            Shape::Mesh { scale, offset, .. } => {
                scale.map_or(true, f32::is_finite) && offset.map_or(true, |o| finite(&o))
            }
            Shape::Unknown { .. } => true,
        }
    }

    /// Tag as written in scene documents
    pub fn type_name(&self) -> &str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Plane { .. } => "plane",
            Shape::Box { .. } => "box",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cone { .. } => "cone",
            Shape::Triangle { .. } => "triangle",
            Shape::Mesh { .. } => "mesh",
            Shape::Unknown { type_name } => type_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub shape: Shape,
    /// Document material layered onto the default material
    pub material: Material,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
    /// 1.0 when intensity falls off with distance
    pub attenuate: f32,
}

/// Loaded scene description. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    /// Order is the light index used by the shader
    pub lights: Vec<Light>,
    /// Rotation around x, y, z in multiples of PI
    pub camera_angle: Option<[f32; 3]>,
}

impl Scene {
    pub fn mesh_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|obj| matches!(obj.shape, Shape::Mesh { .. }))
            .count()
    }
}
