use log::{debug, info};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::SceneLoadError;
use crate::material::MaterialOverride;
use crate::scene::{Light, Scene, SceneObject, Shape};

pub const DEFAULT_SCENE_NAME: &str = "default";
pub const DEFAULT_SCENES_DIR: &str = "scenes";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneDocument {
    camera_angle: Option<[f32; 3]>,
    #[serde(default)]
    lights: Vec<Value>,
    #[serde(default)]
    objects: Vec<Value>,
}

#[derive(Deserialize)]
struct LightDocument {
    pos: [f32; 3],
    color: [f32; 3],
    intensity: f32,
    #[serde(default)]
    attenuate: Attenuate,
}

/// Scene files write `attenuate` either as a flag or as a number
#[derive(Deserialize)]
#[serde(untagged)]
enum Attenuate {
    Flag(bool),
    Factor(f32),
}

impl Default for Attenuate {
    fn default() -> Self {
        Attenuate::Flag(false)
    }
}

impl Attenuate {
    fn as_f32(&self) -> f32 {
        match *self {
            Attenuate::Flag(flag) => {
                if flag {
                    1.0
                } else {
                    0.0
                }
            }
            Attenuate::Factor(value) => value,
        }
    }
}

impl Scene {
    /// Decodes a scene document, filling object materials from the default material
    pub fn from_json(text: &str) -> Result<Scene, SceneLoadError> {
        let document: SceneDocument = serde_json::from_str(text)?;

        let lights = document
            .lights
            .into_iter()
            .enumerate()
            .map(|(index, value)| parse_light(index, value))
            .collect::<Result<Vec<_>, _>>()?;

        let objects = document
            .objects
            .into_iter()
            .enumerate()
            .map(|(index, value)| parse_object(index, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            objects,
            lights,
            camera_angle: document.camera_angle,
        })
    }
}

fn parse_light(index: usize, value: Value) -> Result<Light, SceneLoadError> {
    let light: LightDocument = serde_json::from_value(value)
        .map_err(|source| SceneLoadError::InvalidLight { index, source })?;

    let finite = light
        .pos
        .iter()
        .chain(&light.color)
        .chain([&light.intensity])
        .all(|v| v.is_finite());
    if !finite {
        return Err(SceneLoadError::InvalidLight {
            index,
            source: serde_json::Error::custom("light numbers must be finite"),
        });
    }

    Ok(Light {
        position: light.pos,
        color: light.color,
        intensity: light.intensity,
        attenuate: light.attenuate.as_f32(),
    })
}

fn parse_object(index: usize, value: Value) -> Result<SceneObject, SceneLoadError> {
    let type_name = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let invalid = |source| SceneLoadError::InvalidObject {
        index,
        type_name: type_name.clone(),
        source,
    };

    let material = match value.get("material") {
        Some(raw) if !raw.is_null() => MaterialOverride::deserialize(raw).map_err(invalid)?,
        _ => MaterialOverride::default(),
    }
    .resolve();

    let shape = if Shape::is_known_type(&type_name) {
        serde_json::from_value(value).map_err(invalid)?
    } else {
        debug!("Object {} has unrecognized type {:?}", index, type_name);
        Shape::Unknown {
            type_name: type_name.clone(),
        }
    };

    // GLSL has no literal for infinities or NaN
    if !shape.is_finite() || !material.is_finite() {
        return Err(invalid(serde_json::Error::custom("numbers must be finite")));
    }

    Ok(SceneObject { shape, material })
}

/// Reads and decodes the scene document at `path`
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, SceneLoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SceneLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let scene = Scene::from_json(&text)?;
    info!(
        "Loaded scene {:?}: {} objects ({} meshes), {} lights",
        path,
        scene.objects.len(),
        scene.mesh_count(),
        scene.lights.len()
    );
    Ok(scene)
}

/// Directory of named scene documents (`<dir>/<name>.json`)
#[derive(Debug, Clone)]
pub struct SceneLibrary {
    pub scenes_dir: PathBuf,
}

impl SceneLibrary {
    pub fn new(scenes_dir: impl Into<PathBuf>) -> Self {
        Self {
            scenes_dir: scenes_dir.into(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.scenes_dir.join(format!("{name}.json"))
    }

    pub fn load(&self, name: &str) -> Result<Scene, SceneLoadError> {
        load_scene(self.path_for(name))
    }
}

impl Default for SceneLibrary {
    fn default() -> Self {
        Self::new(DEFAULT_SCENES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{MaterialType, ReflectType, DEFAULT_MATERIAL};

    #[test]
    fn test_missing_arrays_are_empty() {
        let scene = Scene::from_json("{}").unwrap();
        assert!(scene.objects.is_empty());
        assert!(scene.lights.is_empty());
        assert_eq!(scene.camera_angle, None);
    }

    #[test]
    fn test_sphere_with_default_material() {
        let scene = Scene::from_json(
            r#"{"objects": [{"type": "sphere", "center": [0, 0, 0], "radius": 5}]}"#,
        )
        .unwrap();

        assert_eq!(scene.objects.len(), 1);
        assert_eq!(
            scene.objects[0].shape,
            Shape::Sphere {
                center: [0.0, 0.0, 0.0],
                radius: 5.0
            }
        );
        assert_eq!(scene.objects[0].material, DEFAULT_MATERIAL);
    }

    #[test]
    fn test_camel_case_fields() {
        let scene = Scene::from_json(
            r#"{
                "cameraAngle": [0.1, 0.2, 0],
                "objects": [
                    {"type": "box", "minCorner": [-1, -1, -1], "maxCorner": [1, 1, 1]},
                    {"type": "cone", "bottomCenter": [0, 0, 0], "topCenter": [0, 2, 0], "radius": 1},
                    {"type": "mesh", "objFile": "meshes/cube.obj", "scale": 2, "offset": [0, 1, 0]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scene.camera_angle, Some([0.1, 0.2, 0.0]));
        assert_eq!(
            scene.objects[2].shape,
            Shape::Mesh {
                obj_file: "meshes/cube.obj".to_string(),
                scale: Some(2.0),
                offset: Some([0.0, 1.0, 0.0]),
            }
        );
        assert_eq!(scene.mesh_count(), 1);
    }

    #[test]
    fn test_material_override_merged() {
        let scene = Scene::from_json(
            r#"{"objects": [{"type": "plane", "normal": [0, 1, 0], "dist": -5,
                "material": {"type": "PHONG_MATERIAL", "reflectType": "MIRROR_REFLECT"}}]}"#,
        )
        .unwrap();

        let material = scene.objects[0].material;
        assert_eq!(material.kind, MaterialType::Phong);
        assert_eq!(material.reflect_type, ReflectType::Mirror);
        assert_eq!(material.color, DEFAULT_MATERIAL.color);
        assert_eq!(material.refraction_ratio, 0.8);
    }

    #[test]
    fn test_unknown_type_kept_in_order() {
        let scene = Scene::from_json(
            r#"{"objects": [
                {"type": "torus", "radius": 1},
                {"radius": 2},
                {"type": "sphere", "center": [0, 0, 0], "radius": 1}
            ]}"#,
        )
        .unwrap();

        assert_eq!(scene.objects.len(), 3);
        assert_eq!(scene.objects[0].shape.type_name(), "torus");
        assert_eq!(scene.objects[1].shape.type_name(), "");
        assert_eq!(scene.objects[2].shape.type_name(), "sphere");
    }

    #[test]
    fn test_known_type_with_missing_field_is_error() {
        let result = Scene::from_json(r#"{"objects": [{"type": "sphere", "center": [0, 0, 0]}]}"#);
        match result {
            Err(SceneLoadError::InvalidObject { index, type_name, .. }) => {
                assert_eq!(index, 0);
                assert_eq!(type_name, "sphere");
            }
            other => panic!("expected InvalidObject, got {:?}", other),
        }
    }

    #[test]
    fn test_lights_in_order_with_attenuate_forms() {
        let scene = Scene::from_json(
            r#"{"lights": [
                {"pos": [1, 2, 3], "color": [1, 1, 1], "intensity": 0.5, "attenuate": true},
                {"pos": [0, 0, 0], "color": [1, 0, 0], "intensity": 2, "attenuate": 0.0}
            ]}"#,
        )
        .unwrap();

        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.lights[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(scene.lights[0].attenuate, 1.0);
        assert_eq!(scene.lights[1].intensity, 2.0);
        assert_eq!(scene.lights[1].attenuate, 0.0);
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            Scene::from_json("{ not json"),
            Err(SceneLoadError::Parse(_))
        ));
        assert!(matches!(
            Scene::from_json(r#"{"lights": [{"pos": [0, 0]}]}"#),
            Err(SceneLoadError::InvalidLight { index: 0, .. })
        ));
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        // serde_json reads out-of-range numbers for f32 fields as infinity
        let documents = [
            r#"{"objects": [{"type": "sphere", "center": [0, 0, 0], "radius": 1e39}]}"#,
            r#"{"objects": [{"type": "triangle", "t1": [0, 0, -1e39], "t2": [1, 0, 0], "t3": [0, 1, 0]}]}"#,
            r#"{"objects": [{"type": "mesh", "objFile": "a.obj", "scale": 1e39}]}"#,
            r#"{"objects": [{"type": "box", "minCorner": [0, 0, 0], "maxCorner": [1, 1, 1],
                "material": {"shininess": 1e39}}]}"#,
        ];
        for document in documents {
            assert!(
                matches!(
                    Scene::from_json(document),
                    Err(SceneLoadError::InvalidObject { index: 0, .. })
                ),
                "{} should be rejected",
                document
            );
        }
        assert!(matches!(
            Scene::from_json(
                r#"{"lights": [{"pos": [0, 0, 0], "color": [1, 1, 1], "intensity": 1e39}]}"#
            ),
            Err(SceneLoadError::InvalidLight { index: 0, .. })
        ));
    }

    #[test]
    fn test_library_path() {
        let library = SceneLibrary::default();
        assert_eq!(library.path_for("mesh"), PathBuf::from("scenes/mesh.json"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let library = SceneLibrary::new("/nonexistent/scenes");
        assert!(matches!(
            library.load(DEFAULT_SCENE_NAME),
            Err(SceneLoadError::Read { .. })
        ));
    }
}
