use serde::Deserialize;

/// How a surface is lit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MaterialType {
    #[serde(rename = "BASIC_MATERIAL", alias = "basic")]
    Basic,
    #[serde(rename = "PHONG_MATERIAL", alias = "phong")]
    Phong,
    #[serde(rename = "LAMBERT_MATERIAL", alias = "lambert")]
    Lambert,
}

impl MaterialType {
    pub const fn code(self) -> u32 {
        match self {
            MaterialType::Basic => 1,
            MaterialType::Phong => 2,
            MaterialType::Lambert => 3,
        }
    }
}

/// How rays bounce off a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ReflectType {
    #[serde(rename = "NONE_REFLECT", alias = "none")]
    None,
    #[serde(rename = "MIRROR_REFLECT", alias = "mirror")]
    Mirror,
    #[serde(rename = "GLASS_REFLECT", alias = "glass")]
    Glass,
}

impl ReflectType {
    pub const fn code(self) -> u32 {
        match self {
            ReflectType::None => 1,
            ReflectType::Mirror => 2,
            ReflectType::Glass => 3,
        }
    }
}

/// Procedural surface patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SpecialMaterial {
    #[serde(rename = "NONE", alias = "none")]
    None,
    #[serde(rename = "CHECKERBOARD", alias = "checkerboard")]
    Checkerboard,
    #[serde(rename = "MY_SPECIAL", alias = "custom")]
    Custom,
}

impl SpecialMaterial {
    pub const fn code(self) -> u32 {
        match self {
            SpecialMaterial::None => 0,
            SpecialMaterial::Checkerboard => 1,
            SpecialMaterial::Custom => 2,
        }
    }
}

/// Fully resolved surface description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kind: MaterialType,
    pub color: [f32; 3],
    pub shininess: f32,
    pub specular: [f32; 3],
    pub reflect_type: ReflectType,
    pub reflectivity: f32,
    pub refraction_ratio: f32,
    pub special: SpecialMaterial,
}

/// Gray, diffuse, non-reflective
pub const DEFAULT_MATERIAL: Material = Material {
    kind: MaterialType::Lambert,
    color: [0.5, 0.5, 0.5],
    shininess: 10000.0,
    specular: [0.0, 0.0, 0.0],
    reflect_type: ReflectType::None,
    reflectivity: 0.0,
    refraction_ratio: 0.8,
    special: SpecialMaterial::None,
};

impl Material {
    pub fn is_finite(&self) -> bool {
        [self.shininess, self.reflectivity, self.refraction_ratio]
            .iter()
            .chain(&self.color)
            .chain(&self.specular)
            .all(|v| v.is_finite())
    }
}

impl Default for Material {
    fn default() -> Self {
        DEFAULT_MATERIAL
    }
}

/// Partial material as written in a scene document.
///
/// Every absent field falls back to the base material when resolved; the
/// merge is per field, so e.g. a lone `color` keeps the base `specular`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOverride {
    #[serde(rename = "type")]
    pub kind: Option<MaterialType>,
    pub color: Option<[f32; 3]>,
    pub shininess: Option<f32>,
    pub specular: Option<[f32; 3]>,
    pub reflect_type: Option<ReflectType>,
    pub reflectivity: Option<f32>,
    pub refraction_ratio: Option<f32>,
    pub special: Option<SpecialMaterial>,
}

impl MaterialOverride {
    pub fn apply_to(&self, base: &Material) -> Material {
        Material {
            kind: self.kind.unwrap_or(base.kind),
            color: self.color.unwrap_or(base.color),
            shininess: self.shininess.unwrap_or(base.shininess),
            specular: self.specular.unwrap_or(base.specular),
            reflect_type: self.reflect_type.unwrap_or(base.reflect_type),
            reflectivity: self.reflectivity.unwrap_or(base.reflectivity),
            refraction_ratio: self.refraction_ratio.unwrap_or(base.refraction_ratio),
            special: self.special.unwrap_or(base.special),
        }
    }

    pub fn resolve(&self) -> Material {
        self.apply_to(&DEFAULT_MATERIAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_is_default() {
        assert_eq!(MaterialOverride::default().resolve(), DEFAULT_MATERIAL);
    }

    #[test]
    fn test_color_only_keeps_other_defaults() {
        let over = MaterialOverride {
            color: Some([1.0, 0.0, 0.0]),
            ..Default::default()
        };
        let mat = over.resolve();

        assert_eq!(mat.color, [1.0, 0.0, 0.0]);
        assert_eq!(mat.shininess, 10000.0);
        assert_eq!(mat.specular, [0.0, 0.0, 0.0]);
        assert_eq!(mat.reflect_type, ReflectType::None);
        assert_eq!(mat.reflectivity, 0.0);
        assert_eq!(mat.refraction_ratio, 0.8);
        assert_eq!(mat.special, SpecialMaterial::None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let over = MaterialOverride {
            kind: Some(MaterialType::Phong),
            reflectivity: Some(0.4),
            ..Default::default()
        };
        let once = over.resolve();
        let twice = over.apply_to(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_enum_spellings() {
        let long: MaterialOverride = serde_json::from_str(
            r#"{"type": "PHONG_MATERIAL", "reflectType": "GLASS_REFLECT", "special": "MY_SPECIAL"}"#,
        )
        .unwrap();
        let short: MaterialOverride =
            serde_json::from_str(r#"{"type": "phong", "reflectType": "glass", "special": "custom"}"#)
                .unwrap();
        assert_eq!(long, short);
        assert_eq!(long.kind, Some(MaterialType::Phong));
    }

    #[test]
    fn test_unknown_enum_spelling_rejected() {
        let result: Result<MaterialOverride, _> =
            serde_json::from_str(r#"{"reflectType": "SPARKLY"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_finite() {
        assert!(DEFAULT_MATERIAL.is_finite());
        let over = MaterialOverride {
            specular: Some([0.0, f32::INFINITY, 0.0]),
            ..Default::default()
        };
        assert!(!over.resolve().is_finite());
    }

    #[test]
    fn test_codes() {
        assert_eq!(MaterialType::Basic.code(), 1);
        assert_eq!(MaterialType::Lambert.code(), 3);
        assert_eq!(ReflectType::None.code(), 1);
        assert_eq!(ReflectType::Glass.code(), 3);
        assert_eq!(SpecialMaterial::None.code(), 0);
        assert_eq!(SpecialMaterial::Custom.code(), 2);
    }
}
