use glam::Vec3;
use log::{debug, info, warn};
use std::fmt::{self, Write};

use super::budget::TriangleBudget;
use super::glsl::{fixed_literal, vec3_literal};
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::loaders::parse_mesh;
use crate::material::Material;
use crate::math::{round_vec3, transform_vertices};
use crate::scene::{Scene, SceneObject, Shape};
use crate::traits::hit_policy::ClosestHitPolicy;
use crate::traits::mesh_source::MeshSource;

const FUNCTION_HEADER: &str = "\
float ray_intersect_scene(Ray ray, out Material out_mat, out Intersection out_intersect) {
  float cur_dist;
  float dist = INFINITY;
  Intersection intersect;

";

const FUNCTION_FOOTER: &str = "  return dist;\n}\n";

/// Recoverable conditions met while compiling
#[derive(Debug, Clone, PartialEq)]
pub enum CompileWarning {
    UnknownObjectType { index: usize, type_name: String },
    /// Raised once, by the mesh whose triangles first hit the cap
    TriangleBudgetExceeded { index: usize, max_triangles: usize },
    /// Mesh left out entirely because the cap was already hit
    MeshSkipped { index: usize, obj_file: String },
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileWarning::UnknownObjectType { index, type_name } => {
                write!(f, "object {index}: unknown object type {type_name:?}")
            }
            CompileWarning::TriangleBudgetExceeded {
                index,
                max_triangles,
            } => write!(
                f,
                "object {index}: loaded meshes exceed the maximum number of triangles ({max_triangles})"
            ),
            CompileWarning::MeshSkipped { index, obj_file } => {
                write!(f, "object {index}: mesh {obj_file:?} skipped, triangle budget spent")
            }
        }
    }
}

/// Generated scene intersection code
#[derive(Debug, Clone)]
pub struct CompiledShader {
    /// Material declarations followed by `ray_intersect_scene`
    pub source: String,
    pub material_count: usize,
    /// Intersection tests emitted, primitives and mesh triangles alike
    pub intersection_count: usize,
    pub triangle_count: usize,
    pub warnings: Vec<CompileWarning>,
}

/// Compiles scenes into a GLSL intersection routine with the geometry inlined
pub struct ShaderEmitter {
    config: CompilerConfig,
    policy: Box<dyn ClosestHitPolicy>,
}

impl ShaderEmitter {
    pub fn new(config: CompilerConfig) -> Self {
        Self::with_policy(config, config.hit_test.policy())
    }

    pub fn with_policy(config: CompilerConfig, policy: Box<dyn ClosestHitPolicy>) -> Self {
        Self { config, policy }
    }

    pub fn compile(
        &self,
        scene: &Scene,
        meshes: &dyn MeshSource,
    ) -> Result<CompiledShader, CompileError> {
        let mut pass = CompilePass {
            emitter: self,
            materials: String::new(),
            body: String::new(),
            budget: TriangleBudget::new(self.config.max_triangles),
            intersection_count: 0,
            warnings: Vec::new(),
        };

        for (index, object) in scene.objects.iter().enumerate() {
            pass.compile_object(index, object, meshes)?;
        }

        let mut source = pass.materials;
        source.push('\n');
        source.push_str(FUNCTION_HEADER);
        source.push_str(&pass.body);
        source.push_str(FUNCTION_FOOTER);

        info!(
            "Compiled {} objects: {} intersection tests, {} mesh triangles, {} warnings",
            scene.objects.len(),
            pass.intersection_count,
            pass.budget.used(),
            pass.warnings.len()
        );

        Ok(CompiledShader {
            source,
            material_count: scene.objects.len(),
            intersection_count: pass.intersection_count,
            triangle_count: pass.budget.used(),
            warnings: pass.warnings,
        })
    }
}

/// State of a single compile; dropped when the compile ends
struct CompilePass<'a> {
    emitter: &'a ShaderEmitter,
    materials: String,
    body: String,
    budget: TriangleBudget,
    intersection_count: usize,
    warnings: Vec<CompileWarning>,
}

impl CompilePass<'_> {
    fn compile_object(
        &mut self,
        index: usize,
        object: &SceneObject,
        meshes: &dyn MeshSource,
    ) -> Result<(), CompileError> {
        let material = format!("material{index}");
        self.declare_material(&material, &object.material)?;

        let precision = self.emitter.config.precision;
        let scalar = |value: f32| fixed_literal(value, precision);

        let args = match &object.shape {
            Shape::Sphere { center, radius } => vec![vec3_literal(*center), scalar(*radius)],
            Shape::Plane { normal, dist } => vec![vec3_literal(*normal), scalar(*dist)],
            Shape::Box {
                min_corner,
                max_corner,
            } => vec![vec3_literal(*min_corner), vec3_literal(*max_corner)],
            Shape::Cylinder {
                bottom_center,
                top_center,
                radius,
            }
            | Shape::Cone {
                bottom_center,
                top_center,
                radius,
            } => vec![
                vec3_literal(*bottom_center),
                vec3_literal(*top_center),
                scalar(*radius),
            ],
            Shape::Triangle { t1, t2, t3 } => {
                vec![vec3_literal(*t1), vec3_literal(*t2), vec3_literal(*t3)]
            }
            Shape::Mesh {
                obj_file,
                scale,
                offset,
            } => {
                return self.compile_mesh(index, &material, obj_file, *scale, *offset, meshes);
            }
            Shape::Unknown { type_name } => {
                warn!("Unknown object type {:?} at index {}, skipping", type_name, index);
                self.warnings.push(CompileWarning::UnknownObjectType {
                    index,
                    type_name: type_name.clone(),
                });
                return Ok(());
            }
        };

        self.write_intersection(object.shape.type_name(), &args, &material)?;
        Ok(())
    }

    fn compile_mesh(
        &mut self,
        index: usize,
        material: &str,
        obj_file: &str,
        scale: Option<f32>,
        offset: Option<[f32; 3]>,
        meshes: &dyn MeshSource,
    ) -> Result<(), CompileError> {
        if self.budget.is_exceeded() {
            debug!("Skipping mesh {:?}: triangle budget spent", obj_file);
            self.warnings.push(CompileWarning::MeshSkipped {
                index,
                obj_file: obj_file.to_string(),
            });
            return Ok(());
        }

        let mesh_error = |source| CompileError::Mesh {
            index,
            obj_file: obj_file.to_string(),
            source,
        };
        let text = meshes.read_mesh(obj_file).map_err(mesh_error)?;
        let mesh = parse_mesh(&text).map_err(mesh_error)?;

        let precision = self.emitter.config.precision;
        let vertices: Vec<Vec3> = transform_vertices(&mesh.vertices, scale, offset.map(Vec3::from_array))
            .into_iter()
            .map(|v| round_vec3(v, precision))
            .collect();

        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(CompileError::NonFiniteVertex {
                index,
                obj_file: obj_file.to_string(),
            });
        }
        debug!(
            "Mesh {:?}: {} vertices, {} faces",
            obj_file,
            vertices.len(),
            mesh.faces.len()
        );

        'faces: for face in &mesh.faces {
            // fan around the face's first vertex
            for j in 1..face.len() - 1 {
                if !self.budget.try_take() {
                    break 'faces;
                }
                let args = [face[0], face[j], face[j + 1]]
                    .map(|vertex| vec3_literal(vertices[vertex].to_array()));
                self.write_intersection("triangle", &args, material)?;
            }
        }

        if self.budget.is_exceeded() {
            warn!(
                "Loaded meshes have exceeded the maximum number of triangles ({})",
                self.budget.max()
            );
            self.warnings.push(CompileWarning::TriangleBudgetExceeded {
                index,
                max_triangles: self.budget.max(),
            });
        }
        Ok(())
    }

    fn declare_material(&mut self, name: &str, material: &Material) -> fmt::Result {
        let precision = self.emitter.config.precision;
        // argument order matches the Material struct in the fragment shader
        writeln!(
            self.materials,
            "Material {name} = Material({}, {}, {}, {}, {}, {}, {}, {});",
            material.kind.code(),
            vec3_literal(material.color),
            fixed_literal(material.shininess, precision),
            vec3_literal(material.specular),
            material.reflect_type.code(),
            fixed_literal(material.reflectivity, precision),
            fixed_literal(material.refraction_ratio, precision),
            material.special.code(),
        )
    }

    fn write_intersection(&mut self, shape: &str, args: &[String], material: &str) -> fmt::Result {
        writeln!(
            self.body,
            "  cur_dist = find_intersection_with_{shape}(ray, {}, intersect);",
            args.join(", ")
        )?;
        self.emitter.policy.write_adoption(&mut self.body, material)?;
        self.intersection_count += 1;
        Ok(())
    }
}
