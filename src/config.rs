use crate::math::DEFAULT_PRECISION;
use crate::traits::hit_policy::{ClosestHitPolicy, InlineChooseCloser, RuntimeChooseCloser};

/// Cap on mesh-derived triangles per compiled scene
pub const DEFAULT_MAX_TRIANGLES: usize = 50;

/// How the generated code adopts the closest hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitTest {
    /// Call `choose_closer_intersection` from the student shader
    #[default]
    Runtime,
    /// Compare distances inline
    Inline,
}

impl HitTest {
    pub fn policy(self) -> Box<dyn ClosestHitPolicy> {
        match self {
            HitTest::Runtime => Box::new(RuntimeChooseCloser),
            HitTest::Inline => Box::new(InlineChooseCloser),
        }
    }
}

/// Settings for one scene compile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerConfig {
    pub max_triangles: usize,
    /// Decimal places for scalar literals and rounded mesh coordinates
    pub precision: u32,
    pub hit_test: HitTest,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_triangles: DEFAULT_MAX_TRIANGLES,
            precision: DEFAULT_PRECISION,
            hit_test: HitTest::Runtime,
        }
    }
}
