use std::fmt::{self, Write};

/// Decides whether a candidate hit replaces the closest hit found so far.
///
/// The emitter only orders the intersection calls; each implementation
/// writes the GLSL that adopts a closer hit following [`choose_closer`].
pub trait ClosestHitPolicy {
    /// Write the statements that adopt `cur_dist`/`intersect` into
    /// `dist`/`out_intersect` and set `out_mat` to `material`
    fn write_adoption(&self, out: &mut String, material: &str) -> fmt::Result;
}

/// Hits closer than this are treated as self-intersections
pub const HIT_EPSILON: f32 = 1.0e-4;

/// A valid candidate is in front of the ray and strictly closer than `best`
pub fn choose_closer(candidate: f32, best: f32) -> bool {
    candidate > HIT_EPSILON && candidate < best
}

/// Delegates to `choose_closer_intersection` from the shader runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeChooseCloser;

impl ClosestHitPolicy for RuntimeChooseCloser {
    fn write_adoption(&self, out: &mut String, material: &str) -> fmt::Result {
        writeln!(
            out,
            "  if (choose_closer_intersection(cur_dist, dist, intersect, out_intersect)) {{"
        )?;
        writeln!(out, "    out_mat = {material};")?;
        writeln!(out, "  }}")
    }
}

/// Emits the comparison inline, for shaders without the runtime helper
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineChooseCloser;

impl ClosestHitPolicy for InlineChooseCloser {
    fn write_adoption(&self, out: &mut String, material: &str) -> fmt::Result {
        writeln!(
            out,
            "  if (cur_dist > {HIT_EPSILON:e} && cur_dist < dist) {{"
        )?;
        writeln!(out, "    dist = cur_dist;")?;
        writeln!(out, "    out_intersect = intersect;")?;
        writeln!(out, "    out_mat = {material};")?;
        writeln!(out, "  }}")
    }
}
