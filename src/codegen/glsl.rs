//! GLSL literal formatting. Output never depends on locale.

use crate::math::round_to_digits;

/// Shortest exact form, always with a decimal point (`5` -> `5.0`)
pub fn float_literal(value: f32) -> String {
    let text = value.to_string();
    if text.contains(['.', 'e', 'E']) {
        text
    } else {
        format!("{text}.0")
    }
}

/// Fixed number of decimals (`5` -> `5.00` at precision 2).
/// Ties round away from zero, like mesh coordinates.
pub fn fixed_literal(value: f32, precision: u32) -> String {
    let rounded = round_to_digits(value, precision);
    if precision == 0 {
        return float_literal(rounded);
    }
    format!("{:.*}", precision as usize, rounded)
}

pub fn vec3_literal(v: [f32; 3]) -> String {
    format!(
        "vec3({}, {}, {})",
        float_literal(v[0]),
        float_literal(v[1]),
        float_literal(v[2])
    )
}
