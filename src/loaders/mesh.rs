use glam::Vec3;
use log::{debug, warn};

use crate::error::MeshLoadError;

/// Vertex positions and polygon faces read from a mesh file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshGeometry {
    pub vertices: Vec<Vec3>,
    /// 0-based vertex indices, at least 3 per face
    pub faces: Vec<Vec<usize>>,
}

impl MeshGeometry {
    /// Triangles produced by fan-splitting every face
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|face| face.len().saturating_sub(2)).sum()
    }
}

/// Directives that carry nothing the shader compiler uses
const IGNORED_DIRECTIVES: [&str; 7] = ["vn", "vt", "o", "g", "usemtl", "mtllib", "s"];

/// Parses the vertex/face subset of the OBJ text format.
///
/// Lines with unknown directives are logged and skipped. Face indices are
/// 1-based; relative (negative) indices are not supported.
pub fn parse_mesh(text: &str) -> Result<MeshGeometry, MeshLoadError> {
    let joined = join_continuations(text);

    let mut mesh = MeshGeometry::default();
    // (line, highest index) of each face, checked once all vertices are known
    let mut face_lines = Vec::new();

    for (line_index, raw_line) in joined.lines().enumerate() {
        let line_no = line_index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(directive) = tokens.next() else {
            continue;
        };

        match directive {
            "v" => mesh.vertices.push(parse_vertex(line_no, line, tokens)?),
            "f" => {
                let face = parse_face(line_no, tokens)?;
                if face.len() < 3 {
                    warn!(
                        "Dropping face with {} vertices on line {}",
                        face.len(),
                        line_no
                    );
                    continue;
                }
                let highest = face.iter().copied().max().unwrap_or(0);
                face_lines.push((line_no, highest));
                mesh.faces.push(face);
            }
            d if IGNORED_DIRECTIVES.contains(&d) => {}
            _ => debug!("Unhandled mesh line {}: {:?}", line_no, line),
        }
    }

    let vertex_count = mesh.vertices.len();
    if let Some(&(line, highest)) = face_lines.iter().find(|(_, highest)| *highest >= vertex_count) {
        return Err(MeshLoadError::IndexOutOfRange {
            line,
            index: highest + 1,
            vertex_count,
        });
    }

    Ok(mesh)
}

fn join_continuations(text: &str) -> String {
    text.replace("\\\r\n", "").replace("\\\n", "")
}

fn parse_vertex<'a>(
    line: usize,
    text: &str,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<Vec3, MeshLoadError> {
    let malformed = || MeshLoadError::MalformedVertex {
        line,
        text: text.to_string(),
    };

    let coords = tokens
        .take(3)
        .map(|token| match token.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(malformed()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    match coords.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(malformed()),
    }
}

fn parse_face<'a>(
    line: usize,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<Vec<usize>, MeshLoadError> {
    tokens
        .map(|token| {
            // "v/vt/vn" and "v//vn" reference a vertex by their first field
            let vertex = token.split('/').next().unwrap_or(token);
            let index: i64 = vertex.parse().map_err(|_| MeshLoadError::MalformedFace {
                line,
                token: token.to_string(),
            })?;
            if index < 1 {
                return Err(MeshLoadError::UnsupportedIndex { line, index });
            }
            Ok((index - 1) as usize)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    #[test]
    fn test_parse_quad() {
        let mesh = parse_mesh(QUAD).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces, vec![vec![0, 1, 2, 3]]);
        assert_eq!(mesh.vertices[2], Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_ignored_directives_and_comments() {
        let text = "\
# exported cube
mtllib cube.mtl
o Cube
g side
usemtl gray
s off
v 0 0 0
vn 0 0 1
vt 0.5 0.5
v 1 0 0
v 0 1 0
f 1 2 3
";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.faces.len(), 1);
    }

    #[test]
    fn test_unknown_directive_is_not_an_error() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nl 1 2\ncurv 0 1 1 2\nf 1 2 3\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.faces.len(), 1);
    }

    #[test]
    fn test_slash_face_tokens() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2//1 3/2\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.faces, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_line_continuation() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 \\\n3\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.faces, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_faces_before_vertices() {
        let text = "f 1 2 3\nv 0 0 0\nv 1 0 0\nv 0 1 0\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.faces.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let text = "v 3 0 0\nv 1 0 0\nv 2 0 0\nf 3 1 2\nf 1 2 3\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.vertices[0].x, 3.0);
        assert_eq!(mesh.vertices[2].x, 2.0);
        assert_eq!(mesh.faces, vec![vec![2, 0, 1], vec![0, 1, 2]]);
    }

    #[test]
    fn test_degenerate_face_dropped() {
        let text = "v 0 0 0\nv 1 0 0\nf 1 2\n";
        let mesh = parse_mesh(text).unwrap();
        assert!(mesh.faces.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_negative_index_rejected() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshLoadError::UnsupportedIndex { line: 4, index: -3 })
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 7\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshLoadError::IndexOutOfRange {
                line: 4,
                index: 7,
                vertex_count: 3
            })
        ));
    }

    #[test]
    fn test_malformed_vertex() {
        assert!(matches!(
            parse_mesh("v 0 zero 0\n"),
            Err(MeshLoadError::MalformedVertex { line: 1, .. })
        ));
        assert!(matches!(
            parse_mesh("v 0 0\n"),
            Err(MeshLoadError::MalformedVertex { line: 1, .. })
        ));
    }

    #[test]
    fn test_non_finite_vertex_rejected() {
        for line in ["v inf 0 0\n", "v 0 nan 0\n", "v 0 0 1e39\n", "v -infinity 0 0\n"] {
            assert!(
                matches!(parse_mesh(line), Err(MeshLoadError::MalformedVertex { line: 1, .. })),
                "{:?} should be rejected",
                line
            );
        }
    }
}
