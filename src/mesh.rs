//! Mesh buffers consumed by the rendering pipeline.
//!
//! A [`MeshBuffer`] holds parallel per-vertex attribute arrays (positions,
//! normals, colors) and a triangle index list. The buffer is validated once
//! at construction; every later stage of the pipeline relies on the
//! invariants holding and performs no per-access bounds checks.

use glam::{Vec3, Vec4};
use thiserror::Error;

/// Errors detected while validating a mesh buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// The per-vertex attribute arrays are not all the same length.
    #[error("attribute arrays have mismatched lengths (positions: {positions}, normals: {normals}, colors: {colors})")]
    MismatchedAttributes {
        positions: usize,
        normals: usize,
        colors: usize,
    },
    /// The index list does not describe whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),
    /// An index points past the end of the vertex arrays.
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

/// Vertex data plus triangle indices, ready for drawing.
///
/// The attribute arrays are parallel: element `i` of each array describes
/// vertex `i`. Indices are grouped in threes, each triple naming one
/// triangle's vertices in winding order. Construction via [`MeshBuffer::new`]
/// guarantees equal array lengths and in-range indices.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    colors: Vec<Vec4>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// Builds a mesh buffer, validating the parallel-array invariants.
    pub fn new(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        colors: Vec<Vec4>,
        indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        if positions.len() != normals.len() || positions.len() != colors.len() {
            return Err(MeshError::MismatchedAttributes {
                positions: positions.len(),
                normals: normals.len(),
                colors: colors.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(MeshError::IndexOutOfBounds {
                index,
                vertex_count: positions.len(),
            });
        }

        Ok(Self {
            positions,
            normals,
            colors,
            indices,
        })
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// A unit cube centered on the origin, with one color per corner.
    ///
    /// Useful as demo/test geometry when no importer is wired up. Faces wind
    /// so that outward faces survive the pipeline's visibility cull.
    pub fn unit_cube() -> Self {
        let positions = CUBE_POSITIONS.to_vec();
        // Corner normals point away from the cube center
        let normals = CUBE_POSITIONS.iter().map(|p| p.normalize()).collect();
        let colors = CUBE_COLORS.to_vec();
        let indices = CUBE_INDICES.to_vec();

        // Static data above satisfies the invariants by construction
        Self {
            positions,
            normals,
            colors,
            indices,
        }
    }
}

const CUBE_POSITIONS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const CUBE_COLORS: [Vec4; 8] = [
    Vec4::new(1.0, 0.0, 0.0, 1.0),
    Vec4::new(0.0, 1.0, 0.0, 1.0),
    Vec4::new(0.0, 0.0, 1.0, 1.0),
    Vec4::new(1.0, 1.0, 0.0, 1.0),
    Vec4::new(1.0, 0.0, 1.0, 1.0),
    Vec4::new(0.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, 1.0, 1.0, 1.0),
    Vec4::new(0.5, 0.5, 0.5, 1.0),
];

#[rustfmt::skip]
const CUBE_INDICES: [u32; 36] = [
    // Front face
    0, 1, 2,  0, 2, 3,
    // Right face
    3, 2, 4,  3, 4, 5,
    // Back face
    5, 4, 6,  5, 6, 7,
    // Left face
    7, 6, 1,  7, 1, 0,
    // Top face
    1, 6, 4,  1, 4, 2,
    // Bottom face
    5, 7, 0,  5, 0, 3,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_attributes() -> (Vec<Vec3>, Vec<Vec3>, Vec<Vec4>) {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let normals = vec![Vec3::Z; 4];
        let colors = vec![Vec4::ONE; 4];
        (positions, normals, colors)
    }

    #[test]
    fn accepts_well_formed_buffer() {
        let (positions, normals, colors) = quad_attributes();
        let mesh = MeshBuffer::new(positions, normals, colors, vec![0, 1, 2, 0, 2, 3]).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn rejects_mismatched_attribute_lengths() {
        let (positions, mut normals, colors) = quad_attributes();
        normals.pop();
        let err = MeshBuffer::new(positions, normals, colors, vec![0, 1, 2]).unwrap_err();
        assert!(matches!(err, MeshError::MismatchedAttributes { .. }));
    }

    #[test]
    fn rejects_partial_triangle() {
        let (positions, normals, colors) = quad_attributes();
        let err = MeshBuffer::new(positions, normals, colors, vec![0, 1]).unwrap_err();
        assert_eq!(err, MeshError::PartialTriangle(2));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let (positions, normals, colors) = quad_attributes();
        let err = MeshBuffer::new(positions, normals, colors, vec![0, 1, 4]).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfBounds {
                index: 4,
                vertex_count: 4
            }
        );
    }

    #[test]
    fn unit_cube_is_valid() {
        let cube = MeshBuffer::unit_cube();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.triangle_count(), 12);
        // Re-validate the built-in data through the public constructor
        MeshBuffer::new(
            cube.positions().to_vec(),
            cube.normals().to_vec(),
            cube.colors().to_vec(),
            cube.indices().to_vec(),
        )
        .unwrap();
    }
}
