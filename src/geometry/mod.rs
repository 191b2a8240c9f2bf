//! # Geometry Construction
//!
//! Procedural shape generation and OBJ import, producing flat numeric
//! buffers laid out for direct upload to GPU vertex/index buffers.
//!
//! ## Supported sources
//!
//! - **Cube**: subdivided unit cube, flat shaded ([`generate_cube`])
//! - **Cylinder**: cap fans plus side quads, flat or smooth ([`generate_cylinder`])
//! - **Sphere**: icosahedron subdivision, flat or smooth ([`generate_sphere`])
//! - **OBJ files**: indexed meshes with vertex welding ([`load_obj`])
//!
//! ## Usage
//!
//! ```rust
//! use keel::geometry::{generate_sphere, NormalMode};
//!
//! let sphere = generate_sphere(3, NormalMode::Smooth);
//! assert_eq!(sphere.triangle_count(), 20 * 4usize.pow(2));
//! ```

pub mod material;
pub mod obj;
pub mod primitives;

pub use material::Material;
pub use obj::{load_obj, ObjError};
pub use primitives::{generate_cube, generate_cylinder, generate_sphere};

use crate::math::Vec3;

/// How a generator assigns normals to the triangles it emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NormalMode {
    /// One face normal replicated across a triangle's vertices (faceted
    /// shading).
    Flat,
    /// Per-vertex normals that vary continuously across adjacent triangles
    /// (radial on cylinder sides, positional on the unit sphere).
    Smooth,
}

/// A 3D vertex with position and normal, in the interleaved layout GPU
/// pipelines expect.
///
/// `#[repr(C)]` keeps the memory layout stable for buffer upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Mesh buffers ready for GPU upload.
///
/// Positions and normals are flat float triples, UVs flat float pairs, and
/// `elements` a 16-bit index list referencing position triples. All counts
/// are derived from buffer lengths on demand; there is deliberately no
/// stored count to fall out of sync.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions, 3 floats per vertex.
    pub vertices: Vec<f32>,
    /// Vertex normals, 3 floats per vertex; empty when the source carried
    /// none. When populated, holds exactly one normal per vertex.
    pub normals: Vec<f32>,
    /// Texture coordinates, 2 floats per vertex; empty when the source
    /// carried none.
    pub uvs: Vec<f32>,
    /// Triangle indices into the position buffer, counter-clockwise winding.
    pub elements: Vec<u16>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices, derived from the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of normals, derived from the normal buffer.
    pub fn normal_count(&self) -> usize {
        self.normals.len() / 3
    }

    /// Number of texture coordinate pairs, derived from the UV buffer.
    pub fn uv_count(&self) -> usize {
        self.uvs.len() / 2
    }

    /// Number of indices in the element buffer (the indexed draw count).
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.elements.len() / 3
    }

    /// Drops all buffer contents, leaving an empty mesh.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.uvs.clear();
        self.elements.clear();
    }

    /// Appends a counter-clockwise triangle with a flat normal computed
    /// from its edges.
    ///
    /// The face normal is the normalized cross product of `v1 - v0` and
    /// `v2 - v0`, replicated across all three vertices. A degenerate
    /// triangle yields the zero normal.
    pub fn add_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3) {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        self.add_triangle_with_normals(v0, v1, v2, normal, normal, normal);
    }

    /// Appends a counter-clockwise triangle with explicit per-vertex
    /// normals.
    pub fn add_triangle_with_normals(
        &mut self,
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        n0: Vec3,
        n1: Vec3,
        n2: Vec3,
    ) {
        for v in [v0, v1, v2] {
            self.vertices.extend_from_slice(&v.to_array());
        }
        for n in [n0, n1, n2] {
            self.normals.extend_from_slice(&n.to_array());
        }
    }

    /// Fills the element buffer with `0..vertex_count`, the layout used by
    /// the procedural generators (every triangle owns its three vertices).
    ///
    /// Meshes beyond `u16::MAX` vertices cannot be addressed by a 16-bit
    /// index buffer; the fill stops there with a warning.
    pub(crate) fn fill_sequential_elements(&mut self) {
        let count = self.vertex_count();
        if count > usize::from(u16::MAX) + 1 {
            log::warn!(
                "mesh has {count} vertices, truncating element buffer at the 16-bit index limit"
            );
        }
        self.elements.clear();
        self.elements
            .extend((0..count.min(usize::from(u16::MAX) + 1)).map(|i| i as u16));
    }

    /// Interleaves positions and normals into [`Vertex3D`] records for
    /// vertex buffer upload. Vertices without a normal get `+Y`.
    pub fn vertex_data(&self) -> Vec<Vertex3D> {
        (0..self.vertex_count())
            .map(|i| Vertex3D {
                position: [
                    self.vertices[i * 3],
                    self.vertices[i * 3 + 1],
                    self.vertices[i * 3 + 2],
                ],
                normal: if i < self.normal_count() {
                    [
                        self.normals[i * 3],
                        self.normals[i * 3 + 1],
                        self.normals[i * 3 + 2],
                    ]
                } else {
                    [0.0, 1.0, 0.0]
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_triangle_computes_unit_flat_normal() {
        let mut mesh = Mesh::new();
        mesh.add_triangle(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        );
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.normal_count(), 3);
        // CCW in the XY plane faces +Z, and the normal is unit length even
        // though the edges are not.
        assert_eq!(&mesh.normals[0..3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn degenerate_triangle_gets_zero_normal() {
        let mut mesh = Mesh::new();
        let p = Vec3::new(1.0, 1.0, 1.0);
        mesh.add_triangle(p, p, p);
        assert_eq!(&mesh.normals[0..3], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn counts_are_derived_from_buffers() {
        let mut mesh = Mesh::new();
        mesh.add_triangle(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        mesh.fill_sequential_elements();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.element_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);

        mesh.clear();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.element_count(), 0);
    }

    #[test]
    fn vertex_data_interleaves_positions_and_normals() {
        let mut mesh = Mesh::new();
        mesh.add_triangle_with_normals(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let data = mesh.vertex_data();
        assert_eq!(data.len(), 3);
        assert_eq!(data[1].position, [4.0, 5.0, 6.0]);
        assert_eq!(data[1].normal, [0.0, 0.0, 1.0]);
    }
}
