//! Mesh data structures and operations for voxel rendering.
//!
//! This module provides the triangle-list container the mesher fills. It handles the
//! conversion from merged faces to vertex and index buffers.

use crate::engine_state::{
    rendering::Vertex,
    voxels::{block::block_side::BlockSide, chunk::Chunk},
};

use super::{face::Face, greedy};

/// UV of each emitted corner, in corner order. Merged faces are not tiled.
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// A triangle-list mesh for one chunk.
///
/// Every face contributes four fresh vertices and six indices; corners shared with a
/// neighbouring face are not deduplicated. A mesh is rebuilt wholesale whenever its chunk
/// changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// The vertex data, four per face
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`, six per face
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Generates a mesh for the whole chunk using greedy meshing.
    pub fn greedy(chunk: &Chunk) -> Self {
        greedy::GreedyMesher::new().build_mesh(chunk)
    }

    /// Generates a mesh for the specified sides of a chunk using greedy meshing.
    ///
    /// # Arguments
    /// * `chunk` - The chunk to generate the mesh for
    /// * `sides` - The block sides to emit; faces on other sides are skipped
    pub fn greedy_sided(chunk: &Chunk, sides: &[BlockSide]) -> Self {
        greedy::GreedyMesher::new().build_mesh_sided(chunk, sides)
    }

    /// Appends one face as two counter-clockwise triangles.
    pub fn add_face(&mut self, face: &Face) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(Mesh::generate_face_vertices(face));
        self.indices.extend(Mesh::generate_face_indices(base));
    }

    /// Generates vertex data for a single face.
    ///
    /// # Returns
    /// The four corners in the face's winding order, each carrying the face normal and its
    /// corner of the unit UV square.
    pub fn generate_face_vertices(face: &Face) -> [Vertex; 4] {
        let normal = face.normal();
        let mut vertices = [Vertex::new(face.corners[0], normal, FACE_UVS[0]); 4];
        for (i, vertex) in vertices.iter_mut().enumerate().skip(1) {
            *vertex = Vertex::new(face.corners[i], normal, FACE_UVS[i]);
        }
        vertices
    }

    /// Generates index data for a face whose first vertex is at `base`.
    ///
    /// # Returns
    /// Two triangles (0, 1, 2) and (0, 2, 3) relative to `base`, preserving the winding of
    /// the corners.
    pub fn generate_face_indices(base: u32) -> [u32; 6] {
        [base, base + 1, base + 2, base, base + 2, base + 3]
    }

    /// Number of faces (quads) in the mesh.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The vertex buffer as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer as raw bytes, ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Four-vertex groups of the mesh, one per face.
    pub fn quads(&self) -> impl Iterator<Item = &[Vertex]> + '_ {
        self.vertices.chunks_exact(4)
    }
}
