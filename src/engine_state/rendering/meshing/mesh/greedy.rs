//! Greedy meshing implementation for voxel rendering.
//!
//! This module implements the greedy meshing algorithm which combines adjacent coplanar
//! faces with the same block type into larger quads, significantly reducing the number of
//! vertices needed to render a chunk.
//!
//! Each axis is swept one slice boundary at a time. For every boundary a 2D mask records
//! which unit faces are visible and which block type they show; the mask is then consumed
//! row by row, growing each rectangle first along the row and then across rows.

use cgmath::Point3;
use log::debug;
use web_time::Instant;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, block_type::BlockType},
    chunk::Chunk,
};

use super::{face::Face, mesh::Mesh};

/// One visible unit face in the slice mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MaskCell {
    block_type: BlockType,
    /// The solid cell is ahead of the boundary, so the face points backward
    back_face: bool,
}

/// Builds greedy meshes, keeping its slice mask between calls.
///
/// # Examples
///
/// ```
/// use voxel_core::{BlockType, Chunk, GreedyMesher};
///
/// let chunk = Chunk::solid(4, 4, 4, BlockType::STONE);
/// let mesh = GreedyMesher::new().build_mesh(&chunk);
/// assert_eq!(mesh.quad_count(), 6);
/// ```
#[derive(Debug, Default)]
pub struct GreedyMesher {
    mask: Vec<Option<MaskCell>>,
}

impl GreedyMesher {
    pub fn new() -> Self {
        GreedyMesher::default()
    }

    /// Meshes every exposed face of `chunk`. Cells outside the chunk count as air.
    pub fn build_mesh(&mut self, chunk: &Chunk) -> Mesh {
        self.build_mesh_sided(chunk, &BlockSide::all())
    }

    /// Generates a mesh for the specified sides of a chunk using greedy meshing.
    ///
    /// # Arguments
    /// * `chunk` - The chunk to generate the mesh for
    /// * `sides` - A list of block sides to generate mesh data for
    ///
    /// # Returns
    /// A new `Mesh` containing the greedy-meshed geometry for the specified sides.
    ///
    /// # Performance
    /// Runs in O(n) time where n is the number of voxels in the chunk, plus the merge work
    /// per slice, which is bounded by the slice area.
    pub fn build_mesh_sided(&mut self, chunk: &Chunk, sides: &[BlockSide]) -> Mesh {
        let start = Instant::now();
        let mut mesh = Mesh::new();
        let dims = chunk.size().map(|size| size as i32);

        for d in 0..3 {
            let u = (d + 1) % 3;
            let v = (d + 2) % 3;
            let (du, dv) = (dims[u], dims[v]);

            self.mask.clear();
            self.mask.resize((du * dv) as usize, None);

            let mut step = [0i32; 3];
            step[d] = 1;

            // -1 and dims[d] - 1 are the slices against the chunk exterior.
            for slice in -1..dims[d] {
                let mut x = [0i32; 3];
                x[d] = slice;

                let mut n = 0;
                for j in 0..dv {
                    x[v] = j;
                    for i in 0..du {
                        x[u] = i;
                        let behind = solid_type(chunk, x);
                        let ahead = solid_type(chunk, [x[0] + step[0], x[1] + step[1], x[2] + step[2]]);
                        self.mask[n] = match (behind, ahead) {
                            (Some(block_type), None) => Some(MaskCell {
                                block_type,
                                back_face: false,
                            }),
                            (None, Some(block_type)) => Some(MaskCell {
                                block_type,
                                back_face: true,
                            }),
                            _ => None,
                        };
                        n += 1;
                    }
                }

                self.merge_slice(&mut mesh, d, slice + 1, du, dv, sides);
            }
        }

        debug!(
            "Greedy mesh built in {:?}: {} quads for a {:?} chunk",
            start.elapsed(),
            mesh.quad_count(),
            chunk.size()
        );
        mesh
    }

    /// Consumes the mask of one slice, emitting one face per maximal rectangle.
    fn merge_slice(
        &mut self,
        mesh: &mut Mesh,
        d: usize,
        plane: i32,
        du: i32,
        dv: i32,
        sides: &[BlockSide],
    ) {
        let u = (d + 1) % 3;
        let v = (d + 2) % 3;
        let row = du as usize;

        let mut n = 0;
        for j in 0..dv {
            let mut i = 0;
            while i < du {
                let Some(cell) = self.mask[n] else {
                    i += 1;
                    n += 1;
                    continue;
                };

                let mut width = 1;
                while i + width < du && self.mask[n + width as usize] == Some(cell) {
                    width += 1;
                }

                let mut height = 1;
                'grow: while j + height < dv {
                    let row_start = n + height as usize * row;
                    for k in 0..width as usize {
                        if self.mask[row_start + k] != Some(cell) {
                            break 'grow;
                        }
                    }
                    height += 1;
                }

                if sides.contains(&BlockSide::from_axis(d, !cell.back_face)) {
                    let mut origin = Point3::new(0, 0, 0);
                    origin[d] = plane;
                    origin[u] = i;
                    origin[v] = j;
                    mesh.add_face(&Face::new(
                        d,
                        origin,
                        width,
                        height,
                        cell.block_type,
                        cell.back_face,
                    ));
                }

                for h in 0..height as usize {
                    let row_start = n + h * row;
                    self.mask[row_start..row_start + width as usize].fill(None);
                }

                i += width;
                n += width as usize;
            }
        }
    }
}

/// Block type of the cell at `p` if it is inside the chunk and solid.
#[inline]
fn solid_type(chunk: &Chunk, p: [i32; 3]) -> Option<BlockType> {
    chunk
        .is_solid_at(p[0], p[1], p[2])
        .then(|| chunk.at(p[0] as usize, p[1] as usize, p[2] as usize).block_type)
}

/// Meshes `chunk` with a fresh mesher.
pub fn greedy(chunk: &Chunk) -> Mesh {
    GreedyMesher::new().build_mesh(chunk)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Quads as (normal, min corner, max corner), for order-independent comparison.
    fn quad_set(mesh: &Mesh) -> HashSet<([i32; 3], [i32; 3], [i32; 3])> {
        mesh.quads()
            .map(|quad| {
                let to_i = |p: [f32; 3]| p.map(|c| c as i32);
                let normal = to_i(quad[0].normal);
                let mut min = to_i(quad[0].position);
                let mut max = min;
                for vertex in quad {
                    let p = to_i(vertex.position);
                    for axis in 0..3 {
                        min[axis] = min[axis].min(p[axis]);
                        max[axis] = max[axis].max(p[axis]);
                    }
                }
                (normal, min, max)
            })
            .collect()
    }

    #[test]
    fn solid_chunk_yields_six_full_faces() {
        let chunk = Chunk::solid(4, 3, 5, BlockType::STONE);
        let mesh = greedy(&chunk);
        assert_eq!(mesh.quad_count(), 6);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);

        let quads = quad_set(&mesh);
        assert!(quads.contains(&([0, 1, 0], [0, 3, 0], [4, 3, 5])));
        assert!(quads.contains(&([0, -1, 0], [0, 0, 0], [4, 0, 5])));
        assert!(quads.contains(&([1, 0, 0], [4, 0, 0], [4, 3, 5])));
        assert!(quads.contains(&([-1, 0, 0], [0, 0, 0], [0, 3, 5])));
        assert!(quads.contains(&([0, 0, 1], [0, 0, 5], [4, 3, 5])));
        assert!(quads.contains(&([0, 0, -1], [0, 0, 0], [4, 3, 0])));
    }

    #[test]
    fn isolated_cell_yields_six_unit_faces() {
        let mut chunk = Chunk::new(3, 3, 3);
        chunk.at_mut(1, 1, 1).block_type = BlockType::DIRT;
        let mesh = greedy(&chunk);
        assert_eq!(mesh.quad_count(), 6);

        let quads = quad_set(&mesh);
        assert!(quads.contains(&([0, 1, 0], [1, 2, 1], [2, 2, 2])));
        assert!(quads.contains(&([0, -1, 0], [1, 1, 1], [2, 1, 2])));
        assert!(quads.contains(&([0, 0, -1], [1, 1, 1], [2, 2, 1])));
    }

    #[test]
    fn empty_chunk_yields_empty_mesh() {
        let mesh = greedy(&Chunk::new(8, 8, 8));
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
    }

    #[test]
    fn different_types_do_not_merge() {
        let mut chunk = Chunk::new(2, 1, 1);
        chunk.at_mut(0, 0, 0).block_type = BlockType::DIRT;
        chunk.at_mut(1, 0, 0).block_type = BlockType::STONE;
        // Two end caps on X, and one face per cell on each of the four other sides.
        assert_eq!(greedy(&chunk).quad_count(), 10);

        chunk.at_mut(1, 0, 0).block_type = BlockType::DIRT;
        assert_eq!(greedy(&chunk).quad_count(), 6);
    }

    #[test]
    fn meshing_is_deterministic_with_reused_mask() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut chunk = Chunk::new(6, 5, 4);
        for voxel in 0..chunk.volume() {
            if rng.bool() {
                let p = chunk.coords_of(voxel);
                chunk.at_mut(p.x, p.y, p.z).block_type = BlockType::random_solid_with(&mut rng);
            }
        }

        let mut mesher = GreedyMesher::new();
        let first = mesher.build_mesh(&chunk);
        let second = mesher.build_mesh(&chunk);
        assert_eq!(first, second);
        assert_eq!(quad_set(&first), quad_set(&greedy(&chunk)));
    }

    #[test]
    fn sided_mesh_skips_other_sides() {
        let chunk = Chunk::solid(2, 2, 2, BlockType::SAND);
        let mesh = GreedyMesher::new().build_mesh_sided(&chunk, &[BlockSide::TOP]);
        assert_eq!(mesh.quad_count(), 1);
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
        assert!(mesh.vertices.iter().all(|v| v.position[1] == 2.0));
    }

    #[test]
    fn hollow_interior_faces_point_inward() {
        let mut chunk = Chunk::solid(3, 3, 3, BlockType::STONE);
        chunk.at_mut(1, 1, 1).block_type = BlockType::AIR;
        let mesh = greedy(&chunk);
        // Outer shell plus the six faces around the cavity.
        assert_eq!(mesh.quad_count(), 12);
        assert!(quad_set(&mesh).contains(&([0, -1, 0], [1, 2, 1], [2, 2, 2])));
    }
}
