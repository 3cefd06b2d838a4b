//! Mesh generation and manipulation for voxel rendering.
//!
//! This module converts chunk data into triangle-list meshes. Greedy meshing reduces the
//! number of vertices and faces by combining coplanar faces with the same block type.
//!
//! # Architecture
//! - [`Mesh`]: The main structure representing a complete mesh with vertices and indices
//! - [`Face`]: A merged rectangle on the surface of the solid cells, with its side and type
//! - [`GreedyMesher`]: Sweeps the chunk slice by slice and emits merged faces
//!
//! # Usage
//! ```
//! use voxel_core::{BlockSide, BlockType, Chunk, Mesh};
//!
//! let mut chunk = Chunk::new(3, 3, 3);
//! chunk.at_mut(1, 1, 1).block_type = BlockType::GRASS;
//!
//! let mesh = Mesh::greedy(&chunk);
//! assert_eq!(mesh.quad_count(), 6);
//!
//! let top_only = Mesh::greedy_sided(&chunk, &[BlockSide::TOP]);
//! assert_eq!(top_only.quad_count(), 1);
//! ```

mod face;
mod greedy;
mod mesh;

pub use face::Face;
pub use greedy::{greedy, GreedyMesher};
pub use mesh::Mesh;
