//! Mesh generation for voxel rendering.
//!
//! Meshes are plain vertex and index arrays. How they reach the GPU is up to the consumer;
//! [`Mesh::vertex_bytes`] and [`Mesh::index_bytes`] expose them ready for upload.
//!
//! # Performance Considerations
//! - Greedy meshing minimizes vertex count
//! - A [`GreedyMesher`] keeps its slice mask, so remeshing the same chunk repeatedly does
//!   not reallocate it

/// Core mesh generation algorithms and data structures.
mod mesh;

pub use mesh::*;
