//! Rendering-side data for the voxel engine.
//!
//! This module owns the geometry a renderer consumes: the vertex layout and the greedy
//! mesher that turns chunks into meshes. Issuing draw calls is left to the caller.

pub mod meshing;
mod vertex;

// Re-export commonly used types
pub use meshing::{Face, GreedyMesher, Mesh};
pub use vertex::Vertex;
