//! Vertex data structures for voxel rendering.
//!
//! This module defines the vertex format the mesher emits. The layout is plain old data so
//! buffers can be handed to any GPU backend as raw bytes.

use cgmath::{Point3, Vector3};

/// A vertex in the voxel mesh.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Normal: 3x f32 (12 bytes)
/// - Texture Coordinates: 2x f32 (8 bytes)
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in chunk-local space
    pub position: [f32; 3],
    /// Axis-aligned unit normal of the face this vertex belongs to
    pub normal: [f32; 3],
    /// UV texture coordinates (corner of the unit square)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Byte offsets of the position, normal and texture coordinate attributes.
    pub const ATTRIBUTE_OFFSETS: [usize; 3] = [0, 12, 24];

    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `pos` - Lattice position of the vertex in chunk space
    /// * `normal` - Face normal, ±1 on exactly one axis
    /// * `uv` - Texture coordinate
    pub fn new(pos: Point3<i32>, normal: Vector3<i32>, uv: [f32; 2]) -> Self {
        Vertex {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
            tex_coords: uv,
        }
    }

    /// Size of one vertex in a packed buffer.
    pub const fn stride() -> usize {
        std::mem::size_of::<Vertex>()
    }
}
