//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a dense, fixed-size 3D array of voxels that is
//! the unit of loading, meshing and streaming.
//!
//! ## Memory Layout
//!
//! Every chunk owns a single contiguous buffer of `size_x * size_y * size_z` voxels. The
//! linear index of a cell is
//!
//! ```text
//! index = (y * size_z + z) * size_x + x
//! ```
//!
//! X varies fastest, then Z, then Y. The chunk file format, the mesher and the raycaster all
//! rely on this order, so it never changes.
//!
//! ### Performance Characteristics
//! - **Cell Lookup**: O(1)
//! - **Solid Iteration**: O(volume), see [`chunk_iteration`]
//! - **Memory Usage**: `size_of::<Voxel>()` bytes per cell

use cgmath::Point3;

use crate::config::ChunkDimensions;

use super::block::{block_type::BlockType, Voxel};

pub use chunk_error::ChunkError;

pub mod chunk_creation;
mod chunk_error;
pub mod chunk_iteration;
pub mod chunk_storage;

/// A fixed-size block of voxels spanning the full world height.
///
/// The dimensions are fixed at construction; only a successful
/// [`load_from_file`](Chunk::load_from_file) replaces them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    /// Cells in linear-index order.
    voxels: Vec<Voxel>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all cells are air, light 0).
    ///
    /// # Panics
    /// Panics if any dimension is zero.
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        assert!(
            size_x > 0 && size_y > 0 && size_z > 0,
            "chunk dimensions must be positive, got {}x{}x{}",
            size_x,
            size_y,
            size_z
        );
        Chunk {
            size_x,
            size_y,
            size_z,
            voxels: vec![Voxel::default(); size_x * size_y * size_z],
        }
    }

    /// Creates an empty chunk sized from the configured dimensions.
    pub fn with_dimensions(dimensions: &ChunkDimensions) -> Self {
        Self::new(dimensions.size_x, dimensions.size_y, dimensions.size_z)
    }

    /// Creates a chunk in which every cell has the given type.
    pub fn solid(size_x: usize, size_y: usize, size_z: usize, block_type: BlockType) -> Self {
        let mut chunk = Self::new(size_x, size_y, size_z);
        chunk.fill(block_type);
        chunk
    }

    /// Assembles a chunk from a buffer already in linear-index order.
    pub(crate) fn from_raw(size_x: usize, size_y: usize, size_z: usize, voxels: Vec<Voxel>) -> Self {
        debug_assert_eq!(voxels.len(), size_x * size_y * size_z);
        Chunk {
            size_x,
            size_y,
            size_z,
            voxels,
        }
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    pub fn size_z(&self) -> usize {
        self.size_z
    }

    /// The chunk dimensions as `[x, y, z]`.
    pub fn size(&self) -> [usize; 3] {
        [self.size_x, self.size_y, self.size_z]
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.voxels.len()
    }

    /// Linear index of a local coordinate. Callers guarantee bounds.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.size_z + z) * self.size_x + x
    }

    /// Inverse of [`index`](Chunk::index).
    #[inline]
    pub fn coords_of(&self, index: usize) -> Point3<usize> {
        let x = index % self.size_x;
        let z = (index / self.size_x) % self.size_z;
        let y = index / (self.size_x * self.size_z);
        Point3::new(x, y, z)
    }

    /// Whether `(x, y, z)` lies inside the chunk.
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size_x && y < self.size_y && z < self.size_z
    }

    /// Signed variant of [`in_bounds`](Chunk::in_bounds) for neighbour and ray queries.
    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.size_x
            && (y as usize) < self.size_y
            && (z as usize) < self.size_z
    }

    /// Gets a reference to the voxel at the specified local coordinates.
    ///
    /// # Panics
    /// The caller guarantees bounds. Debug builds assert them; release builds only catch
    /// coordinates that overflow the whole buffer.
    #[inline]
    pub fn at(&self, x: usize, y: usize, z: usize) -> &Voxel {
        debug_assert!(
            self.in_bounds(x, y, z),
            "({}, {}, {}) outside chunk {:?}",
            x,
            y,
            z,
            self.size()
        );
        &self.voxels[self.index(x, y, z)]
    }

    /// Mutable counterpart of [`at`](Chunk::at).
    #[inline]
    pub fn at_mut(&mut self, x: usize, y: usize, z: usize) -> &mut Voxel {
        debug_assert!(
            self.in_bounds(x, y, z),
            "({}, {}, {}) outside chunk {:?}",
            x,
            y,
            z,
            self.size()
        );
        let index = self.index(x, y, z);
        &mut self.voxels[index]
    }

    /// Bounds-checked lookup.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<&Voxel, ChunkError> {
        if !self.in_bounds(x, y, z) {
            return Err(ChunkError::OutOfBounds { x, y, z });
        }
        Ok(&self.voxels[self.index(x, y, z)])
    }

    /// Bounds-checked mutable lookup.
    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> Result<&mut Voxel, ChunkError> {
        if !self.in_bounds(x, y, z) {
            return Err(ChunkError::OutOfBounds { x, y, z });
        }
        let index = self.index(x, y, z);
        Ok(&mut self.voxels[index])
    }

    /// Whether the cell at signed coordinates is solid. Anything outside the chunk is air.
    #[inline]
    pub fn is_solid_at(&self, x: i32, y: i32, z: i32) -> bool {
        self.contains(x, y, z) && self.at(x as usize, y as usize, z as usize).is_solid()
    }

    /// Sets every cell to `block_type`, keeping light values.
    pub fn fill(&mut self, block_type: BlockType) {
        for voxel in self.voxels.iter_mut() {
            voxel.block_type = block_type;
        }
    }

    /// Sets every cell in the inclusive box `min..=max` to `block_type`.
    /// The box is clipped to the chunk.
    pub fn fill_region(&mut self, min: Point3<usize>, max: Point3<usize>, block_type: BlockType) {
        let max_x = max.x.min(self.size_x - 1);
        let max_y = max.y.min(self.size_y - 1);
        let max_z = max.z.min(self.size_z - 1);
        for y in min.y..=max_y {
            for z in min.z..=max_z {
                for x in min.x..=max_x {
                    self.at_mut(x, y, z).block_type = block_type;
                }
            }
        }
    }

    /// Number of non-air cells.
    pub fn solid_count(&self) -> usize {
        self.solid_blocks().count()
    }

    /// All cells in linear-index order.
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }
}
