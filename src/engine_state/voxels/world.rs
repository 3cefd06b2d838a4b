//! # World Module
//!
//! This module provides the `World` struct which manages a collection of chunks in the voxel world.
//! It serves as the owner of every loaded chunk and the single place chunks are created and destroyed.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been referenced are
//! kept in memory. Chunks span the full world height, so they are keyed by their XZ
//! coordinate alone.
//!
//! ## Ownership
//!
//! - Each chunk is owned exclusively by its map entry
//! - Unloading a chunk removes the entry and drops the chunk
//! - Chunk lookup is O(1) using a hash map

use std::collections::HashMap;

use log::debug;

use crate::config::ChunkDimensions;

use super::{chunk::Chunk, coords::ChunkCoord};

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use voxel_core::{ChunkCoord, ChunkDimensions, World};
///
/// let mut world = World::new(ChunkDimensions::new(16, 64, 16));
///
/// // Creating is idempotent
/// world.get_or_create_chunk(ChunkCoord::new(0, 0));
/// world.get_or_create_chunk(ChunkCoord::new(0, 0));
/// assert_eq!(world.len(), 1);
///
/// assert!(world.unload_chunk(ChunkCoord::new(0, 0)));
/// assert!(!world.has_chunk(ChunkCoord::new(0, 0)));
/// ```
#[derive(Debug)]
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Dimensions every new chunk is created with.
    dimensions: ChunkDimensions,
}

impl World {
    /// Creates a new, empty world whose chunks will have the given dimensions.
    ///
    /// # Panics
    /// Panics if any dimension is zero or does not fit in an `i32`, the width of world
    /// coordinates and of the chunk file header.
    pub fn new(dimensions: ChunkDimensions) -> Self {
        let max = i32::MAX as usize;
        assert!(
            [dimensions.size_x, dimensions.size_y, dimensions.size_z]
                .iter()
                .all(|&size| size > 0 && size <= max),
            "chunk dimensions must be in 1..=i32::MAX: {:?}",
            dimensions
        );
        World {
            chunks: HashMap::new(),
            dimensions,
        }
    }

    /// The dimensions every chunk in this world has.
    pub fn dimensions(&self) -> &ChunkDimensions {
        &self.dimensions
    }

    /// Returns the chunk at `position`, creating an empty one first if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `position` - The chunk coordinates to look up or create
    pub fn get_or_create_chunk(&mut self, position: ChunkCoord) -> &mut Chunk {
        let dimensions = self.dimensions;
        self.chunks.entry(position).or_insert_with(|| {
            debug!("Creating chunk at ({}, {})", position.x, position.z);
            Chunk::with_dimensions(&dimensions)
        })
    }

    /// Whether a chunk is loaded at `position`. Never creates one.
    pub fn has_chunk(&self, position: ChunkCoord) -> bool {
        self.chunks.contains_key(&position)
    }

    /// Removes and drops the chunk at `position`.
    ///
    /// # Returns
    ///
    /// `true` if a chunk was loaded there.
    pub fn unload_chunk(&mut self, position: ChunkCoord) -> bool {
        let removed = self.chunks.remove(&position).is_some();
        if removed {
            debug!("Unloaded chunk at ({}, {})", position.x, position.z);
        }
        removed
    }

    /// Retrieves the chunk at `position` without creating it.
    pub fn get_chunk_at(&self, position: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// Mutable counterpart of [`get_chunk_at`](World::get_chunk_at).
    pub fn get_chunk_at_mut(&mut self, position: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&position)
    }

    /// Coordinates of every loaded chunk, in no particular order.
    pub fn chunk_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    /// Number of loaded chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::engine_state::voxels::block::block_type::BlockType;

    use super::*;

    fn world() -> World {
        World::new(ChunkDimensions::new(4, 8, 4))
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut world = world();
        world.get_or_create_chunk(ChunkCoord::new(1, -1)).at_mut(0, 0, 0).block_type =
            BlockType::STONE;

        let again = world.get_or_create_chunk(ChunkCoord::new(1, -1));
        assert_eq!(again.at(0, 0, 0).block_type, BlockType::STONE);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn new_chunks_use_world_dimensions() {
        let mut world = world();
        let chunk = world.get_or_create_chunk(ChunkCoord::new(0, 0));
        assert_eq!(chunk.size(), [4, 8, 4]);
    }

    #[test]
    #[should_panic(expected = "chunk dimensions")]
    fn rejects_dimensions_wider_than_i32() {
        World::new(ChunkDimensions::new(16, i32::MAX as usize + 1, 16));
    }

    #[test]
    fn has_chunk_has_no_side_effects() {
        let world = world();
        assert!(!world.has_chunk(ChunkCoord::new(0, 0)));
        assert!(world.is_empty());
    }

    #[test]
    fn unload_destroys_chunk() {
        let mut world = world();
        world.get_or_create_chunk(ChunkCoord::new(2, 3)).fill(BlockType::DIRT);
        assert!(world.unload_chunk(ChunkCoord::new(2, 3)));
        assert!(!world.unload_chunk(ChunkCoord::new(2, 3)));

        // A recreated chunk starts empty again.
        let recreated = world.get_or_create_chunk(ChunkCoord::new(2, 3));
        assert_eq!(recreated.solid_count(), 0);
    }
}
