//! # Chunk Creation Module
//!
//! This module provides a builder that populates a chunk one cell at a time in linear-index
//! order (X fastest, then Z, then Y). It is what the chunk loader feeds decoded cells into,
//! and it is handy for building chunks from any other ordered source.

use super::{
    super::block::{block_type::BlockType, Voxel},
    Chunk,
};

/// A builder for creating chunks by pushing cells in storage order.
///
/// The builder tracks the local position of the next cell so callers can make per-position
/// decisions while pushing.
pub struct ChunkCreationIterator {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    /// Cells pushed so far, in linear-index order.
    voxels: Vec<Voxel>,
    local_x: usize,
    local_y: usize,
    local_z: usize,
}

impl ChunkCreationIterator {
    /// Creates a builder for a chunk of the given dimensions.
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        ChunkCreationIterator {
            size_x,
            size_y,
            size_z,
            voxels: Vec::with_capacity(size_x * size_y * size_z),
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    /// Local coordinate the next pushed cell will occupy, or `None` once the chunk is full.
    pub fn next_position(&self) -> Option<(usize, usize, usize)> {
        if self.is_complete() {
            None
        } else {
            Some((self.local_x, self.local_y, self.local_z))
        }
    }

    /// Whether every cell has been pushed.
    pub fn is_complete(&self) -> bool {
        self.voxels.len() == self.size_x * self.size_y * self.size_z
    }

    /// Adds an unlit cell of `block_type` at the current position and advances.
    pub fn push_block_type(&mut self, block_type: BlockType) {
        self.push_voxel(Voxel::new(block_type));
    }

    /// Adds a cell at the current position and advances.
    pub fn push_voxel(&mut self, voxel: Voxel) {
        debug_assert!(!self.is_complete(), "pushed past the end of the chunk");
        self.voxels.push(voxel);

        self.local_x += 1;
        if self.local_x == self.size_x {
            self.local_x = 0;
            self.local_z += 1;
            if self.local_z == self.size_z {
                self.local_z = 0;
                self.local_y += 1;
            }
        }
    }

    /// Finalizes the chunk. Cells that were never pushed are air.
    pub fn return_chunk(mut self) -> Chunk {
        self.voxels
            .resize(self.size_x * self.size_y * self.size_z, Voxel::air());
        Chunk::from_raw(self.size_x, self.size_y, self.size_z, self.voxels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_follow_linear_index_order() {
        let mut cci = ChunkCreationIterator::new(2, 2, 3);
        let mut expected = Vec::new();
        while let Some((x, y, z)) = cci.next_position() {
            expected.push((x, y, z));
            let block_type = if (x + y + z) % 2 == 0 {
                BlockType::STONE
            } else {
                BlockType::AIR
            };
            cci.push_block_type(block_type);
        }
        let chunk = cci.return_chunk();

        assert_eq!(expected.len(), 12);
        for (index, (x, y, z)) in expected.into_iter().enumerate() {
            assert_eq!(chunk.index(x, y, z), index);
            assert_eq!(chunk.at(x, y, z).is_solid(), (x + y + z) % 2 == 0);
        }
    }

    #[test]
    fn unfinished_builder_pads_with_air() {
        let mut cci = ChunkCreationIterator::new(2, 2, 2);
        cci.push_block_type(BlockType::DIRT);
        let chunk = cci.return_chunk();
        assert_eq!(chunk.volume(), 8);
        assert_eq!(chunk.solid_count(), 1);
        assert_eq!(chunk.at(0, 0, 0).block_type, BlockType::DIRT);
    }
}
