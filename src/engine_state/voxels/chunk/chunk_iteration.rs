//! # Chunk Iteration Module
//!
//! This module provides an iterator over all non-air cells in a chunk, yielding each cell
//! together with its local position. The iterator walks the dense buffer in storage order and
//! recovers positions incrementally instead of dividing per cell.

use cgmath::Point3;

use crate::engine_state::voxels::block::Voxel;

use super::Chunk;

/// An iterator over all non-air cells in a chunk, in linear-index order.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next linear index to inspect
    current_offset: usize,
    local_x: usize,
    local_y: usize,
    local_z: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned at the first cell.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            current_offset: 0,
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    fn advance(&mut self) {
        self.current_offset += 1;
        self.local_x += 1;
        if self.local_x == self.chunk_ref.size_x() {
            self.local_x = 0;
            self.local_z += 1;
            if self.local_z == self.chunk_ref.size_z() {
                self.local_z = 0;
                self.local_y += 1;
            }
        }
    }
}

impl<'a> Iterator for ChunkBlockIterator<'a> {
    type Item = (Point3<usize>, &'a Voxel);

    fn next(&mut self) -> Option<Self::Item> {
        let chunk_ref: &'a Chunk = self.chunk_ref;
        let voxels = chunk_ref.voxels();
        while self.current_offset < voxels.len() {
            let voxel = &voxels[self.current_offset];
            let position = Point3::new(self.local_x, self.local_y, self.local_z);
            self.advance();
            if voxel.is_solid() {
                return Some((position, voxel));
            }
        }
        None
    }
}

impl Chunk {
    /// Iterates the solid cells of this chunk with their local positions.
    pub fn solid_blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }
}
