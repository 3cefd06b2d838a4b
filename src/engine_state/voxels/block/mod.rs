//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel engine.
//! It includes block type definitions, block face handling, and the per-cell voxel record.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory and on disk.
pub type BlockTypeSize = u8;

/// Represents a single voxel cell in the world.
///
/// A voxel is owned by its chunk and mutated in place. `light` is a runtime-only value
/// written by lighting collaborators; it is never persisted.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute keeps the two bytes packed in a fixed order.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Voxel {
    /// The type of this voxel.
    pub block_type: BlockType,
    /// Auxiliary light value (0-255).
    pub light: u8,
}

impl Voxel {
    /// Creates a new unlit voxel of the specified type.
    pub const fn new(block_type: BlockType) -> Self {
        Voxel {
            block_type,
            light: 0,
        }
    }

    /// An empty cell.
    pub const fn air() -> Self {
        Self::new(BlockType::AIR)
    }

    /// Whether this voxel occludes faces and stops rays.
    #[inline]
    pub const fn is_solid(&self) -> bool {
        self.block_type.is_solid()
    }
}

impl From<BlockType> for Voxel {
    fn from(block_type: BlockType) -> Self {
        Voxel::new(block_type)
    }
}
