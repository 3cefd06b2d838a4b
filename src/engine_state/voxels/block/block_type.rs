//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification, conversion, and random selection.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminant of each variant is its on-disk ordinal. `AIR` must stay at zero so that
/// a zeroed or default-constructed voxel is empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum BlockType {
    /// An air block, which is non-solid and transparent.
    #[default]
    AIR = 0,

    /// A basic dirt block, the default building material.
    DIRT = 1,

    /// A grass block.
    GRASS = 2,

    /// A stone block.
    STONE = 3,

    /// A sand block.
    SAND = 4,
}

/// Number of solid variants, used when picking a random solid type.
const SOLID_TYPE_COUNT: BlockTypeSize = 4;

impl BlockType {
    /// Converts a stored ordinal back into a `BlockType`.
    ///
    /// # Returns
    /// `None` if the value does not name a known block type.
    pub fn from_u8(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// The ordinal written to chunk files.
    #[inline]
    pub const fn as_u8(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether this block occludes its neighbours and stops rays.
    #[inline]
    pub const fn is_solid(self) -> bool {
        !matches!(self, BlockType::AIR)
    }

    /// Picks a random block type (excluding AIR).
    pub fn random_solid() -> Self {
        Self::random_solid_with(&mut fastrand::Rng::new())
    }

    /// Picks a random solid block type from the given generator, for reproducible fills.
    pub fn random_solid_with(rng: &mut fastrand::Rng) -> Self {
        // Ordinals 1..=SOLID_TYPE_COUNT are always valid.
        Self::from_u8(rng.u8(1..=SOLID_TYPE_COUNT)).unwrap_or(BlockType::DIRT)
    }
}
