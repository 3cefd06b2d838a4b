//! Errors reported by chunk access and chunk persistence.

use thiserror::Error;

/// Everything that can go wrong while addressing, saving or loading a chunk.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// The file could not be opened, read or written.
    #[error("chunk file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the chunk magic.
    #[error("bad chunk magic {found:#010x}")]
    BadMagic { found: u32 },

    /// The header names a non-positive or unaddressable size.
    #[error("invalid chunk dimensions {x}x{y}x{z}")]
    InvalidDimensions { x: i32, y: i32, z: i32 },

    /// A cell byte does not name a known block type.
    #[error("unknown block type ordinal {0}")]
    UnknownBlockType(u8),

    /// Local coordinates outside the chunk.
    #[error("local coordinate ({x}, {y}, {z}) is outside the chunk")]
    OutOfBounds { x: usize, y: usize, z: usize },
}
