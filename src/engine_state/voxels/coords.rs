//! # Coordinate Module
//!
//! Conversions between world-space cell coordinates, chunk coordinates and chunk-local
//! coordinates. Chunks tile the XZ plane only; Y is never partitioned.
//!
//! All conversions round toward negative infinity, so world X = -1 lives in chunk -1 at
//! local X = size - 1, never in chunk 0.

/// Chunk indices on the XZ plane, used as the world map key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        ChunkCoord { x, z }
    }

    /// Chebyshev distance in chunks, the metric of the loaded window.
    pub fn chebyshev_distance(&self, other: ChunkCoord) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Offset by `(dx, dz)` chunks.
    pub fn offset(&self, dx: i32, dz: i32) -> ChunkCoord {
        ChunkCoord::new(self.x + dx, self.z + dz)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from((x, z): (i32, i32)) -> Self {
        ChunkCoord::new(x, z)
    }
}

/// Integer division rounding toward negative infinity.
///
/// The truncating quotient is moved down by one whenever the remainder is non-zero and its
/// sign differs from the divisor's.
#[inline]
pub fn floor_div(a: i32, b: i32) -> i32 {
    let q = a / b;
    let r = a % b;
    if r != 0 && ((r < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Mathematical remainder, always in `0..|b|` regardless of operand signs.
#[inline]
pub fn positive_mod(a: i32, b: i32) -> i32 {
    let m = a % b;
    if m < 0 {
        m + b.abs()
    } else {
        m
    }
}
