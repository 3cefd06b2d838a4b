//! # Chunk Storage Module
//!
//! Binary save/load for a single chunk. The layout is
//!
//! ```text
//! [u32 magic][i32 size_x][i32 size_y][i32 size_z][u8 block type] * (size_x * size_y * size_z)
//! ```
//!
//! in native byte order, cells in linear-index order. Light is not stored; loaded cells
//! start unlit.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::{debug, warn};

use crate::engine_state::voxels::block::block_type::BlockType;

use super::{chunk_creation::ChunkCreationIterator, Chunk, ChunkError};

/// First four bytes of every chunk file ("VCHK" read as a little-endian u32).
pub const CHUNK_FILE_MAGIC: u32 = u32::from_le_bytes(*b"VCHK");

/// Fixed-size prefix of a chunk file.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ChunkFileHeader {
    magic: u32,
    size_x: i32,
    size_y: i32,
    size_z: i32,
}

impl ChunkFileHeader {
    /// Checks magic and dimensions, returning the sizes as `usize`.
    fn validate(&self) -> Result<[usize; 3], ChunkError> {
        if self.magic != CHUNK_FILE_MAGIC {
            return Err(ChunkError::BadMagic { found: self.magic });
        }
        let invalid = ChunkError::InvalidDimensions {
            x: self.size_x,
            y: self.size_y,
            z: self.size_z,
        };
        if self.size_x <= 0 || self.size_y <= 0 || self.size_z <= 0 {
            return Err(invalid);
        }
        let size = [
            self.size_x as usize,
            self.size_y as usize,
            self.size_z as usize,
        ];
        // Reject sizes whose volume cannot be addressed.
        size[0]
            .checked_mul(size[1])
            .and_then(|plane| plane.checked_mul(size[2]))
            .ok_or(invalid)?;
        Ok(size)
    }
}

fn dimensions_to_i32(chunk: &Chunk) -> Result<[i32; 3], ChunkError> {
    let to_i32 = |size: usize| i32::try_from(size).unwrap_or(i32::MAX);
    let [x, y, z] = chunk.size();
    if [x, y, z].iter().any(|&size| i32::try_from(size).is_err()) {
        return Err(ChunkError::InvalidDimensions {
            x: to_i32(x),
            y: to_i32(y),
            z: to_i32(z),
        });
    }
    Ok([to_i32(x), to_i32(y), to_i32(z)])
}

impl Chunk {
    /// Writes this chunk to `path`, replacing any existing file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ChunkError> {
        let path = path.as_ref();
        let [size_x, size_y, size_z] = dimensions_to_i32(self)?;
        let header = ChunkFileHeader {
            magic: CHUNK_FILE_MAGIC,
            size_x,
            size_y,
            size_z,
        };
        let cells: Vec<u8> = self
            .voxels()
            .iter()
            .map(|voxel| voxel.block_type.as_u8())
            .collect();

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(bytemuck::bytes_of(&header))?;
        writer.write_all(&cells)?;
        writer.flush()?;

        debug!(
            "Saved {}x{}x{} chunk to {}",
            size_x,
            size_y,
            size_z,
            path.display()
        );
        Ok(())
    }

    /// Replaces this chunk's dimensions and cells with the contents of `path`.
    ///
    /// The whole file is decoded before anything is assigned, so on any error the chunk
    /// is left exactly as it was.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ChunkError> {
        let path = path.as_ref();
        match Self::read_from_file(path) {
            Ok(chunk) => {
                *self = chunk;
                Ok(())
            }
            Err(err) => {
                warn!("Rejected chunk file {}: {}", path.display(), err);
                Err(err)
            }
        }
    }

    /// Decodes a chunk file into a new chunk.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Chunk, ChunkError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_from(&mut reader)
    }

    /// Decodes a chunk from any byte source in the chunk file layout.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Chunk, ChunkError> {
        let mut header_bytes = [0u8; std::mem::size_of::<ChunkFileHeader>()];
        reader.read_exact(&mut header_bytes)?;
        let header: ChunkFileHeader = bytemuck::pod_read_unaligned(&header_bytes);
        let [size_x, size_y, size_z] = header.validate()?;

        // Read through `take` so a lying header cannot force a huge allocation up front.
        let volume = size_x * size_y * size_z;
        let mut cells = Vec::new();
        reader.by_ref().take(volume as u64).read_to_end(&mut cells)?;
        if cells.len() != volume {
            return Err(ChunkError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("expected {} cells, found {}", volume, cells.len()),
            )));
        }

        let mut cci = ChunkCreationIterator::new(size_x, size_y, size_z);
        for byte in cells {
            let block_type = BlockType::from_u8(byte).ok_or(ChunkError::UnknownBlockType(byte))?;
            cci.push_block_type(block_type);
        }
        Ok(cci.return_chunk())
    }
}
