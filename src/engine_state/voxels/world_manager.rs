//! # World Manager Module
//!
//! The `WorldManager` sits on top of a [`World`] and speaks world-space coordinates. It
//! resolves world cells to (chunk, local cell) pairs and keeps a square window of chunks
//! loaded around the tracked player position.
//!
//! ## Streaming Window
//!
//! The window is every chunk whose Chebyshev distance from the player's chunk is at most
//! `view_distance`, i.e. a `(2 * view_distance + 1)²` square. Moving inside a chunk does
//! nothing; crossing into another chunk loads whatever part of the new window is missing.
//! Chunks that leave the window stay loaded unless unloading is enabled or the caller asks
//! for [`unload_outside_window`](WorldManager::unload_outside_window).

use cgmath::Point3;
use log::info;

use crate::config::EngineConfig;

use super::{
    block::Voxel,
    chunk::Chunk,
    coords::{floor_div, positive_mod, ChunkCoord},
    world::World,
};

/// Streams chunks around the player and provides world-space voxel access.
#[derive(Debug)]
pub struct WorldManager {
    world: World,
    chunk_size_x: i32,
    chunk_size_y: i32,
    chunk_size_z: i32,
    /// Chebyshev radius of the loaded window, in chunks
    view_distance: i32,
    /// Drop chunks that fall out of the window after every window move
    unload_outside_view: bool,
    /// Chunk the player was last seen in, `None` before the first update
    player_chunk: Option<ChunkCoord>,
}

impl WorldManager {
    /// Wraps `world` with the given window radius. Negative radii are treated as 0.
    pub fn new(world: World, view_distance: i32) -> Self {
        let dimensions = *world.dimensions();
        // `World::new` only accepts dimensions that fit in an i32.
        let to_i32 = |size: usize| i32::try_from(size).unwrap_or(i32::MAX);
        WorldManager {
            chunk_size_x: to_i32(dimensions.size_x),
            chunk_size_y: to_i32(dimensions.size_y),
            chunk_size_z: to_i32(dimensions.size_z),
            world,
            view_distance: view_distance.max(0),
            unload_outside_view: false,
            player_chunk: None,
        }
    }

    /// Builds an empty world and its manager from the engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut manager = Self::new(World::new(config.chunk), config.view_distance);
        manager.set_unload_outside_view(config.unload_outside_view);
        manager
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn view_distance(&self) -> i32 {
        self.view_distance
    }

    /// Changes the window radius. Takes effect on the next chunk change.
    pub fn set_view_distance(&mut self, chunks_radius: i32) {
        self.view_distance = chunks_radius.max(0);
    }

    /// Enables or disables unloading chunks that leave the window.
    pub fn set_unload_outside_view(&mut self, enabled: bool) {
        self.unload_outside_view = enabled;
    }

    /// The chunk the player was last recorded in.
    pub fn player_chunk(&self) -> Option<ChunkCoord> {
        self.player_chunk
    }

    /// Chunk containing the world cell column `(x, z)`.
    pub fn world_to_chunk(&self, x: i32, z: i32) -> ChunkCoord {
        ChunkCoord::new(
            floor_div(x, self.chunk_size_x),
            floor_div(z, self.chunk_size_z),
        )
    }

    /// Splits a world cell into its chunk and local coordinate.
    ///
    /// # Returns
    /// `None` if `y` is outside `0..chunk_size_y`. The chunk may or may not be loaded.
    pub fn world_to_local(&self, x: i32, y: i32, z: i32) -> Option<(ChunkCoord, Point3<usize>)> {
        if y < 0 || y >= self.chunk_size_y {
            return None;
        }
        let local = Point3::new(
            positive_mod(x, self.chunk_size_x) as usize,
            y as usize,
            positive_mod(z, self.chunk_size_z) as usize,
        );
        Some((self.world_to_chunk(x, z), local))
    }

    /// Records the player's position and loads the window around it if the player changed
    /// chunk.
    ///
    /// The chunk is found by floor division of the integer part of `x` and `z`, so
    /// `x = -0.5` still lies in chunk 0 while `x = -1.0` lies in chunk -1.
    ///
    /// # Returns
    /// `true` if the player entered a different chunk (or this is the first update).
    pub fn update_player_position(&mut self, x: f32, _y: f32, z: f32) -> bool {
        let chunk = self.world_to_chunk(x.trunc() as i32, z.trunc() as i32);
        if self.player_chunk == Some(chunk) {
            return false;
        }

        info!("Player entered chunk ({}, {})", chunk.x, chunk.z);
        self.player_chunk = Some(chunk);
        self.ensure_chunks_around(chunk);
        if self.unload_outside_view {
            self.unload_outside_window();
        }
        true
    }

    /// Creates every missing chunk within `view_distance` (Chebyshev) of `center`.
    pub fn ensure_chunks_around(&mut self, center: ChunkCoord) {
        let radius = self.view_distance;
        let before = self.world.len();
        for dz in -radius..=radius {
            for dx in -radius..=radius {
                self.world.get_or_create_chunk(center.offset(dx, dz));
            }
        }
        let created = self.world.len() - before;
        if created > 0 {
            info!(
                "Loaded {} chunks around ({}, {}), {} resident",
                created,
                center.x,
                center.z,
                self.world.len()
            );
        }
    }

    /// Unloads every chunk outside the window around the recorded player chunk.
    ///
    /// # Returns
    /// The coordinates that were unloaded. Empty before the first position update.
    pub fn unload_outside_window(&mut self) -> Vec<ChunkCoord> {
        let Some(center) = self.player_chunk else {
            return Vec::new();
        };
        let radius = self.view_distance;
        let outside: Vec<ChunkCoord> = self
            .world
            .chunk_coords()
            .filter(|coord| coord.chebyshev_distance(center) > radius)
            .collect();
        for coord in outside.iter() {
            self.world.unload_chunk(*coord);
        }
        if !outside.is_empty() {
            info!("Unloaded {} chunks outside the view window", outside.len());
        }
        outside
    }

    /// The loaded chunk containing world column `(x, z)`, if any.
    pub fn chunk_at_world(&self, x: i32, z: i32) -> Option<&Chunk> {
        self.world.get_chunk_at(self.world_to_chunk(x, z))
    }

    /// Reads the voxel at a world cell.
    ///
    /// # Returns
    /// `None` if the containing chunk is not loaded, `y` is out of range, or the chunk no
    /// longer has the world's dimensions (after a load replaced them). Never loads chunks.
    pub fn try_get_voxel(&self, x: i32, y: i32, z: i32) -> Option<&Voxel> {
        let (chunk, local) = self.world_to_local(x, y, z)?;
        self.world
            .get_chunk_at(chunk)?
            .get(local.x, local.y, local.z)
            .ok()
    }

    /// Mutable counterpart of [`try_get_voxel`](WorldManager::try_get_voxel).
    pub fn try_get_voxel_mut(&mut self, x: i32, y: i32, z: i32) -> Option<&mut Voxel> {
        let (chunk, local) = self.world_to_local(x, y, z)?;
        self.world
            .get_chunk_at_mut(chunk)?
            .get_mut(local.x, local.y, local.z)
            .ok()
    }

    /// Writes the voxel at a world cell.
    ///
    /// # Returns
    /// `false` under the same conditions [`try_get_voxel`](WorldManager::try_get_voxel)
    /// returns `None`.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> bool {
        match self.try_get_voxel_mut(x, y, z) {
            Some(slot) => {
                *slot = voxel;
                true
            }
            None => false,
        }
    }
}
