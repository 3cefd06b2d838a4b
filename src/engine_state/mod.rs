//! # Engine State Module
//!
//! The core engine module that ties the voxel subsystems into an editing session.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `camera_state` - Camera position and orientation, and the view ray used for edits
//! * `rendering` - Vertex layout and greedy meshing
//! * `voxels` - Handles voxel data, chunks, world streaming and raycasting
//!
//! ## Architecture
//!
//! The `EngineState` struct serves as the central coordinator. It owns the world manager,
//! the camera and the mesh of the active chunk. Every edit follows the same order: the
//! chunk is mutated first, then the active chunk is remeshed, so the mesh it hands out is
//! always either the old complete mesh or the new complete one.

use cgmath::{EuclideanSpace, Point3, Vector3};
use log::{info, warn};
use std::{io, path::Path};

use crate::config::EngineConfig;

use camera_state::Camera;
use rendering::{GreedyMesher, Mesh};
use voxels::{
    block::{block_type::BlockType, Voxel},
    chunk::{Chunk, ChunkError},
    coords::ChunkCoord,
    raycast::{Ray, RayHit, VoxelRaycaster},
    world_manager::WorldManager,
};

pub mod camera_state;
pub mod rendering;
pub mod voxels;

/// Distance along the view vector at which a block is placed when the view ray hits nothing.
pub const PLACE_DISTANCE_WITHOUT_HIT: f32 = 4.0;

/// The main state container for the voxel engine
///
/// Edits target the active chunk, which follows the chunk the camera is in. The camera
/// lives in world space; rays are shifted into the active chunk's local space before they
/// are cast.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_core::{BlockType, EngineConfig, EngineState};
///
/// let mut engine_state = EngineState::new(&EngineConfig::default());
/// engine_state.camera.position = Point3::new(8.5, 8.5, 15.5);
/// engine_state.camera.look_at(Point3::new(8.5, 8.5, 0.5));
///
/// // Nothing to hit yet, so the block lands a fixed distance ahead.
/// let placed = engine_state.place_block(BlockType::STONE).unwrap();
/// assert_eq!(placed, Point3::new(8, 8, 11));
/// assert_eq!(engine_state.mesh().quad_count(), 6);
///
/// assert_eq!(engine_state.break_block(), Some(placed));
/// assert!(engine_state.mesh().is_empty());
/// ```
pub struct EngineState {
    /// Streams chunks around the camera and resolves world coordinates
    world_manager: WorldManager,
    /// Camera whose view ray selects edit targets
    pub camera: Camera,
    /// Chunk that edits apply to and that `mesh` was built from
    active_chunk: ChunkCoord,
    /// Reused between remeshes
    mesher: GreedyMesher,
    /// Mesh of the active chunk
    mesh: Mesh,
    /// Maximum raycast distance
    reach: f32,
}

impl EngineState {
    /// Creates a new engine state with an empty world, loading the window around the origin.
    pub fn new(config: &EngineConfig) -> Self {
        let mut world_manager = WorldManager::from_config(config);
        world_manager.update_player_position(0.0, 0.0, 0.0);

        let mut engine_state = Self {
            world_manager,
            camera: Camera::default(),
            active_chunk: ChunkCoord::new(0, 0),
            mesher: GreedyMesher::new(),
            mesh: Mesh::new(),
            reach: config.reach,
        };
        engine_state.set_active_chunk(ChunkCoord::new(0, 0));
        engine_state
    }

    pub fn world_manager(&self) -> &WorldManager {
        &self.world_manager
    }

    /// Mutable access to the world. Call [`remesh`](EngineState::remesh) after changing
    /// the active chunk through it.
    pub fn world_manager_mut(&mut self) -> &mut WorldManager {
        &mut self.world_manager
    }

    /// The current mesh of the active chunk.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn active_chunk(&self) -> ChunkCoord {
        self.active_chunk
    }

    /// The voxels of the active chunk.
    pub fn active_chunk_data(&self) -> Option<&Chunk> {
        self.world_manager.world().get_chunk_at(self.active_chunk)
    }

    pub fn reach(&self) -> f32 {
        self.reach
    }

    /// Makes `coord` the edit target, creating the chunk if needed, and remeshes it.
    pub fn set_active_chunk(&mut self, coord: ChunkCoord) {
        self.world_manager.world_mut().get_or_create_chunk(coord);
        self.active_chunk = coord;
        self.remesh();
    }

    /// Feeds the camera position to the streaming window.
    ///
    /// # Returns
    /// `true` if the camera entered another chunk, which then becomes the active chunk.
    pub fn update(&mut self) -> bool {
        let position = self.camera.position;
        if !self
            .world_manager
            .update_player_position(position.x, position.y, position.z)
        {
            return false;
        }
        if let Some(chunk) = self.world_manager.player_chunk() {
            self.set_active_chunk(chunk);
        }
        true
    }

    /// Rebuilds the mesh of the active chunk.
    pub fn remesh(&mut self) {
        self.mesh = match self.world_manager.world().get_chunk_at(self.active_chunk) {
            Some(chunk) => self.mesher.build_mesh(chunk),
            None => Mesh::new(),
        };
    }

    /// World-space position of the active chunk's local origin.
    fn chunk_origin(&self) -> Vector3<f32> {
        let dimensions = self.world_manager.world().dimensions();
        Vector3::new(
            (self.active_chunk.x as i64 * dimensions.size_x as i64) as f32,
            0.0,
            (self.active_chunk.z as i64 * dimensions.size_z as i64) as f32,
        )
    }

    /// The camera's view ray in the active chunk's local space.
    pub fn local_view_ray(&self) -> Ray {
        let mut ray = self.camera.ray(self.reach);
        ray.origin = ray.origin - self.chunk_origin();
        ray
    }

    /// The solid cell under the crosshair, in active-chunk coordinates.
    pub fn target(&self) -> Option<RayHit> {
        let chunk = self.active_chunk_data()?;
        VoxelRaycaster::cast(chunk, &self.local_view_ray())
    }

    /// Where [`place_block`](EngineState::place_block) would put a block, whether or not
    /// that cell lies inside the active chunk.
    fn placement_candidate(&self) -> Point3<i32> {
        match self.target() {
            Some(hit) => hit.adjacent(),
            None => {
                let ray = self.local_view_ray();
                let point = ray.origin + ray.direction * PLACE_DISTANCE_WITHOUT_HIT;
                Point3::new(
                    point.x.floor() as i32,
                    point.y.floor() as i32,
                    point.z.floor() as i32,
                )
            }
        }
    }

    /// The cell [`place_block`](EngineState::place_block) would fill, if it is inside the
    /// active chunk.
    pub fn placement_preview(&self) -> Option<Point3<i32>> {
        let chunk = self.active_chunk_data()?;
        let cell = self.placement_candidate();
        chunk.contains(cell.x, cell.y, cell.z).then_some(cell)
    }

    /// Clears the targeted cell and remeshes.
    ///
    /// # Returns
    /// The cell that was cleared, or `None` if nothing was targeted.
    pub fn break_block(&mut self) -> Option<Point3<i32>> {
        let hit = self.target()?;
        self.write_active(hit.position, Voxel::air())?;
        info!(
            "Break block at ({}, {}, {}) in chunk ({}, {})",
            hit.position.x, hit.position.y, hit.position.z, self.active_chunk.x, self.active_chunk.z
        );
        self.remesh();
        Some(hit.position)
    }

    /// Places `block_type` against the targeted face, or a fixed distance ahead when
    /// nothing is targeted, and remeshes.
    ///
    /// # Returns
    /// The filled cell, or `None` if it would fall outside the active chunk.
    pub fn place_block(&mut self, block_type: BlockType) -> Option<Point3<i32>> {
        let cell = self.placement_candidate();
        if self.write_active(cell, Voxel::new(block_type)).is_none() {
            warn!(
                "Placement at ({}, {}, {}) is outside chunk ({}, {})",
                cell.x, cell.y, cell.z, self.active_chunk.x, self.active_chunk.z
            );
            return None;
        }
        info!(
            "Place {:?} at ({}, {}, {}) in chunk ({}, {})",
            block_type, cell.x, cell.y, cell.z, self.active_chunk.x, self.active_chunk.z
        );
        self.remesh();
        Some(cell)
    }

    /// Writes a cell of the active chunk. `None` if the cell is outside it.
    fn write_active(&mut self, cell: Point3<i32>, voxel: Voxel) -> Option<()> {
        let chunk = self
            .world_manager
            .world_mut()
            .get_chunk_at_mut(self.active_chunk)?;
        if !chunk.contains(cell.x, cell.y, cell.z) {
            return None;
        }
        *chunk.at_mut(cell.x as usize, cell.y as usize, cell.z as usize) = voxel;
        Some(())
    }

    /// Writes the active chunk to `path`.
    ///
    /// # Errors
    /// `ChunkError::Io` with `NotFound` if the active chunk has been unloaded.
    pub fn save_active_chunk<P: AsRef<Path>>(&self, path: P) -> Result<(), ChunkError> {
        let chunk = self.active_chunk_data().ok_or_else(|| {
            ChunkError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "active chunk ({}, {}) is not loaded",
                    self.active_chunk.x, self.active_chunk.z
                ),
            ))
        })?;
        chunk.save_to_file(path)
    }

    /// Replaces the active chunk with the one stored at `path` and remeshes.
    ///
    /// The stored chunk must have this world's chunk dimensions; on any error the active
    /// chunk is left unchanged.
    pub fn load_active_chunk<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ChunkError> {
        let loaded = Chunk::read_from_file(path)?;
        let dimensions = *self.world_manager.world().dimensions();
        if loaded.size() != [dimensions.size_x, dimensions.size_y, dimensions.size_z] {
            let [x, y, z] = loaded.size().map(|s| s as i32);
            warn!(
                "Rejecting stored chunk of size {}x{}x{} for a world of {:?}",
                x, y, z, dimensions
            );
            return Err(ChunkError::InvalidDimensions { x, y, z });
        }
        *self
            .world_manager
            .world_mut()
            .get_or_create_chunk(self.active_chunk) = loaded;
        self.remesh();
        Ok(())
    }

    /// Camera position inside the active chunk.
    pub fn local_camera_position(&self) -> Point3<f32> {
        Point3::from_vec(self.camera.position.to_vec() - self.chunk_origin())
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Deg;

    use crate::config::ChunkDimensions;

    use super::*;

    fn config() -> EngineConfig {
        EngineConfig {
            chunk: ChunkDimensions::new(8, 8, 8),
            view_distance: 1,
            ..EngineConfig::default()
        }
    }

    /// Camera above the chunk, looking straight down the column at (x, z).
    fn looking_down(engine_state: &mut EngineState, x: f32, z: f32) {
        engine_state.camera = Camera::new(Point3::new(x, 20.0, z), Deg(0.0), Deg(-90.0));
    }

    #[test]
    fn new_loads_window_and_meshes_origin_chunk() {
        let engine_state = EngineState::new(&config());
        assert_eq!(engine_state.world_manager().world().len(), 9);
        assert_eq!(engine_state.active_chunk(), ChunkCoord::new(0, 0));
        assert!(engine_state.mesh().is_empty());
        assert_eq!(engine_state.reach(), 100.0);
    }

    #[test]
    fn place_on_top_of_targeted_block() {
        let mut engine_state = EngineState::new(&config());
        engine_state
            .world_manager_mut()
            .set_voxel(3, 0, 3, Voxel::new(BlockType::STONE));
        engine_state.remesh();
        looking_down(&mut engine_state, 3.5, 3.5);

        let hit = engine_state.target().unwrap();
        assert_eq!(hit.position, Point3::new(3, 0, 3));
        assert_eq!(hit.normal, Vector3::new(0, 1, 0));
        assert_eq!(engine_state.placement_preview(), Some(Point3::new(3, 1, 3)));

        assert_eq!(engine_state.place_block(BlockType::DIRT), Some(Point3::new(3, 1, 3)));
        let chunk = engine_state.active_chunk_data().unwrap();
        assert_eq!(chunk.at(3, 1, 3).block_type, BlockType::DIRT);
        // A 1x2x1 column of two types: no merging across types on the sides.
        assert_eq!(engine_state.mesh().quad_count(), 10);
    }

    #[test]
    fn break_clears_target_and_remeshes() {
        let mut engine_state = EngineState::new(&config());
        engine_state
            .world_manager_mut()
            .set_voxel(5, 2, 6, Voxel::new(BlockType::SAND));
        engine_state.remesh();
        assert_eq!(engine_state.mesh().quad_count(), 6);

        looking_down(&mut engine_state, 5.5, 6.5);
        assert_eq!(engine_state.break_block(), Some(Point3::new(5, 2, 6)));
        assert!(engine_state.mesh().is_empty());
        assert_eq!(engine_state.break_block(), None);
    }

    #[test]
    fn placement_outside_chunk_is_rejected() {
        let mut engine_state = EngineState::new(&config());
        // Looking straight up from below the chunk: the cell 4 units ahead has y < 0.
        engine_state.camera = Camera::new(Point3::new(1.5, -10.0, 1.5), Deg(0.0), Deg(90.0));
        assert_eq!(engine_state.placement_preview(), None);
        assert_eq!(engine_state.place_block(BlockType::DIRT), None);
        assert_eq!(engine_state.active_chunk_data().unwrap().solid_count(), 0);
    }

    #[test]
    fn active_chunk_follows_camera() {
        let mut engine_state = EngineState::new(&config());
        engine_state.camera.position = Point3::new(-1.5, 4.0, 9.0);
        assert!(engine_state.update());
        assert_eq!(engine_state.active_chunk(), ChunkCoord::new(-1, 1));
        assert!(!engine_state.update());

        let local = engine_state.local_camera_position();
        assert!((local.x - 6.5).abs() < 1e-6);
        assert!((local.z - 1.0).abs() < 1e-6);

        // Less than a whole cell past the border still counts as the chunk at 0.
        engine_state.camera.position = Point3::new(-0.5, 4.0, -0.5);
        assert!(engine_state.update());
        assert_eq!(engine_state.active_chunk(), ChunkCoord::new(0, 0));
    }

    #[test]
    fn saving_an_unloaded_active_chunk_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.chunk");

        let mut engine_state = EngineState::new(&config());
        assert!(engine_state
            .world_manager_mut()
            .world_mut()
            .unload_chunk(ChunkCoord::new(0, 0)));

        let result = engine_state.save_active_chunk(&path);
        assert!(matches!(
            result,
            Err(ChunkError::Io(ref err)) if err.kind() == std::io::ErrorKind::NotFound
        ));
        assert!(!path.exists());
    }

    #[test]
    fn load_rejects_mismatched_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.chunk");
        Chunk::solid(2, 2, 2, BlockType::STONE).save_to_file(&path).unwrap();

        let mut engine_state = EngineState::new(&config());
        let result = engine_state.load_active_chunk(&path);
        assert!(matches!(result, Err(ChunkError::InvalidDimensions { x: 2, y: 2, z: 2 })));
        assert_eq!(engine_state.active_chunk_data().unwrap().solid_count(), 0);

        let full = dir.path().join("full.chunk");
        Chunk::solid(8, 8, 8, BlockType::GRASS).save_to_file(&full).unwrap();
        engine_state.load_active_chunk(&full).unwrap();
        assert_eq!(engine_state.mesh().quad_count(), 6);
    }
}
