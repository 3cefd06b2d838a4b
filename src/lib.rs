#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Core
//!
//! The data and geometry core of a chunked voxel engine: chunk storage with a binary file
//! format, a sparse world of chunks streamed around the player, greedy meshing and voxel
//! raycasting for picking edit targets.
//!
//! ## Key Modules
//!
//! * `config` - Engine configuration handed to the world at construction time
//! * `engine_state` - Voxels, meshing, the camera and the edit session that ties them together
//!
//! ## Architecture
//!
//! Ownership is a tree: the [`World`] owns its chunks, each [`Chunk`] owns its voxels, and
//! a [`Mesh`] belongs to whoever asked for it. Everything runs synchronously on the calling
//! thread. An edit mutates a chunk and is followed by a remesh of that chunk.
//!
//! ## Usage
//!
//! ```rust
//! use voxel_core::{BlockType, ChunkCoord, ChunkDimensions, GreedyMesher, World, WorldManager};
//!
//! let mut manager = WorldManager::new(World::new(ChunkDimensions::new(16, 16, 16)), 1);
//! manager.update_player_position(-3.0, 5.0, 20.0);
//! assert_eq!(manager.world().len(), 9);
//!
//! let stone = BlockType::STONE.into();
//! assert!(manager.set_voxel(-1, 0, 17, stone));
//!
//! let chunk = manager.world().get_chunk_at(ChunkCoord::new(-1, 1)).unwrap();
//! let mesh = GreedyMesher::new().build_mesh(chunk);
//! assert_eq!(mesh.quad_count(), 6);
//! ```

use std::path::PathBuf;

use anyhow::Context;
use cgmath::Point3;
use log::info;

pub mod config;
pub mod engine_state;

pub use config::{ChunkDimensions, EngineConfig};
pub use engine_state::{
    camera_state::Camera,
    rendering::{Face, GreedyMesher, Mesh, Vertex},
    voxels::{
        block::{block_side::BlockSide, block_type::BlockType, Voxel},
        chunk::{Chunk, ChunkError},
        coords::{floor_div, positive_mod, ChunkCoord},
        raycast::{Ray, RayHit, VoxelRaycaster},
        world::World,
        world_manager::WorldManager,
    },
    EngineState,
};

/// Reads the engine configuration from the JSON file at `path`, or returns the defaults
/// when no path is given.
pub fn load_config(path: Option<PathBuf>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    EngineConfig::from_json_str(&json)
        .with_context(|| format!("parsing config file {}", path.display()))
}

/// Runs a headless editing session: streams the world around the camera, builds terrain in
/// the origin chunk, edits it through the view ray and round-trips it through a chunk file.
///
/// The optional first command-line argument is a JSON config file.
pub fn run() -> anyhow::Result<()> {
    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;

    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_filters(&config.log_level)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");
    info!("Config: {:?}", config);

    let mut engine_state = EngineState::new(&config);
    let dims = config.chunk;

    if let Some(chunk) = engine_state
        .world_manager_mut()
        .world_mut()
        .get_chunk_at_mut(ChunkCoord::new(0, 0))
    {
        let ground = dims.size_y / 2;
        chunk.fill_region(
            Point3::new(0, 0, 0),
            Point3::new(dims.size_x, ground.saturating_sub(1), dims.size_z),
            BlockType::STONE,
        );
        chunk.fill_region(
            Point3::new(0, ground, 0),
            Point3::new(dims.size_x, ground, dims.size_z),
            BlockType::GRASS,
        );
    }
    engine_state.remesh();
    info!(
        "Origin chunk meshed: {} quads, {} vertex bytes",
        engine_state.mesh().quad_count(),
        engine_state.mesh().vertex_bytes().len()
    );

    let center = Point3::new(
        dims.size_x as f32 / 2.0,
        dims.size_y as f32 / 2.0,
        dims.size_z as f32 / 2.0,
    );
    engine_state.camera.position = Point3::new(center.x, center.y + 2.0, center.z + 12.0);
    engine_state.camera.look_at(center);
    engine_state.update();

    if let Some(preview) = engine_state.placement_preview() {
        info!("Placement preview at {:?}", preview);
    }
    engine_state.place_block(BlockType::SAND);
    engine_state.break_block();
    info!(
        "After edits: {} solid cells, {} quads",
        engine_state
            .active_chunk_data()
            .map_or(0, |chunk| chunk.solid_count()),
        engine_state.mesh().quad_count()
    );

    let path = std::env::temp_dir().join("voxel-core-demo.chunk");
    engine_state
        .save_active_chunk(&path)
        .with_context(|| format!("saving chunk to {}", path.display()))?;
    engine_state
        .load_active_chunk(&path)
        .with_context(|| format!("loading chunk from {}", path.display()))?;
    info!("Chunk round-tripped through {}", path.display());

    // Walk two chunks along +X to move the streaming window.
    engine_state.camera.position.x += 2.0 * dims.size_x as f32;
    if engine_state.update() {
        info!(
            "Active chunk is now {:?}, {} chunks resident",
            engine_state.active_chunk(),
            engine_state.world_manager().world().len()
        );
    }

    Ok(())
}
