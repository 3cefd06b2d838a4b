//! # Voxel Engine Core
//!
//! This module contains the core voxel functionality, providing the foundation for
//! representing, querying and editing a voxel world.
//!
//! ## Architecture
//!
//! The voxel system is organized into several key components:
//!
//! * **Block**: Defines individual voxel types and the six block faces
//! * **Chunk**: Manages fixed-size 3D arrays of voxels, including their binary file format
//! * **World**: Owns every loaded chunk, keyed by chunk coordinate
//! * **WorldManager**: Maps world coordinates onto chunks and streams chunks around the player
//! * **Raycast**: Finds the first solid cell along a ray inside a chunk
//!
//! ## Data Flow
//!
//! 1. The world manager receives a player position or a world-space voxel access
//! 2. It resolves the containing chunk with floor division and the local cell with a
//!    positive modulo
//! 3. Edits mutate the chunk in place; the caller remeshes afterwards
//!
//! ## Thread Safety
//!
//! Nothing here synchronizes. The world and its chunks belong to the thread that owns the
//! `World`.

pub mod block;
pub mod chunk;
pub mod coords;
pub mod raycast;
pub mod world;
pub mod world_manager;
