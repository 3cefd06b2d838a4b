/// Integration tests for the edit session: raycast, edit, remesh
use cgmath::{Deg, Point3};
use voxel_core::*;

fn engine_state() -> EngineState {
    let config = EngineConfig::from_json_str(
        r#"{ "chunk": { "size_x": 8, "size_y": 8, "size_z": 8 }, "view_distance": 1 }"#,
    )
    .unwrap();
    EngineState::new(&config)
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let config = EngineConfig::from_json_str(r#"{ "view_distance": -3 }"#).unwrap();
    assert_eq!(config.chunk, ChunkDimensions::new(16, 16, 16));
    assert_eq!(config.view_distance, 0);
    assert_eq!(config.reach, 100.0);
    assert!(!config.unload_outside_view);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_build_a_tower_by_looking_down() {
    let mut engine_state = engine_state();
    engine_state.camera = Camera::new(Point3::new(4.5, 30.0, 4.5), Deg(0.0), Deg(-90.0));

    // Nothing below: the first block goes 4 units ahead, outside the chunk.
    assert_eq!(engine_state.place_block(BlockType::DIRT), None);

    engine_state
        .world_manager_mut()
        .set_voxel(4, 0, 4, Voxel::new(BlockType::STONE));
    engine_state.remesh();

    for expected_y in 1..8 {
        let placed = engine_state.place_block(BlockType::DIRT);
        assert_eq!(placed, Some(Point3::new(4, expected_y, 4)));
    }
    // The column is full; the next cell up is above the chunk.
    assert_eq!(engine_state.placement_preview(), None);
    assert_eq!(engine_state.place_block(BlockType::DIRT), None);

    let chunk = engine_state.active_chunk_data().unwrap();
    assert_eq!(chunk.solid_count(), 8);
    assert_eq!(engine_state.mesh(), &Mesh::greedy(chunk));
    // Stone at the bottom, then a merged dirt column on each side.
    assert_eq!(engine_state.mesh().quad_count(), 10);
}

#[test]
fn test_break_digs_down_the_column() {
    let mut engine_state = engine_state();
    if let Some(chunk) = engine_state
        .world_manager_mut()
        .world_mut()
        .get_chunk_at_mut(ChunkCoord::new(0, 0))
    {
        chunk.fill(BlockType::STONE);
    }
    engine_state.remesh();
    engine_state.camera = Camera::new(Point3::new(2.5, 12.0, 6.5), Deg(0.0), Deg(-90.0));

    for y in (0..8).rev() {
        assert_eq!(engine_state.break_block(), Some(Point3::new(2, y, 6)));
    }
    assert_eq!(engine_state.break_block(), None);
    assert_eq!(engine_state.active_chunk_data().unwrap().solid_count(), 512 - 8);
}

#[test]
fn test_edits_follow_the_camera_into_other_chunks() {
    let mut engine_state = engine_state();
    engine_state.camera = Camera::new(Point3::new(-3.5, 20.0, -3.5), Deg(0.0), Deg(-90.0));
    assert!(engine_state.update());
    assert_eq!(engine_state.active_chunk(), ChunkCoord::new(-1, -1));

    assert!(engine_state
        .world_manager_mut()
        .set_voxel(-4, 2, -4, Voxel::new(BlockType::GRASS)));
    engine_state.remesh();

    let hit = engine_state.target().unwrap();
    assert_eq!(hit.position, Point3::new(4, 2, 4));
    assert_eq!(engine_state.place_block(BlockType::SAND), Some(Point3::new(4, 3, 4)));
    assert_eq!(
        engine_state.world_manager().try_get_voxel(-4, 3, -4),
        Some(&Voxel::new(BlockType::SAND))
    );
}

#[test]
fn test_active_chunk_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("active.chunk");

    let mut engine_state = engine_state();
    engine_state
        .world_manager_mut()
        .set_voxel(1, 1, 1, Voxel::new(BlockType::GRASS));
    engine_state.remesh();
    engine_state.save_active_chunk(&path).unwrap();

    let mut restored = self::engine_state();
    restored.load_active_chunk(&path).unwrap();
    assert_eq!(restored.mesh(), engine_state.mesh());
    assert_eq!(
        restored.world_manager().try_get_voxel(1, 1, 1),
        Some(&Voxel::new(BlockType::GRASS))
    );
}
