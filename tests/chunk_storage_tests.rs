/// Integration tests for the chunk file format
/// These tests write real files into scratch directories and read them back
use voxel_core::engine_state::voxels::chunk::chunk_storage::CHUNK_FILE_MAGIC;
use voxel_core::*;

fn random_chunk(seed: u64, size_x: usize, size_y: usize, size_z: usize) -> Chunk {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut chunk = Chunk::new(size_x, size_y, size_z);
    for index in 0..chunk.volume() {
        let p = chunk.coords_of(index);
        let voxel = chunk.at_mut(p.x, p.y, p.z);
        if rng.u8(0..3) > 0 {
            voxel.block_type = BlockType::random_solid_with(&mut rng);
        }
        voxel.light = rng.u8(..);
    }
    chunk
}

#[test]
fn test_save_load_round_trip_preserves_types() {
    let dir = tempfile::tempdir().unwrap();

    for (seed, dims) in [(1, (16, 16, 16)), (2, (3, 7, 5)), (3, (1, 1, 1)), (4, (32, 4, 9))] {
        let original = random_chunk(seed, dims.0, dims.1, dims.2);
        let path = dir.path().join(format!("chunk_{}.bin", seed));
        original.save_to_file(&path).unwrap();

        let mut loaded = Chunk::new(2, 2, 2);
        loaded.load_from_file(&path).unwrap();

        assert_eq!(loaded.size(), original.size());
        for (a, b) in loaded.voxels().iter().zip(original.voxels()) {
            assert_eq!(a.block_type, b.block_type);
        }
    }
}

#[test]
fn test_file_size_matches_header_plus_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sized.bin");
    Chunk::new(4, 5, 6).save_to_file(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 16 + 4 * 5 * 6);
    assert_eq!(&bytes[0..4], &CHUNK_FILE_MAGIC.to_ne_bytes());
    assert_eq!(i32::from_ne_bytes(bytes[4..8].try_into().unwrap()), 4);
    assert_eq!(i32::from_ne_bytes(bytes[8..12].try_into().unwrap()), 5);
    assert_eq!(i32::from_ne_bytes(bytes[12..16].try_into().unwrap()), 6);
}

#[test]
fn test_cells_are_written_in_linear_index_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ordered.bin");
    let mut chunk = Chunk::new(2, 2, 2);
    chunk.at_mut(1, 0, 0).block_type = BlockType::DIRT;
    chunk.at_mut(0, 0, 1).block_type = BlockType::GRASS;
    chunk.at_mut(0, 1, 0).block_type = BlockType::SAND;
    chunk.save_to_file(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[16..], &[0, 1, 2, 0, 4, 0, 0, 0]);
}

#[test]
fn test_failed_loads_leave_chunk_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let target = random_chunk(9, 4, 4, 4);

    let missing = dir.path().join("missing.bin");
    let mut chunk = target.clone();
    assert!(matches!(chunk.load_from_file(&missing), Err(ChunkError::Io(_))));
    assert_eq!(chunk, target);

    let good = dir.path().join("good.bin");
    Chunk::solid(2, 2, 2, BlockType::STONE).save_to_file(&good).unwrap();
    let bytes = std::fs::read(&good).unwrap();

    let bad_magic = dir.path().join("bad_magic.bin");
    let mut corrupted = bytes.clone();
    corrupted[0] ^= 0xFF;
    std::fs::write(&bad_magic, &corrupted).unwrap();
    assert!(matches!(chunk.load_from_file(&bad_magic), Err(ChunkError::BadMagic { .. })));
    assert_eq!(chunk, target);

    let bad_dims = dir.path().join("bad_dims.bin");
    let mut corrupted = bytes.clone();
    corrupted[8..12].copy_from_slice(&0i32.to_ne_bytes());
    std::fs::write(&bad_dims, &corrupted).unwrap();
    assert!(matches!(
        chunk.load_from_file(&bad_dims),
        Err(ChunkError::InvalidDimensions { x: 2, y: 0, z: 2 })
    ));
    assert_eq!(chunk, target);

    let truncated = dir.path().join("truncated.bin");
    std::fs::write(&truncated, &bytes[..bytes.len() - 1]).unwrap();
    assert!(chunk.load_from_file(&truncated).is_err());
    assert_eq!(chunk, target);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("chunk.bin");
    let result = Chunk::new(2, 2, 2).save_to_file(&path);
    assert!(matches!(result, Err(ChunkError::Io(_))));
}
