//! # Voxel Core Entry Point
//!
//! Runs the headless editing demo from the library's `run()` function.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- [config.json]
//! ```

fn main() -> anyhow::Result<()> {
    voxel_core::run()
}
