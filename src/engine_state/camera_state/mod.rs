//! # Camera State Management
//!
//! The camera decides where edits land: its view ray is cast into the active chunk to pick
//! the block to break or the cell to place into.

pub mod camera;

pub use camera::Camera;
