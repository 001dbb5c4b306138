// src/models/mod.rs

pub mod grid_model;
pub mod segment_model;

pub use grid_model::{GridLayout, GridPoint, CENTER, GRID_SIZE};
pub use segment_model::Segment;
