// src/controllers/mod.rs

pub mod scene_controller;

pub use scene_controller::{SceneController, Selection};
