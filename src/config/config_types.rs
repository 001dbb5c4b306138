// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct LayoutConfig {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub hit_radius: f32, // must stay below cell_size / 2 so dot hit zones never overlap
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub dot_radius: f32,
    pub stroke_weight: f32,
    pub marker_radius: f32,
    pub dot_color: [f32; 3],
    pub player_color: [f32; 3],
    pub reward_color: [f32; 3],
    pub marker_color: [f32; 3],
}

#[derive(Debug, Deserialize)]
pub struct FeedbackConfig {
    pub activated_message: String,
    pub font_size: u32,
}
