// src/draw/mod.rs
// Scene drawing: style parameters and the per-frame redraw

pub mod scene_draw;

pub use scene_draw::{draw_scene, surface_to_draw, window_to_surface};

use crate::config::{FeedbackConfig, StyleConfig};
use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct SceneStyle {
    pub dot_radius: f32,
    pub stroke_weight: f32,
    pub marker_radius: f32,
    pub dot_color: Rgb<f32>,
    pub player_color: Rgb<f32>,
    pub reward_color: Rgb<f32>,
    pub marker_color: Rgb<f32>,
    pub font_size: u32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            dot_radius: 6.0,
            stroke_weight: 4.0,
            marker_radius: 12.0,
            dot_color: rgb(0.784, 0.784, 0.784),
            player_color: rgb(0.235, 0.47, 0.784),
            reward_color: rgb(1.0, 0.843, 0.0),
            marker_color: rgb(0.706, 0.0, 0.706),
            font_size: 24,
        }
    }
}

impl SceneStyle {
    pub fn from_config(style: &StyleConfig, feedback: &FeedbackConfig) -> Self {
        let color = |c: [f32; 3]| rgb(c[0], c[1], c[2]);
        Self {
            dot_radius: style.dot_radius,
            stroke_weight: style.stroke_weight,
            marker_radius: style.marker_radius,
            dot_color: color(style.dot_color),
            player_color: color(style.player_color),
            reward_color: color(style.reward_color),
            marker_color: color(style.marker_color),
            font_size: feedback.font_size,
        }
    }
}
