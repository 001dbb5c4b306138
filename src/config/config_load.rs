// src/config/config_load.rs
//
// loading config.toml

use crate::config::config_types::{FeedbackConfig, LayoutConfig, StyleConfig, WindowConfig};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub style: StyleConfig,
    pub feedback: FeedbackConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The shipped defaults, kept in sync with config.toml
    const DEFAULT_CONFIG: &str = r#"
        [window]
        width = 480
        height = 480

        [layout]
        origin_x = 80.0
        origin_y = 80.0
        cell_size = 80.0
        hit_radius = 20.0

        [style]
        dot_radius = 6.0
        stroke_weight = 4.0
        marker_radius = 12.0
        dot_color = [0.784, 0.784, 0.784]
        player_color = [0.235, 0.47, 0.784]
        reward_color = [1.0, 0.843, 0.0]
        marker_color = [0.706, 0.0, 0.706]

        [feedback]
        activated_message = "Spell Activated: Diamond Glyph"
        font_size = 24
    "#;

    #[test]
    fn default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("defaults must parse");
        assert_eq!(config.window.width, 480);
        assert_eq!(config.layout.cell_size, 80.0);
        assert!(config.layout.hit_radius < config.layout.cell_size / 2.0);
        assert_eq!(
            config.feedback.activated_message,
            "Spell Activated: Diamond Glyph"
        );
    }
}
