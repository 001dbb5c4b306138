// src/services/mod.rs

pub mod pattern_engine;
