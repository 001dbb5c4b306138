// src/models/grid_model.rs
//
// The fixed 5x5 dot grid: point identities, screen layout and hit testing.
//
// Grid points live in integer coordinates, x,y in [0, 4]. Screen positions
// are in surface space: origin at the window's top-left corner, y growing
// downward. The draw module converts to nannou's centered coordinates.

use crate::config::LayoutConfig;
use nannou::prelude::*;

pub const GRID_SIZE: u32 = 5;

/// One of the 25 fixed dots. The (x, y) pair is the point's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// The grid's center dot, highlighted once the reward pattern is revealed.
pub const CENTER: GridPoint = GridPoint::new(2, 2);

/// Maps grid points to surface positions and resolves clicks back to points.
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub origin: Point2,
    pub cell_size: f32,
    pub hit_radius: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin: pt2(80.0, 80.0),
            cell_size: 80.0,
            hit_radius: 20.0,
        }
    }
}

impl GridLayout {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            origin: pt2(config.origin_x, config.origin_y),
            cell_size: config.cell_size,
            hit_radius: config.hit_radius,
        }
    }

    /// All 25 points in row-major order (y outer, x inner). This order is a
    /// documented property of the grid: nearest_point tie-breaks by first
    /// match in it.
    pub fn all_points() -> impl Iterator<Item = GridPoint> {
        (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| GridPoint::new(x, y)))
    }

    pub fn screen_position_of(&self, point: GridPoint) -> Point2 {
        pt2(
            self.origin.x + point.x as f32 * self.cell_size,
            self.origin.y + point.y as f32 * self.cell_size,
        )
    }

    /// Resolves a surface position to the first grid point (in row-major
    /// order) strictly closer than hit_radius, or None if every point is too
    /// far. With the default layout hit_radius < cell_size / 2, so at most
    /// one point can qualify.
    pub fn nearest_point(&self, position: Point2) -> Option<GridPoint> {
        Self::all_points().find(|&point| {
            position.distance(self.screen_position_of(point)) < self.hit_radius
        })
    }
}
