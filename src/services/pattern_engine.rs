// src/services/pattern_engine.rs
//
// The target/reward pattern rules: four 2x2 corner squares the player has to
// trace, and the two diamonds revealed once they are all complete.

use crate::models::{GridPoint, Segment};

/// The four corner squares, each an open 4-point cycle. Edges are generated
/// with a modular wrap, so each square contributes 4 edges.
const CORNER_SQUARES: [[GridPoint; 4]; 4] = [
    [
        GridPoint::new(0, 0),
        GridPoint::new(0, 1),
        GridPoint::new(1, 1),
        GridPoint::new(1, 0),
    ],
    [
        GridPoint::new(3, 0),
        GridPoint::new(3, 1),
        GridPoint::new(4, 1),
        GridPoint::new(4, 0),
    ],
    [
        GridPoint::new(0, 3),
        GridPoint::new(0, 4),
        GridPoint::new(1, 4),
        GridPoint::new(1, 3),
    ],
    [
        GridPoint::new(3, 3),
        GridPoint::new(3, 4),
        GridPoint::new(4, 4),
        GridPoint::new(4, 3),
    ],
];

// The diamonds are given as closed loops (first point repeated at the end),
// so consecutive pairs yield the 4 boundary edges with no wrap. Deliberately
// a different generation rule than the corner squares; do not unify them
// without checking the emitted edge sets stay identical.
const INNER_DIAMOND: [GridPoint; 5] = [
    GridPoint::new(2, 1),
    GridPoint::new(1, 2),
    GridPoint::new(2, 3),
    GridPoint::new(3, 2),
    GridPoint::new(2, 1),
];

const OUTER_DIAMOND: [GridPoint; 5] = [
    GridPoint::new(2, 0),
    GridPoint::new(0, 2),
    GridPoint::new(2, 4),
    GridPoint::new(4, 2),
    GridPoint::new(2, 0),
];

/// The 16 edges the player must trace: 4 per corner square, wrap included.
pub fn target_edges() -> Vec<Segment> {
    let mut edges = Vec::with_capacity(16);
    for square in &CORNER_SQUARES {
        for i in 0..square.len() {
            edges.push(Segment::new(square[i], square[(i + 1) % square.len()]));
        }
    }
    edges
}

/// True once every target edge has at least one undirected match among the
/// player's segments. Unrelated extra segments never block completion.
pub fn is_pattern_complete(user_segments: &[Segment]) -> bool {
    target_edges()
        .iter()
        .all(|edge| user_segments.iter().any(|drawn| drawn.matches(edge)))
}

/// The 8 reward edges: consecutive pairs over each closed diamond loop.
pub fn reward_segments() -> Vec<Segment> {
    let mut segments = Vec::with_capacity(8);
    for loop_points in [&INNER_DIAMOND, &OUTER_DIAMOND] {
        for pair in loop_points.windows(2) {
            segments.push(Segment::new(pair[0], pair[1]));
        }
    }
    segments
}
