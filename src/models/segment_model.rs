// src/models/segment_model.rs
//
// A drawn line between two grid dots. Stored directed (in the order the
// endpoints were picked) but matched undirected: the pattern engine treats
// (a, b) and (b, a) as the same segment.

use crate::models::GridPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl Segment {
    pub const fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Undirected equality.
    pub fn matches(&self, other: &Segment) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }
}
