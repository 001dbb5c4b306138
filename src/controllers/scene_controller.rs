// src/controllers/scene_controller.rs
//
// SceneController owns all mutable drawing state. Every click goes through
// handle_click, which runs to completion before the next event arrives
// (nannou's event loop is single threaded), so no locking is needed.

use crate::models::{GridLayout, GridPoint, Segment};
use crate::services::pattern_engine;
use nannou::prelude::Point2;

/// Selection state for the two-click line drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Idle,
    Pending(GridPoint),
}

#[derive(Debug)]
pub struct SceneController {
    layout: GridLayout,
    user_segments: Vec<Segment>,
    reward_segments: Vec<Segment>,
    selection: Selection,
    activated: bool,
    activated_message: String,
}

impl SceneController {
    pub fn new(layout: GridLayout, activated_message: String) -> Self {
        Self {
            layout,
            user_segments: Vec::new(),
            reward_segments: Vec::new(),
            selection: Selection::Idle,
            activated: false,
            activated_message,
        }
    }

    /// Full click pipeline: resolve the position to a dot, step the selection
    /// state machine, then re-evaluate the pattern if a segment was drawn.
    /// A click that misses every dot is silently ignored.
    pub fn handle_click(&mut self, position: Point2) {
        let Some(clicked) = self.layout.nearest_point(position) else {
            return;
        };
        if self.select_point(clicked) {
            self.evaluate_pattern();
        }
    }

    /// Steps the selection state machine. Returns true when a segment was
    /// appended. Clicking the pending dot again cancels the selection.
    fn select_point(&mut self, clicked: GridPoint) -> bool {
        match self.selection {
            Selection::Idle => {
                self.selection = Selection::Pending(clicked);
                false
            }
            Selection::Pending(pending) => {
                self.selection = Selection::Idle;
                if pending == clicked {
                    return false;
                }
                self.user_segments.push(Segment::new(pending, clicked));
                true
            }
        }
    }

    /// One-shot activation: once the corner squares are all traced the
    /// reward segments are installed and the flag never clears. Skipped
    /// entirely after activation, so the reward set is computed exactly once.
    fn evaluate_pattern(&mut self) {
        if self.activated {
            return;
        }
        if pattern_engine::is_pattern_complete(&self.user_segments) {
            self.reward_segments = pattern_engine::reward_segments();
            self.activated = true;
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn user_segments(&self) -> &[Segment] {
        &self.user_segments
    }

    pub fn reward_segments(&self) -> &[Segment] {
        &self.reward_segments
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// The status line for the text sink: empty until activation.
    pub fn feedback_text(&self) -> &str {
        if self.activated {
            &self.activated_message
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pattern_engine::target_edges;
    use nannou::prelude::*;

    fn controller() -> SceneController {
        SceneController::new(GridLayout::default(), "Spell Activated".to_string())
    }

    // Click at the exact screen position of a grid point.
    fn click(scene: &mut SceneController, x: u32, y: u32) {
        let position = scene.layout().screen_position_of(GridPoint::new(x, y));
        scene.handle_click(position);
    }

    fn draw_segment(scene: &mut SceneController, segment: Segment) {
        click(scene, segment.start.x, segment.start.y);
        click(scene, segment.end.x, segment.end.y);
    }

    #[test]
    fn two_clicks_draw_one_segment() {
        let mut scene = controller();
        click(&mut scene, 0, 0);
        assert_eq!(scene.selection(), Selection::Pending(GridPoint::new(0, 0)));
        assert!(scene.user_segments().is_empty());

        click(&mut scene, 0, 1);
        assert_eq!(scene.selection(), Selection::Idle);
        assert_eq!(
            scene.user_segments(),
            &[Segment::new(GridPoint::new(0, 0), GridPoint::new(0, 1))]
        );
    }

    #[test]
    fn clicking_the_pending_dot_cancels() {
        let mut scene = controller();
        click(&mut scene, 2, 2);
        click(&mut scene, 2, 2);
        assert_eq!(scene.selection(), Selection::Idle);
        assert!(scene.user_segments().is_empty());
    }

    #[test]
    fn a_miss_is_a_no_op() {
        let mut scene = controller();
        click(&mut scene, 1, 1);
        // Middle of a cell: beyond the hit radius of every dot.
        scene.handle_click(pt2(120.0, 120.0));
        assert_eq!(scene.selection(), Selection::Pending(GridPoint::new(1, 1)));
        assert!(scene.user_segments().is_empty());
    }

    #[test]
    fn one_square_does_not_activate() {
        let mut scene = controller();
        for (a, b) in [((0, 0), (0, 1)), ((0, 1), (1, 1)), ((1, 1), (1, 0)), ((1, 0), (0, 0))] {
            draw_segment(
                &mut scene,
                Segment::new(GridPoint::new(a.0, a.1), GridPoint::new(b.0, b.1)),
            );
        }
        assert_eq!(scene.user_segments().len(), 4);
        assert!(!scene.is_activated());
        assert!(scene.reward_segments().is_empty());
        assert_eq!(scene.feedback_text(), "");
    }

    #[test]
    fn tracing_all_squares_activates_once() {
        let mut scene = controller();
        for edge in target_edges() {
            draw_segment(&mut scene, edge);
        }
        assert_eq!(scene.user_segments().len(), 16);
        assert!(scene.is_activated());
        assert_eq!(scene.reward_segments().len(), 8);
        assert_eq!(scene.reward_segments(), pattern_engine::reward_segments());
        assert_eq!(scene.feedback_text(), "Spell Activated");
    }

    #[test]
    fn activation_is_one_shot() {
        let mut scene = controller();
        for edge in target_edges() {
            draw_segment(&mut scene, edge);
        }
        let reward: Vec<Segment> = scene.reward_segments().to_vec();

        // Trace everything again, reversed; only the user set may change.
        for edge in target_edges() {
            draw_segment(&mut scene, edge.reversed());
        }
        assert!(scene.is_activated());
        assert_eq!(scene.user_segments().len(), 32);
        assert_eq!(scene.reward_segments(), reward.as_slice());
    }

    #[test]
    fn user_set_is_append_only_after_activation() {
        let mut scene = controller();
        for edge in target_edges() {
            draw_segment(&mut scene, edge);
        }
        draw_segment(
            &mut scene,
            Segment::new(GridPoint::new(2, 2), GridPoint::new(3, 3)),
        );
        assert_eq!(scene.user_segments().len(), 17);
        assert_eq!(scene.reward_segments().len(), 8);
    }
}
