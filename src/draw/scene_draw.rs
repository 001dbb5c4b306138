// src/draw/scene_draw.rs
// Renders the controller state with nannou: dots, drawn lines, reward lines,
// activation marker and the feedback line.
//
// The model works in surface space (origin at the window's top-left corner,
// y down, like the original canvas). Nannou draws from the window center
// with y up, so every position goes through surface_to_draw first.

use nannou::prelude::*;

use crate::controllers::SceneController;
use crate::draw::SceneStyle;
use crate::models::{GridLayout, Segment, CENTER};

/// Surface space (top-left origin, y down) to nannou draw space.
pub fn surface_to_draw(position: Point2, window: Rect) -> Point2 {
    pt2(
        position.x - window.w() / 2.0,
        window.h() / 2.0 - position.y,
    )
}

/// Window (draw) space to surface space; used for mouse positions.
pub fn window_to_surface(position: Point2, window: Rect) -> Point2 {
    pt2(
        position.x + window.w() / 2.0,
        window.h() / 2.0 - position.y,
    )
}

/// Full redraw: the caller clears the background first.
pub fn draw_scene(draw: &Draw, scene: &SceneController, style: &SceneStyle, window: Rect) {
    draw_dots(draw, scene.layout(), style, window);
    draw_segments(
        draw,
        scene.layout(),
        scene.user_segments(),
        style.player_color,
        style,
        window,
    );
    draw_segments(
        draw,
        scene.layout(),
        scene.reward_segments(),
        style.reward_color,
        style,
        window,
    );

    if scene.is_activated() {
        let center = surface_to_draw(scene.layout().screen_position_of(CENTER), window);
        draw.ellipse()
            .xy(center)
            .radius(style.marker_radius)
            .color(style.marker_color);
    }

    draw_feedback(draw, scene.feedback_text(), style, window);
}

fn draw_dots(draw: &Draw, layout: &GridLayout, style: &SceneStyle, window: Rect) {
    for point in GridLayout::all_points() {
        let position = surface_to_draw(layout.screen_position_of(point), window);
        draw.ellipse()
            .xy(position)
            .radius(style.dot_radius)
            .color(style.dot_color);
    }
}

fn draw_segments(
    draw: &Draw,
    layout: &GridLayout,
    segments: &[Segment],
    color: Rgb<f32>,
    style: &SceneStyle,
    window: Rect,
) {
    for segment in segments {
        let start = surface_to_draw(layout.screen_position_of(segment.start), window);
        let end = surface_to_draw(layout.screen_position_of(segment.end), window);
        draw.line()
            .points(start, end)
            .stroke_weight(style.stroke_weight)
            .color(color);
    }
}

fn draw_feedback(draw: &Draw, text: &str, style: &SceneStyle, window: Rect) {
    // Empty before activation; drawing "" keeps the sink unconditional.
    draw.text(text)
        .x_y(0.0, -window.h() / 2.0 + 30.0)
        .font_size(style.font_size)
        .color(WHITE);
}
