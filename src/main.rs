// src/main.rs
use nannou::prelude::*;

use spellgrid::{
    config::Config,
    controllers::SceneController,
    draw::{draw_scene, window_to_surface, SceneStyle},
    models::GridLayout,
};

struct Model {
    scene: SceneController,
    style: SceneStyle,
    debug_flag: bool,
}

fn main() {
    nannou::app(model).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    app.new_window()
        .title("spellgrid 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let layout = GridLayout::from_config(&config.layout);
    let style = SceneStyle::from_config(&config.style, &config.feedback);

    Model {
        scene: SceneController::new(layout, config.feedback.activated_message),
        style,
        debug_flag: false,
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    // Each click is handled to completion before the next event, so all
    // state changes stay serialized.
    let position = window_to_surface(app.mouse.position(), app.window_rect());
    model.scene.handle_click(position);
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => {
            app.quit();
        }
        _ => (),
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    draw_scene(&draw, &model.scene, &model.style, app.window_rect());

    if model.debug_flag {
        let text = format!(
            "segments: {} / reward: {} / t: {:.1}s",
            model.scene.user_segments().len(),
            model.scene.reward_segments().len(),
            app.time,
        );
        draw.text(&text)
            .x_y(0.0, app.window_rect().h() / 2.0 - 20.0)
            .font_size(14)
            .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
