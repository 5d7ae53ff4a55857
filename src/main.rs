use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
};
use bevy_prototype_lyon::prelude::*;

use body::solar_system;
use camera::{camera_input_system, camera_viewport_system, CameraState};
use config::{CameraConfig, GravityConfig, TICKS_PER_SECOND, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use gravity::simulation_step_system;
use render::{position_update_system, setup_body_shapes, setup_camera};

mod body;
mod camera;
mod components;
mod config;
mod gravity;
mod render;

fn main() {
    let gravity = GravityConfig::default();
    let bodies = solar_system(&gravity, &mut rand::thread_rng());

    App::new()
        .insert_resource(ClearColor(Color::rgb_u8(245, 245, 245)))
        .insert_resource(FixedTime::new_from_secs(1.0 / TICKS_PER_SECOND))
        .insert_resource(gravity)
        .insert_resource(bodies)
        .init_resource::<CameraConfig>()
        .init_resource::<CameraState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugin(ShapePlugin)
        .add_plugin(LogDiagnosticsPlugin::default())
        .add_plugin(FrameTimeDiagnosticsPlugin::default())
        .add_startup_system(setup_camera)
        .add_startup_system(setup_body_shapes)
        .add_system(simulation_step_system.in_schedule(CoreSchedule::FixedUpdate))
        .add_system(position_update_system)
        .add_system(camera_input_system)
        .add_system(camera_viewport_system.after(camera_input_system))
        .run();
}
