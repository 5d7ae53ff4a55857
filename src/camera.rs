//! Pan and zoom.
//!
//! `CameraState` follows screen conventions: a world point `p` lands on
//! screen at `p * zoom + offset`, with y growing downward. The viewport
//! system turns that into a Bevy camera transform and orthographic scale.

use bevy::{input::mouse::MouseWheel, prelude::*};

use crate::config::{screen_center, CameraConfig, INITIAL_ZOOM};

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Screen-space pan, in pixels
    pub offset: Vec2,
    /// Not clamped; may reach zero or go negative
    pub zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            offset: screen_center(),
            zoom: INITIAL_ZOOM,
        }
    }
}

impl CameraState {
    /// One scroll tick per frame, in the direction of `delta`.
    pub fn scroll(&mut self, delta: f32, config: &CameraConfig) {
        if delta > 0.0 {
            self.zoom += config.scroll_zoom_step;
        } else if delta < 0.0 {
            self.zoom -= config.scroll_zoom_step;
        }
    }

    pub fn apply_keys(&mut self, keys: &Input<KeyCode>, config: &CameraConfig) {
        if keys.just_pressed(KeyCode::K) {
            self.zoom += config.key_zoom_step;
        }
        if keys.just_pressed(KeyCode::J) {
            self.zoom -= config.key_zoom_step;
        }

        if keys.pressed(KeyCode::W) {
            self.offset.y += config.pan_step;
        }
        if keys.pressed(KeyCode::S) {
            self.offset.y -= config.pan_step;
        }
        if keys.pressed(KeyCode::A) {
            self.offset.x += config.pan_step;
        }
        if keys.pressed(KeyCode::D) {
            self.offset.x -= config.pan_step;
        }
    }

    /// World point shown at the centre of the screen.
    pub fn view_center(&self, zoom: f32) -> Vec2 {
        (screen_center() - self.offset) / zoom
    }
}

/// World (y down) to Bevy (y up).
pub fn world_to_bevy(p: Vec2) -> Vec2 {
    Vec2::new(p.x, -p.y)
}

pub fn camera_input_system(
    mut scroll_evr: EventReader<MouseWheel>,
    keys: Res<Input<KeyCode>>,
    config: Res<CameraConfig>,
    mut state: ResMut<CameraState>,
) {
    let delta: f32 = scroll_evr.iter().map(|ev| ev.y).sum();

    let before = *state;
    let mut next = before;
    next.scroll(delta, &config);
    next.apply_keys(&keys, &config);

    if next != before {
        debug!("camera offset {:?} zoom {}", next.offset, next.zoom);
        if next.zoom <= 0.0 && before.zoom > 0.0 {
            warn!("camera zoom is no longer positive ({})", next.zoom);
        }
        *state = next;
    }
}

pub fn camera_viewport_system(
    state: Res<CameraState>,
    config: Res<CameraConfig>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };

    let zoom = state.zoom.max(config.min_view_zoom);
    let center = world_to_bevy(state.view_center(zoom));
    transform.translation.x = center.x;
    transform.translation.y = center.y;
    projection.scale = 1.0 / zoom;
}
