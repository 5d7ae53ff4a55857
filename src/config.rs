use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "Gravity Simulation";
pub const WINDOW_WIDTH: f32 = 1000.0;
pub const WINDOW_HEIGHT: f32 = 700.0;

/// Physics ticks per second; one tick is one integration step.
pub const TICKS_PER_SECOND: f32 = 60.0;

pub const G: f32 = 50.0;

/// Bodies closer than this exert no force on each other.
pub const PROXIMITY_CUTOFF: f32 = 300.0;

pub const INITIAL_ZOOM: f32 = 0.1;
pub const SCROLL_ZOOM_STEP: f32 = 0.1;
pub const KEY_ZOOM_STEP: f32 = 0.05;
pub const PAN_STEP: f32 = 10.0;

/// Smallest zoom the viewport will hand to the projection.
pub const MIN_VIEW_ZOOM: f32 = 0.001;

/// Where a planet's initial orbital speed comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrbitalSpeed {
    /// `sqrt(G * sun_mass / distance)`
    #[default]
    Circular,
    /// The speed listed in the planet table.
    Tabulated,
}

#[derive(Resource, Clone, Copy, Debug)]
pub struct GravityConfig {
    pub g: f32,
    pub proximity_cutoff: f32,
    pub orbital_speed: OrbitalSpeed,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            g: G,
            proximity_cutoff: PROXIMITY_CUTOFF,
            orbital_speed: OrbitalSpeed::default(),
        }
    }
}

#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraConfig {
    pub scroll_zoom_step: f32,
    pub key_zoom_step: f32,
    pub pan_step: f32,
    pub min_view_zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            key_zoom_step: KEY_ZOOM_STEP,
            pan_step: PAN_STEP,
            min_view_zoom: MIN_VIEW_ZOOM,
        }
    }
}

pub fn screen_center() -> Vec2 {
    Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0)
}
