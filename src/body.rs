use bevy::prelude::*;
use rand::prelude::*;

use crate::config::{GravityConfig, OrbitalSpeed};

/// One row of the planet table.
pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: f32,
    pub mass: f32,
    /// Distance from the sun along +x at startup
    pub distance: f32,
    /// Precomputed orbital speed, used with `OrbitalSpeed::Tabulated`
    pub orbital_speed: f32,
}

pub const SUN_POSITION: Vec2 = Vec2::new(500.0, 350.0);
pub const SUN_RADIUS: f32 = 50.0;
pub const SUN_MASS: f32 = 1000.0;

#[rustfmt::skip]
pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec { name: "Mercury", radius: 10.0, mass: 0.33,   distance: 58.0,   orbital_speed: 0.07  },
    PlanetSpec { name: "Venus",   radius: 12.0, mass: 4.87,   distance: 108.0,  orbital_speed: 0.05  },
    PlanetSpec { name: "Earth",   radius: 13.0, mass: 5.97,   distance: 150.0,  orbital_speed: 0.03  },
    PlanetSpec { name: "Mars",    radius: 11.0, mass: 0.642,  distance: 228.0,  orbital_speed: 0.02  },
    PlanetSpec { name: "Jupiter", radius: 35.0, mass: 1898.0, distance: 778.0,  orbital_speed: 0.01  },
    PlanetSpec { name: "Saturn",  radius: 30.0, mass: 568.0,  distance: 1427.0, orbital_speed: 0.009 },
    PlanetSpec { name: "Uranus",  radius: 25.0, mass: 86.8,   distance: 2871.0, orbital_speed: 0.006 },
    PlanetSpec { name: "Neptune", radius: 25.0, mass: 102.0,  distance: 4495.0, orbital_speed: 0.004 },
];

pub const BODY_COUNT: usize = PLANETS.len() + 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vec2,
    /// World units per frame
    pub velocity: Vec2,
    /// Overwritten every step before it is read
    pub acceleration: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub color: Color,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32, radius: f32, color: Color) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            mass,
            radius,
            color,
        }
    }
}

/// The sun and planets, in table order. Index 0 is the sun.
#[derive(Resource, Clone, Debug)]
pub struct BodySet(pub [Body; BODY_COUNT]);

impl BodySet {
    pub fn sun(&self) -> &Body {
        &self.0[0]
    }
}

/// Speed of a circular orbit at `distance` around a central `mass`.
pub fn circular_orbit_speed(g: f32, mass: f32, distance: f32) -> f32 {
    (g * mass / distance).sqrt()
}

fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::rgb_u8(rng.gen(), rng.gen(), rng.gen())
}

/// Build the sun at `SUN_POSITION` and one planet per table row, placed
/// on the sun's +x axis and moving along +y.
pub fn solar_system<R: Rng>(config: &GravityConfig, rng: &mut R) -> BodySet {
    let sun = Body::new(SUN_POSITION, Vec2::ZERO, SUN_MASS, SUN_RADIUS, Color::YELLOW);

    let mut bodies = [sun; BODY_COUNT];
    for (slot, spec) in bodies[1..].iter_mut().zip(PLANETS.iter()) {
        let speed = match config.orbital_speed {
            OrbitalSpeed::Circular => circular_orbit_speed(config.g, sun.mass, spec.distance),
            OrbitalSpeed::Tabulated => spec.orbital_speed,
        };
        debug!("{} at distance {} with speed {}", spec.name, spec.distance, speed);
        *slot = Body::new(
            sun.position + Vec2::new(spec.distance, 0.0),
            Vec2::new(0.0, speed),
            spec.mass,
            spec.radius,
            random_color(rng),
        );
    }

    BodySet(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn sun_is_first_and_at_rest() {
        let set = solar_system(&GravityConfig::default(), &mut seeded());
        let sun = set.sun();
        assert_eq!(sun.position, SUN_POSITION);
        assert_eq!(sun.velocity, Vec2::ZERO);
        assert_eq!(sun.mass, SUN_MASS);
        assert_eq!(sun.radius, SUN_RADIUS);
        assert_eq!(sun.color, Color::YELLOW);
    }

    #[test]
    fn planets_start_on_the_x_axis_with_circular_speed() {
        let config = GravityConfig::default();
        assert_eq!(config.g, 50.0);
        let set = solar_system(&config, &mut seeded());

        assert_eq!(set.0[1..].len(), PLANETS.len());
        for (body, spec) in set.0[1..].iter().zip(PLANETS.iter()) {
            assert_eq!(body.position, Vec2::new(500.0 + spec.distance, 350.0), "{}", spec.name);
            let expected = (50.0 * 1000.0 / spec.distance).sqrt();
            assert_eq!(body.velocity.x, 0.0);
            assert!((body.velocity.y - expected).abs() < 1e-5, "{}", spec.name);
            assert_eq!(body.mass, spec.mass);
            assert_eq!(body.radius, spec.radius);
            assert_eq!(body.acceleration, Vec2::ZERO);
        }
    }

    #[test]
    fn tabulated_speeds_come_from_the_table() {
        let config = GravityConfig {
            orbital_speed: OrbitalSpeed::Tabulated,
            ..default()
        };
        let set = solar_system(&config, &mut seeded());
        for (body, spec) in set.0[1..].iter().zip(PLANETS.iter()) {
            assert_eq!(body.velocity, Vec2::new(0.0, spec.orbital_speed));
        }
    }

    #[test]
    fn same_seed_same_colors() {
        let config = GravityConfig::default();
        let a = solar_system(&config, &mut seeded());
        let b = solar_system(&config, &mut seeded());
        for (x, y) in a.0.iter().zip(b.0.iter()) {
            assert_eq!(x.color, y.color);
        }
    }

    #[test]
    fn table_is_positive() {
        for spec in PLANETS.iter() {
            assert!(spec.mass > 0.0 && spec.radius > 0.0 && spec.distance > 0.0);
        }
    }
}
