use bevy::prelude::*;

use crate::body::{Body, BodySet, BODY_COUNT};
use crate::config::GravityConfig;

/// Acceleration `other` imparts on a body at `position`.
/// Zero when the two are within the proximity cutoff.
pub fn pairwise_acceleration(position: Vec2, other: &Body, config: &GravityConfig) -> Vec2 {
    let diff = other.position - position;
    let dist = diff.length();

    if dist <= config.proximity_cutoff {
        return Vec2::ZERO;
    }

    let g = config.g * other.mass / (dist * dist);
    diff / dist * g
}

/// Sum of the accelerations every other body imparts on `bodies[index]`.
pub fn compute_acceleration(index: usize, bodies: &[Body], config: &GravityConfig) -> Vec2 {
    let position = bodies[index].position;
    bodies
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .fold(Vec2::ZERO, |acc, (_, other)| {
            acc + pairwise_acceleration(position, other, config)
        })
}

/// Recompute every body's acceleration from the current positions.
/// All accelerations are computed before any is written.
pub fn accumulate_accelerations(bodies: &mut [Body; BODY_COUNT], config: &GravityConfig) {
    let mut accels = [Vec2::ZERO; BODY_COUNT];
    for (i, accel) in accels.iter_mut().enumerate() {
        *accel = compute_acceleration(i, &bodies[..], config);
    }

    for (body, accel) in bodies.iter_mut().zip(accels) {
        body.acceleration = accel;
    }
}

/// Semi-implicit Euler with a step of one frame.
pub fn integrate(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        body.velocity += body.acceleration;
        body.position += body.velocity;
    }
}

pub fn step(bodies: &mut [Body; BODY_COUNT], config: &GravityConfig) {
    accumulate_accelerations(bodies, config);
    integrate(bodies);
}

/// One physics tick: every acceleration, then every velocity and position.
pub fn simulation_step_system(mut bodies: ResMut<BodySet>, config: Res<GravityConfig>) {
    step(&mut bodies.0, &config);
}
