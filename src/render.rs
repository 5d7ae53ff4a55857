use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;

use crate::body::BodySet;
use crate::camera::world_to_bevy;
use crate::components::BodyIndex;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

pub fn setup_body_shapes(mut commands: Commands, bodies: Res<BodySet>) {
    for (i, body) in bodies.0.iter().enumerate() {
        let surface = shapes::Circle {
            center: Vec2::ZERO,
            radius: body.radius,
        };

        // later bodies draw on top
        let translation = world_to_bevy(body.position).extend(i as f32 * 0.01);

        commands.spawn((
            ShapeBundle {
                path: GeometryBuilder::build_as(&surface),
                transform: Transform::from_translation(translation),
                ..default()
            },
            Fill::color(body.color),
            BodyIndex(i),
        ));
    }

    info!(
        "spawned {} bodies around a sun at {:?}",
        bodies.0.len(),
        bodies.sun().position
    );
}

pub fn position_update_system(
    bodies: Res<BodySet>,
    mut q: Query<(&mut Transform, &BodyIndex)>,
) {
    for (mut transform, BodyIndex(i)) in q.iter_mut() {
        if let Some(body) = bodies.0.get(*i) {
            let p = world_to_bevy(body.position);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}
