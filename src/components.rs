use bevy::prelude::*;

/// Index of the body this entity draws, into `BodySet`.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyIndex(pub usize);
