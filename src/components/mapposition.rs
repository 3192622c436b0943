use bevy_ecs::prelude::Component;

/// World-space position of an entity; the render pass places the top-left
/// corner of the current frame here.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
