use bevy_ecs::prelude::Component;

/// Mirroring flags applied when drawing an entity's current frame.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}
