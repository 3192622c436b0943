//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame with the unscaled frame delta.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Apply one tick of wall-clock time to the world clock.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
