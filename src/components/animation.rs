//! Per-entity animation playback cursor.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Playback cursor over a shared definition in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
///
/// The cursor is the only mutable playback state; the definition it points
/// at is read-only. Any number of entities may carry cursors over the same
/// key without interfering with one another, and restarting an animation is
/// nothing more than [`Animation::reset`].
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    /// Key of the definition in the store.
    pub animation_key: String,
    /// Frame resolved on the last animation tick.
    pub frame_index: usize,
    /// Seconds this cursor has been playing.
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Restart playback from the first frame.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.elapsed_time = 0.0;
    }
}
