//! Animation playback.
//!
//! Frame selection is a pure function of a definition and an elapsed-time
//! value: [`frame_index_at`] keeps no memory between calls, so any number of
//! independent cursors can play one shared definition and restarting is
//! resetting a cursor to zero. The [`animation`] system is the ECS face of
//! the driver: it accumulates the world delta into each entity's
//! [`Animation`](crate::components::animation::Animation) cursor and
//! refreshes the cached frame index.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity playback cursor
//! - [`crate::resources::animationstore::AnimationStore`] – shared definitions
//! - [`crate::systems::render::render_pass`] – draws the resolved frames

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::animation::Animation;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::framereel::AnimationError;
use crate::resources::worldtime::WorldTime;

/// Seconds the animation takes to show every frame once.
///
/// Zero for a definition without frames (degenerate, not an error).
pub fn total_animation_time<T>(animation: &AnimationResource<T>) -> f32 {
    animation.frame_time() * animation.frame_count() as f32
}

/// Resolve the frame shown after `elapsed` seconds of playback.
///
/// Looping definitions wrap with a period of [`total_animation_time`];
/// non-looping definitions hold the last frame once elapsed time passes the
/// end. A definition without frames has no frame to resolve in either mode
/// and reports [`AnimationError::NoFrames`]. Negative `elapsed` reads as
/// zero.
pub fn frame_index_at<T>(
    animation: &AnimationResource<T>,
    elapsed: f32,
) -> Result<usize, AnimationError> {
    let count = animation.frame_count();
    if count == 0 {
        return Err(AnimationError::NoFrames);
    }
    // Saturating float-to-int cast: negative quotients land on frame 0.
    let steps = (elapsed / animation.frame_time()) as u64;
    if animation.is_looping() {
        Ok((steps % count as u64) as usize)
    } else {
        Ok(steps.min(count as u64 - 1) as usize)
    }
}

/// Advance every entity's playback cursor and refresh its frame index.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Resolves definitions from the [`AnimationStore`].
/// - Mutates only the [`Animation`] component.
/// - Entities pointing at an unregistered key are left untouched; empty
///   definitions accumulate time but keep their frame index. Both are
///   reported through the log.
pub fn animation<T: Send + Sync + 'static>(
    mut query: Query<&mut Animation>,
    store: Res<AnimationStore<T>>,
    time: Res<WorldTime>,
) {
    for mut cursor in query.iter_mut() {
        let definition = match store.get(&cursor.animation_key) {
            Ok(definition) => definition,
            Err(e) => {
                warn!("animation tick skipped: {e}");
                continue;
            }
        };
        cursor.elapsed_time += time.delta;
        match frame_index_at(definition, cursor.elapsed_time) {
            Ok(index) => cursor.frame_index = index,
            Err(e) => warn!("animation '{}' not advanced: {e}", cursor.animation_key),
        }
    }
}
