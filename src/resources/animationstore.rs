//! Animation definitions and the shared registry they live in.
//!
//! An [`AnimationResource`] binds a frame reel to its timing metadata: how
//! long each frame is shown and whether playback wraps. Definitions carry no
//! playback state, so one definition can back any number of simultaneously
//! playing entities; each entity keeps its own elapsed-time cursor in an
//! [`Animation`](crate::components::animation::Animation) component.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

use crate::resources::framereel::{AnimationError, FrameReel, FrameTexture, SheetSource};

/// Immutable-after-construction description of one animation: an owned frame
/// reel, seconds per frame, and the loop flag.
///
/// `frame_time` and `looping` are stored verbatim; validating that the frame
/// time is positive is the caller's responsibility. The only mutator is
/// [`AnimationResource::add_frame`], which must not race reads (single
/// writer, many readers, by caller convention).
#[derive(Debug)]
pub struct AnimationResource<T> {
    reel: FrameReel<T>,
    frame_time: f32,
    looping: bool,
}

impl<T> AnimationResource<T> {
    /// Definition with an empty reel; frames are appended afterwards.
    pub fn new(frame_time: f32, looping: bool) -> Self {
        Self {
            reel: FrameReel::new(),
            frame_time,
            looping,
        }
    }

    /// Definition over a pre-built reel, e.g. one converted to GPU textures
    /// through [`FrameReel::try_map`].
    pub fn from_reel(reel: FrameReel<T>, frame_time: f32, looping: bool) -> Self {
        Self {
            reel,
            frame_time,
            looping,
        }
    }

    /// Append one frame to the reel.
    pub fn add_frame(&mut self, frame: T) {
        self.reel.add_frame(frame);
    }

    /// Seconds each frame is displayed before advancing.
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    /// Whether playback wraps to frame 0 after the last frame.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn frame_count(&self) -> usize {
        self.reel.frame_count()
    }

    /// The frame at `index`, or [`AnimationError::FrameOutOfRange`].
    pub fn frame(&self, index: usize) -> Result<&T, AnimationError> {
        self.reel.frame(index)
    }
}

impl<T: FrameTexture> AnimationResource<T> {
    /// Width of frame 0, or 0 for an empty definition.
    pub fn frame_width(&self) -> i32 {
        self.reel.frame_width()
    }

    /// Height of frame 0, or 0 for an empty definition.
    pub fn frame_height(&self) -> i32 {
        self.reel.frame_height()
    }
}

impl<T: SheetSource> AnimationResource<T> {
    /// Definition whose reel is sliced from `sheet` during this call.
    pub fn from_sheet(sheet: &T, frame_time: f32, looping: bool) -> Result<Self, AnimationError> {
        Ok(Self {
            reel: FrameReel::from_sheet(sheet)?,
            frame_time,
            looping,
        })
    }
}

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource)]
pub struct AnimationStore<T: Send + Sync + 'static> {
    pub animations: FxHashMap<String, AnimationResource<T>>,
}

/// The store the render pass draws from: one GPU texture per frame.
pub type TextureAnimations = AnimationStore<Texture2D>;

impl<T: Send + Sync + 'static> AnimationStore<T> {
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource<T>) {
        self.animations.insert(key.into(), animation);
    }

    /// The definition under `key`, or [`AnimationError::NotRegistered`].
    pub fn get(&self, key: &str) -> Result<&AnimationResource<T>, AnimationError> {
        self.animations
            .get(key)
            .ok_or_else(|| AnimationError::NotRegistered {
                key: key.to_string(),
            })
    }
}

impl<T: Send + Sync + 'static> Default for AnimationStore<T> {
    fn default() -> Self {
        Self {
            animations: FxHashMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_timing_metadata_verbatim() {
        let def: AnimationResource<()> = AnimationResource::new(0.1, true);
        assert_eq!(def.frame_time(), 0.1);
        assert!(def.is_looping());

        // No validation happens at construction, even for nonsense values.
        let def: AnimationResource<()> = AnimationResource::new(-2.0, false);
        assert_eq!(def.frame_time(), -2.0);
        assert!(!def.is_looping());
    }

    #[test]
    fn empty_definition_queries_are_defined() {
        let def: AnimationResource<()> = AnimationResource::new(0.1, false);
        assert_eq!(def.frame_count(), 0);
        assert_eq!(
            def.frame(0).unwrap_err(),
            AnimationError::FrameOutOfRange { index: 0, count: 0 }
        );
    }

    #[test]
    fn add_frame_grows_the_reel() {
        let mut def: AnimationResource<u8> = AnimationResource::new(0.1, true);
        def.add_frame(7);
        def.add_frame(9);
        assert_eq!(def.frame_count(), 2);
        assert_eq!(*def.frame(1).unwrap(), 9);
    }

    #[test]
    fn store_lookup_reports_unregistered_keys() {
        let mut store: AnimationStore<u8> = AnimationStore::default();
        store.insert("walk", AnimationResource::new(0.1, true));

        assert!(store.get("walk").is_ok());
        assert_eq!(
            store.get("run").unwrap_err(),
            AnimationError::NotRegistered {
                key: "run".to_string()
            }
        );
    }
}
