//! Frame reels: ordered frame sequences, optionally sliced from a sprite sheet.
//!
//! A [`FrameReel`] owns the frame images of one animation in playback order.
//! It is either filled frame by frame or derived in a single call from a
//! sprite sheet laid out as a row of equal square cells. Slicing goes through
//! the [`SheetSource`] trait, so the image-copy capability is handed in by the
//! frame type instead of being reached for through a global graphics device.
//!
//! The reel is the sole owner of the images it derives; the source sheet is
//! only borrowed for the duration of the slicing call.

use raylib::ffi;
use raylib::prelude::{Image, Rectangle, Texture2D};
use thiserror::Error;

/// Failures surfaced by reels, animation definitions and playback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// A sprite sheet cannot be sliced because its height is not positive.
    #[error("cannot slice sprite sheet with degenerate dimensions {width}x{height}")]
    DegenerateSheet { width: i32, height: i32 },
    /// A frame lookup fell outside `[0, count)`.
    #[error("frame index {index} out of range for a reel of {count} frames")]
    FrameOutOfRange { index: usize, count: usize },
    /// Playback was asked to pick a frame from a definition without frames.
    #[error("animation has no frames")]
    NoFrames,
    /// A definition key was not present in the store.
    #[error("no animation registered under key '{key}'")]
    NotRegistered { key: String },
}

/// A frame image the reel can hold: anything with pixel dimensions.
pub trait FrameTexture {
    fn frame_width(&self) -> i32;
    fn frame_height(&self) -> i32;
}

/// A pixel source a reel can be sliced from.
///
/// `copy_region` allocates a new image sized exactly to `region` and fills it
/// with the region's pixels; the source is left untouched.
pub trait SheetSource: FrameTexture + Sized {
    fn copy_region(&self, region: Rectangle) -> Self;
}

impl FrameTexture for Image {
    fn frame_width(&self) -> i32 {
        self.width
    }

    fn frame_height(&self) -> i32 {
        self.height
    }
}

impl FrameTexture for Texture2D {
    fn frame_width(&self) -> i32 {
        self.width
    }

    fn frame_height(&self) -> i32 {
        self.height
    }
}

impl SheetSource for Image {
    fn copy_region(&self, region: Rectangle) -> Self {
        unsafe { Image::from_raw(ffi::ImageFromImage(**self, region.into())) }
    }
}

/// Ordered sequence of frame images; insertion order is playback order.
///
/// Frames are never removed or reordered after insertion. Frames produced by
/// [`FrameReel::from_sheet`] are square and equal in size; frames appended
/// with [`FrameReel::add_frame`] are not size-checked but conventionally
/// should match.
#[derive(Debug)]
pub struct FrameReel<T> {
    frames: Vec<T>,
}

impl<T> FrameReel<T> {
    /// Reel with zero frames.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Append one frame to the end of the sequence.
    pub fn add_frame(&mut self, frame: T) {
        self.frames.push(frame);
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The frame at `index`, or [`AnimationError::FrameOutOfRange`].
    pub fn frame(&self, index: usize) -> Result<&T, AnimationError> {
        self.frames.get(index).ok_or(AnimationError::FrameOutOfRange {
            index,
            count: self.frames.len(),
        })
    }

    /// Convert every frame through `f`, preserving order.
    ///
    /// This is the upload seam: a reel of CPU images becomes a reel of GPU
    /// textures by mapping each frame through `load_texture_from_image`.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<FrameReel<U>, E> {
        Ok(FrameReel {
            frames: self.frames.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}

impl<T: FrameTexture> FrameReel<T> {
    /// Width of frame 0, or 0 for an empty reel.
    pub fn frame_width(&self) -> i32 {
        self.frames.first().map_or(0, FrameTexture::frame_width)
    }

    /// Height of frame 0, or 0 for an empty reel.
    pub fn frame_height(&self) -> i32 {
        self.frames.first().map_or(0, FrameTexture::frame_height)
    }
}

impl<T: SheetSource> FrameReel<T> {
    /// Slice `sheet` into `floor(width / height)` square cells of
    /// `height x height` pixels, scanned left to right from x = 0.
    ///
    /// A trailing column narrower than one cell is discarded. All frames are
    /// created inside this call; no partially sliced reel is observable.
    pub fn from_sheet(sheet: &T) -> Result<Self, AnimationError> {
        let width = sheet.frame_width();
        let height = sheet.frame_height();
        if height <= 0 {
            return Err(AnimationError::DegenerateSheet { width, height });
        }
        let count = (width / height).max(0);
        let mut frames = Vec::with_capacity(count as usize);
        for cell in 0..count {
            let region = Rectangle {
                x: (cell * height) as f32,
                y: 0.0,
                width: height as f32,
                height: height as f32,
            };
            frames.push(sheet.copy_region(region));
        }
        Ok(Self { frames })
    }
}

impl<T> Default for FrameReel<T> {
    fn default() -> Self {
        Self::new()
    }
}
