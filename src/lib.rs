//! Reel Engine: the frame-animation and input-sampling layer of a 2D game.
//!
//! Built on:
//! - **raylib** for images, textures, and the input/math vocabulary types
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Animation Flow
//!
//! 1. A sprite sheet image is sliced once into an owned
//!    [`FrameReel`](resources::framereel::FrameReel): `floor(width/height)`
//!    square cells, left to right
//! 2. The reel and its timing metadata form an
//!    [`AnimationResource`](resources::animationstore::AnimationResource),
//!    registered by key in the
//!    [`AnimationStore`](resources::animationstore::AnimationStore)
//! 3. Entities carry an [`Animation`](components::animation::Animation)
//!    cursor; the [`animation`](systems::animation::animation) system feeds
//!    it the world delta and resolves the frame index
//! 4. [`render_pass`](systems::render::render_pass) draws each entity's
//!    resolved frame
//!
//! One definition backs any number of concurrently playing entities because
//! playback state lives entirely on the cursors.
//!
//! # Input Flow
//!
//! [`InputState`](resources::input::InputState) keeps the previous and
//! current device snapshots; the
//! [`update_input_state`](systems::input::update_input_state) system rotates
//! them once per tick, and game code asks edge ("just pressed") and level
//! ("held") queries against the resource.

pub mod components;
pub mod resources;
pub mod systems;
