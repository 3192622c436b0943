//! Engine systems.
//!
//! This module groups the ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – pure playback driver plus the per-tick cursor advance
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`render`] – draw the resolved frame of each animated entity
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod input;
pub mod render;
pub mod time;
