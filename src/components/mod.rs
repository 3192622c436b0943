//! ECS components for entities.
//!
//! This module groups the component types that can be attached to animated
//! entities in the game world.
//!
//! Submodules overview:
//! - [`animation`] – per-entity playback cursor over a shared definition
//! - [`flip`] – horizontal/vertical mirroring flags for drawing
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`scale`] – 2D scale factor applied when drawing

pub mod animation;
pub mod flip;
pub mod mapposition;
pub mod scale;
