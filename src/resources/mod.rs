//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: animation definitions, input
//! sampling state, timing, and configuration. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – reusable animation definitions shared across entities
//! - `framereel` – frame sequences sliced from sprite sheets, and the
//!   slicing/error vocabulary
//! - `input` – double-buffered keyboard/mouse/gamepad sampler
//! - `inputconfig` – INI-backed tuning for the input sampler
//! - `worldtime` – simulation time and delta

pub mod animationstore;
pub mod framereel;
pub mod input;
pub mod inputconfig;
pub mod worldtime;
