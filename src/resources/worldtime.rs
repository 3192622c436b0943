//! Simulation clock resource.
//!
//! Tracks scaled elapsed and per-tick delta seconds plus a frame counter.
//! The animation system accumulates `delta` into each entity's playback
//! cursor, so pausing or slowing the whole simulation is a matter of
//! adjusting `time_scale`.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds of the last tick.
    pub delta: f32,
    /// Multiplier applied to incoming wall-clock deltas.
    pub time_scale: f32,
    /// Ticks processed since startup.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Apply one tick of unscaled wall-clock time.
    pub fn advance(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.elapsed += scaled;
        self.delta = scaled;
        self.frame_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_applies_time_scale() {
        let mut time = WorldTime {
            time_scale: 0.5,
            ..WorldTime::default()
        };
        time.advance(0.2);
        time.advance(0.2);
        assert!((time.delta - 0.1).abs() < 1e-6);
        assert!((time.elapsed - 0.2).abs() < 1e-6);
        assert_eq!(time.frame_count, 2);
    }
}
