//! Frame delta timing.
//!
//! The GUI library divides by the frame delta, so it must never be zero.
//! Timer resolution and clock quirks do occasionally produce two frames with
//! the same timestamp; those deltas are clamped up to [`MIN_DELTA_TIME`].

use std::time::Instant;

/// Smallest delta ever reported, in seconds.
pub const MIN_DELTA_TIME: f32 = 0.000_01;

/// Delta reported for the very first frame, in seconds (one 60 Hz frame).
pub const FIRST_FRAME_DELTA_TIME: f32 = 1.0 / 60.0;

/// Clamp a raw delta in seconds to a strictly positive `f32`.
///
/// Zero, negative and NaN inputs all come back as [`MIN_DELTA_TIME`].
pub fn clamp_delta_time(seconds: f64) -> f32 {
    let delta = seconds as f32;
    if delta > 0.0 {
        delta
    } else {
        MIN_DELTA_TIME
    }
}

/// Monotonic per-frame clock.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    /// A clock that has not ticked yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the seconds since the previous one.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = match self.last {
            Some(last) => clamp_delta_time(now.saturating_duration_since(last).as_secs_f64()),
            None => FIRST_FRAME_DELTA_TIME,
        };
        self.last = Some(now);
        delta
    }

    /// Record a frame now. See [`tick_at`](Self::tick_at).
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Timestamp of the last tick.
    pub fn last_tick(&self) -> Option<Instant> {
        self.last
    }
}
