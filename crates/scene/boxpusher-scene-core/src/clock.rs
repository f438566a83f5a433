//! The single global animation clock.
//!
//! Every transition in a scene is scheduled in absolute offsets against this
//! one timeline; there are no per-primitive clocks. Pausing freezes the time
//! value, seeking sets it arbitrarily, and playback resumes from wherever
//! the clock sits.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Clock {
    time: f32,
    speed: f32,
    playing: bool,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            playing: true,
        }
    }
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance by a wall-clock delta; a no-op while paused.
    pub fn advance(&mut self, dt: f32) {
        if self.playing {
            self.time += dt * self.speed;
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Set the clock to an arbitrary time (scrubbing).
    pub fn seek(&mut self, time: f32) {
        self.time = time.max(0.0);
    }

    pub fn rewind(&mut self) {
        self.time = 0.0;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}
