//! Keystroke timing.
//!
//! Delays are chosen by a [`DelayPolicy`] and carried out by a [`Pause`], so
//! tests can swap either one for a deterministic stand-in.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::TimingConfig;

/// Decides how long to wait after typing a character.
pub trait DelayPolicy {
    fn delay_for(&mut self, c: char) -> Duration;
}

/// Blocks for a given duration.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

/// Human-looking typing speed.
///
/// Spaces always take the fixed space delay (watching whitespace being typed
/// is boring). Everything else takes a whole number of milliseconds drawn
/// uniformly from `[0, max_char_delay)`.
#[derive(Debug, Clone)]
pub struct HumanDelay {
    max_char_ms: u64,
    space: Duration,
    rng: StdRng,
}

impl HumanDelay {
    /// Build from the timing configuration, seeding from `timing.seed` if set.
    pub fn new(timing: &TimingConfig) -> Self {
        match timing.seed {
            Some(seed) => Self::seeded(timing, seed),
            None => Self::with_rng(timing, StdRng::from_entropy()),
        }
    }

    /// Build with an explicit seed.
    pub fn seeded(timing: &TimingConfig, seed: u64) -> Self {
        Self::with_rng(timing, StdRng::seed_from_u64(seed))
    }

    fn with_rng(timing: &TimingConfig, rng: StdRng) -> Self {
        Self {
            max_char_ms: timing.max_char_delay_ms,
            space: timing.space_delay(),
            rng,
        }
    }
}

impl DelayPolicy for HumanDelay {
    fn delay_for(&mut self, c: char) -> Duration {
        if c == ' ' {
            self.space
        } else if self.max_char_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(self.rng.gen_range(0..self.max_char_ms))
        }
    }
}

/// Real sleeping on the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
