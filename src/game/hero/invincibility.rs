// Invincibility window
//
// Owned by the hero, not by a mode: a window granted during one mode keeps
// running after the next transition.

/// Countdown during which the hero cannot be hurt
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Invincibility {
    remaining: f32,
}

impl Invincibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant invincibility for `duration` seconds. An already running longer
    /// window is kept.
    pub fn grant(&mut self, duration: f32) {
        if duration.is_finite() && duration > self.remaining {
            self.remaining = duration;
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    /// Cut the window down to at most `duration` seconds
    pub fn shorten_to(&mut self, duration: f32) {
        if duration < self.remaining {
            self.remaining = duration.max(0.0);
        }
    }
}
