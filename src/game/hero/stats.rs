// Hero tuning constants
//
// Speeds are in map pixels per second, durations in seconds.

use super::HeroError;

/// Tuning values shared by every behavioral mode
#[derive(Debug, Clone, PartialEq)]
pub struct HeroStats {
    // Walking
    /// Speed when walking freely
    pub walking_speed: f32,

    // Running
    /// Speed once the run has started
    pub running_speed: f32,
    /// Time spent charging before the run starts
    pub run_charge_time: f32,
    /// Speed of the bounce after running into an obstacle
    pub bounce_speed: f32,
    /// Duration of that bounce
    pub bounce_duration: f32,

    // Jumping
    pub jump_speed: f32,

    // Swimming
    pub slow_swimming_speed: f32,
    pub fast_swimming_speed: f32,
    /// How long a fast swimming stroke lasts
    pub fast_swim_duration: f32,

    // Combat
    /// Speed at which the hero is knocked back when hurt
    pub hurt_knockback_speed: f32,
    /// Duration of the hurt mode
    pub hurt_duration: f32,
    /// Invincibility granted when the hurt mode ends
    pub post_hurt_invincibility: f32,
    /// Invincibility granted when a sword swing starts (0 = none)
    pub swing_invincibility: f32,
    /// Fraction of the walking velocity kept when a swing starts
    pub swing_momentum: f32,

    // Sword hitbox
    /// Distance from the hero's center to the sword hitbox center
    pub sword_reach: f32,
    /// Size of the sword hitbox (width, height when facing right)
    pub sword_size: (f32, f32),
    /// Frames of the swing animation during which the sword cuts (inclusive)
    pub sword_active_frames: (usize, usize),
}

/// Default hero tuning
pub const BASE_STATS: HeroStats = HeroStats {
    walking_speed: 88.0,

    running_speed: 300.0,
    run_charge_time: 0.5,
    bounce_speed: 120.0,
    bounce_duration: 0.3,

    jump_speed: 160.0,

    slow_swimming_speed: 48.0,
    fast_swimming_speed: 80.0,
    fast_swim_duration: 0.6,

    hurt_knockback_speed: 120.0,
    hurt_duration: 0.2,
    post_hurt_invincibility: 2.0,
    swing_invincibility: 0.0,
    swing_momentum: 0.0,

    sword_reach: 12.0,
    sword_size: (16.0, 24.0),
    sword_active_frames: (1, 6),
};

impl Default for HeroStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl HeroStats {
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Check that the values make sense together
    pub fn validate(&self) -> Result<(), HeroError> {
        let speeds = [
            ("walking_speed", self.walking_speed),
            ("running_speed", self.running_speed),
            ("bounce_speed", self.bounce_speed),
            ("jump_speed", self.jump_speed),
            ("slow_swimming_speed", self.slow_swimming_speed),
            ("fast_swimming_speed", self.fast_swimming_speed),
            ("hurt_knockback_speed", self.hurt_knockback_speed),
        ];
        for (name, value) in speeds {
            if !(value.is_finite() && value > 0.0) {
                return Err(HeroError::InvalidStats(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let durations = [
            ("run_charge_time", self.run_charge_time),
            ("bounce_duration", self.bounce_duration),
            ("fast_swim_duration", self.fast_swim_duration),
            ("hurt_duration", self.hurt_duration),
            ("post_hurt_invincibility", self.post_hurt_invincibility),
            ("swing_invincibility", self.swing_invincibility),
        ];
        for (name, value) in durations {
            if !(value.is_finite() && value >= 0.0) {
                return Err(HeroError::InvalidStats(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.swing_momentum) {
            return Err(HeroError::InvalidStats(format!(
                "swing_momentum must be within 0..=1, got {}",
                self.swing_momentum
            )));
        }

        let (first, last) = self.sword_active_frames;
        if first > last {
            return Err(HeroError::InvalidStats(format!(
                "sword_active_frames start {first} is after end {last}"
            )));
        }

        Ok(())
    }
}
