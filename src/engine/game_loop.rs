/// Fixed timestep driver
///
/// Turns wall-clock frame times into a whole number of simulation steps of
/// constant length, so the hero's timers and animations advance the same way
/// whatever the frame rate.
use std::time::{Duration, Instant};

/// Default simulation rate (60 steps per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of steps per frame, extra time is dropped
const MAX_STEPS_PER_FRAME: u32 = 5;

pub struct GameLoop {
    /// Time not yet consumed by a step
    accumulator: Duration,

    /// Length of one step
    timestep: Duration,

    /// Time of last frame, for `begin_frame`
    last_frame_time: Instant,

    /// Simulated time since creation
    simulated: Duration,

    paused: bool,

    frame_count: u64,

    /// Total steps executed
    update_count: u64,

    /// Frames that hit the step cap
    dropped_frames: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::with_timestep(FIXED_TIMESTEP_DURATION)
    }

    /// Game loop with a custom step length
    pub fn with_timestep(timestep: Duration) -> Self {
        let timestep = if timestep.is_zero() {
            log::warn!("Zero timestep requested, using the default one");
            FIXED_TIMESTEP_DURATION
        } else {
            timestep
        };

        Self {
            accumulator: Duration::ZERO,
            timestep,
            last_frame_time: Instant::now(),
            simulated: Duration::ZERO,
            paused: false,
            frame_count: 0,
            update_count: 0,
            dropped_frames: 0,
        }
    }

    /// Begin a new frame measured on the wall clock, returns the number of
    /// steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Begin a new frame of a known length, returns the number of steps to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.timestep && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.timestep;
            steps += 1;
        }

        // Drop what the cap left behind instead of catching up later
        if self.accumulator >= self.timestep {
            self.dropped_frames += 1;
            log::debug!(
                "Frame of {:?} exceeded {} steps, dropping {:?}",
                frame_time,
                MAX_STEPS_PER_FRAME,
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.simulated += self.timestep * steps;
        self.update_count += steps as u64;
        steps
    }

    /// Length of one step in seconds
    pub fn fixed_timestep(&self) -> f32 {
        self.timestep.as_secs_f32()
    }

    /// Fraction of a step left in the accumulator
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.timestep.as_secs_f32()
    }

    /// Simulated time, excluding pauses and dropped time
    pub fn simulated(&self) -> Duration {
        self.simulated
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // No burst of steps after a pause
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
