// Hero sprite animation
//
// Only timing is tracked here: which clip plays, which frame is shown and
// whether a one-shot clip is over. Drawing belongs to the renderer.

use std::collections::HashMap;

use log::warn;

use super::HeroError;
use crate::core::math::Direction4;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "stopped", "walking", "sword")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }

    /// A clip without frames or with a broken frame rate cannot be played
    fn is_playable(&self) -> bool {
        self.frame_count > 0 && self.frame_duration.is_finite() && self.frame_duration > 0.0
    }
}

/// Animation state of the hero's sprites
#[derive(Debug)]
pub struct AnimationPlayer {
    animations: HashMap<String, AnimationClip>,
    current_animation: String,
    current_frame: usize,
    frame_timer: f32,
    playing: bool,
    /// Direction the sprites are facing
    direction: Direction4,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: false,
            direction: Direction4::Right,
        }
    }

    /// Create an animation player with the hero's standard animation set
    pub fn with_hero_animations() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("stopped", 1, 1.0));
        player.add_animation(AnimationClip::looping("walking", 8, 10.0));
        // 9 frames at 30 FPS: the sword cuts from frame 1 to 6
        player.add_animation(AnimationClip::one_shot("sword", 9, 30.0));
        player.add_animation(AnimationClip::looping("running", 8, 20.0));
        player.add_animation(AnimationClip::looping("jumping", 4, 10.0));
        player.add_animation(AnimationClip::looping("swimming_slow", 6, 6.0));
        player.add_animation(AnimationClip::looping("swimming_fast", 6, 12.0));
        player.add_animation(AnimationClip::looping("hurt", 2, 10.0));
        player.add_animation(AnimationClip::one_shot("dying", 10, 8.0));

        player.play("stopped");
        player
    }

    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Remove a clip, e.g. when a sprite sheet failed to load
    pub fn remove_animation(&mut self, name: &str) -> Option<AnimationClip> {
        self.animations.remove(name)
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Start an animation from its first frame.
    ///
    /// The requested name is kept even when it fails so that `is_finished`
    /// reports the missing clip as already over.
    pub fn try_play(&mut self, name: &str) -> Result<(), HeroError> {
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;

        match self.animations.get(name) {
            Some(clip) if clip.is_playable() => {
                self.playing = true;
                Ok(())
            }
            _ => {
                self.playing = false;
                Err(HeroError::MissingAnimation(name.to_string()))
            }
        }
    }

    /// Start an animation, logging a warning if its data is missing
    pub fn play(&mut self, name: &str) {
        if let Err(err) = self.try_play(name) {
            warn!("{err}, treating it as finished");
        }
    }

    /// Play an animation unless it is already the current one
    pub fn play_if_changed(&mut self, name: &str) {
        if self.current_animation != name {
            self.play(name);
        }
    }

    pub fn set_direction(&mut self, direction: Direction4) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Direction4 {
        self.direction
    }

    /// Advance the animation, returns true when a one-shot clip ends during this call
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            self.playing = false;
            return false;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    return true;
                }
            }
        }

        false
    }

    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the current one-shot clip is over.
    /// A missing or unplayable clip always counts as finished.
    pub fn is_finished(&self) -> bool {
        match self.animations.get(&self.current_animation) {
            Some(clip) if clip.is_playable() => !clip.looping && !self.playing,
            _ => true,
        }
    }

    /// Whether the current frame is within an inclusive frame range
    pub fn is_frame_in(&self, (first, last): (usize, usize)) -> bool {
        (first..=last).contains(&self.current_frame)
    }

    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.animations.get(&self.current_animation)
    }
}
