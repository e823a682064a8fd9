// Durable hero attributes
//
// Everything here outlives mode transitions. The active mode borrows the body
// for the duration of one call and never keeps a reference to it.

use std::rc::Rc;

use glam::Vec2;

use super::animation::AnimationPlayer;
use super::commands::CommandState;
use super::invincibility::Invincibility;
use super::stats::HeroStats;
use crate::core::math::{Direction4, Rect};
use crate::game::entity::Ground;
use crate::game::equipment::Equipment;

/// State of the hero that persists across behavioral modes
#[derive(Debug)]
pub struct HeroBody {
    /// Center of the hero in map coordinates
    pub position: Vec2,
    /// Current velocity in pixels per second
    pub velocity: Vec2,
    /// Tuning values
    pub stats: HeroStats,
    /// Sprite animation state
    pub sprites: AnimationPlayer,
    /// Invincibility window shared by all modes
    pub invincibility: Invincibility,
    /// Commands currently held by the player
    pub commands: CommandState,
    /// Ground below the hero as last reported by the map
    pub ground: Ground,
    facing: Direction4,
    equipment: Rc<dyn Equipment>,
    sounds: Vec<&'static str>,
}

impl HeroBody {
    pub fn new(stats: HeroStats, equipment: Rc<dyn Equipment>) -> Self {
        let mut sprites = AnimationPlayer::with_hero_animations();
        sprites.set_direction(Direction4::Down);

        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            stats,
            sprites,
            invincibility: Invincibility::new(),
            commands: CommandState::new(),
            ground: Ground::default(),
            facing: Direction4::Down,
            equipment,
            sounds: Vec::new(),
        }
    }

    pub fn equipment(&self) -> &dyn Equipment {
        self.equipment.as_ref()
    }

    pub fn facing(&self) -> Direction4 {
        self.facing
    }

    /// Turn the hero and its sprites
    pub fn set_facing(&mut self, direction: Direction4) {
        self.facing = direction;
        self.sprites.set_direction(direction);
    }

    /// Queue a sound for the audio system
    pub fn play_sound(&mut self, sound: &'static str) {
        self.sounds.push(sound);
    }

    /// Sounds requested since the last call
    pub fn drain_sounds(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.sounds)
    }

    /// Area covered by the sword blade in front of the hero
    pub fn sword_hitbox(&self) -> Rect {
        let (along, across) = self.stats.sword_size;
        let size = match self.facing {
            Direction4::Right | Direction4::Left => Vec2::new(along, across),
            Direction4::Up | Direction4::Down => Vec2::new(across, along),
        };
        let center = self.position + self.facing.to_vec() * self.stats.sword_reach;
        Rect::centered(center, size)
    }

    /// Set velocity from the player's direction commands and face the way
    /// the hero walks
    pub fn apply_player_movement(&mut self, speed: f32) {
        let wanted = self.commands.wanted_movement();
        self.velocity = wanted * speed;
        if let Some(direction) = Direction4::from_vec(wanted) {
            self.set_facing(direction);
        }
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}
