// Jumping mode

use super::{FreeMode, HeroEvent, HeroMode, ModeBase, ModeContext, ModeKind, SwimmingMode};
use crate::core::math::{direction8_to_vec, Direction4};
use crate::game::entity::{EntityRef, Ground, ObstacleKind};
use crate::game::equipment::Ability;
use crate::game::hero::body::HeroBody;

/// The hero jumps a fixed distance in one of eight directions.
///
/// The jump lasts `distance / jump_speed` seconds even if an obstacle stops
/// the horizontal movement.
#[derive(Debug)]
pub struct JumpingMode {
    base: ModeBase,
    direction8: u8,
    distance: f32,
    with_sound: bool,
    travelled: f32,
}

impl JumpingMode {
    pub fn new(direction8: u8, distance: f32, with_sound: bool) -> Self {
        Self {
            base: ModeBase::new(),
            direction8: direction8 % 8,
            distance: distance.max(0.0),
            with_sound,
            travelled: 0.0,
        }
    }

    pub fn direction8(&self) -> u8 {
        self.direction8
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }
}

impl HeroMode for JumpingMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Jumping
    }

    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        &mut self.base
    }

    fn enter(&mut self, ctx: &mut ModeContext<'_>, _previous: Option<&dyn HeroMode>) {
        let direction = direction8_to_vec(self.direction8);
        if let Some(facing) = Direction4::from_vec(direction) {
            ctx.body.set_facing(facing);
        }
        ctx.body.velocity = direction * ctx.body.stats.jump_speed;
        ctx.body.sprites.play("jumping");
        if self.with_sound {
            ctx.body.play_sound("jump");
        }
    }

    fn update(&mut self, ctx: &mut ModeContext<'_>) {
        self.travelled += ctx.body.stats.jump_speed * ctx.dt;
        if self.travelled < self.distance {
            return;
        }

        ctx.body.stop();
        let swim = ctx.body.ground == Ground::DeepWater
            && ctx.body.equipment().has_ability(Ability::Swim);
        if swim {
            ctx.request_transition(Box::new(SwimmingMode::new()));
        } else {
            ctx.request_transition(Box::new(FreeMode::new()));
        }
    }

    fn handle_event(&mut self, ctx: &mut ModeContext<'_>, event: &HeroEvent) {
        if let HeroEvent::ObstacleReached = event {
            ctx.body.stop();
        }
    }

    fn can_be_hurt(&self, _body: &HeroBody, _attacker: Option<&EntityRef>) -> bool {
        false
    }

    fn is_obstacle(&self, _body: &HeroBody, kind: ObstacleKind) -> bool {
        match kind {
            ObstacleKind::Stairs | ObstacleKind::Sensor => true,
            // Jumps clear low walls and every bad ground
            ObstacleKind::LowWall => false,
            kind if kind.is_bad_ground() => false,
            kind => super::default_obstacle(kind),
        }
    }

    fn is_touching_ground(&self) -> bool {
        false
    }

    fn can_start_gameover(&self) -> bool {
        false
    }
}
