// Sword swinging mode: one full swing from the first frame to the last

use glam::Vec2;

use super::{reaction_sound, FreeMode, HeroEvent, HeroMode, ModeBase, ModeContext, ModeKind};
use crate::game::entity::{EntityRef, ObstacleKind};
use crate::game::equipment::TreasureItem;
use crate::game::hero::body::HeroBody;

/// The hero swings its sword once.
///
/// The swing always runs to the end of its animation; hitting enemies does
/// not shorten it. Player movement is ignored for the whole swing. The
/// invincibility granted by the swing ends with it; a window that was already
/// running when the swing started keeps running.
#[derive(Debug, Default)]
pub struct SwordSwingingMode {
    base: ModeBase,
    /// At least one enemy was attacked during this swing
    attacked: bool,
    /// The swing animation is over
    sword_finished: bool,
    /// What is left of the invincibility window that predates the swing
    inherited_invincibility: f32,
}

impl SwordSwingingMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_attacked(&self) -> bool {
        self.attacked
    }

    pub fn is_sword_finished(&self) -> bool {
        self.sword_finished
    }
}

impl HeroMode for SwordSwingingMode {
    fn kind(&self) -> ModeKind {
        ModeKind::SwordSwinging
    }

    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        &mut self.base
    }

    fn enter(&mut self, ctx: &mut ModeContext<'_>, previous: Option<&dyn HeroMode>) {
        self.attacked = false;
        self.sword_finished = false;

        // Walking into a swing keeps part of the walking velocity
        let walking = previous.is_some_and(|mode| mode.can_control_movement());
        ctx.body.velocity = if walking {
            ctx.body.velocity * ctx.body.stats.swing_momentum
        } else {
            Vec2::ZERO
        };

        ctx.body.sprites.play("sword");
        ctx.body.play_sound("sword1");
        self.inherited_invincibility = ctx.body.invincibility.remaining();
        let invincibility = ctx.body.stats.swing_invincibility;
        ctx.body.invincibility.grant(invincibility);
    }

    fn exit(&mut self, ctx: &mut ModeContext<'_>, _next: &dyn HeroMode) {
        ctx.body.invincibility.shorten_to(self.inherited_invincibility);
    }

    fn update(&mut self, ctx: &mut ModeContext<'_>) {
        self.inherited_invincibility = (self.inherited_invincibility - ctx.dt).max(0.0);
        if !self.sword_finished && ctx.body.sprites.is_finished() {
            self.sword_finished = true;
        }

        if self.sword_finished {
            ctx.body.stop();
            ctx.request_transition(Box::new(FreeMode::new()));
        }
    }

    fn handle_event(&mut self, ctx: &mut ModeContext<'_>, event: &HeroEvent) {
        match *event {
            HeroEvent::ObstacleReached => ctx.body.stop(),
            HeroEvent::AnimationFinished => self.sword_finished = true,
            HeroEvent::AttackedEnemy {
                reaction, killed, ..
            } => {
                self.attacked = true;
                if let Some(sound) = reaction_sound(reaction.outcome, killed) {
                    ctx.body.play_sound(sound);
                }
                if reaction.attacker_recoil != Vec2::ZERO {
                    ctx.body.velocity = reaction.attacker_recoil;
                }
            }
            _ => {}
        }
    }

    fn can_start_sword(&self, _body: &HeroBody) -> bool {
        false
    }

    /// Brandishing an item needs both hands
    fn can_pick_treasure(&self, _body: &HeroBody, item: &TreasureItem) -> bool {
        !item.brandish
    }

    fn can_use_shield(&self, _body: &HeroBody) -> bool {
        false
    }

    fn can_sword_hit_crystal(&self, _body: &HeroBody) -> bool {
        true
    }

    fn is_cutting_with_sword(&self, body: &HeroBody, entity: &EntityRef) -> bool {
        !self.sword_finished
            && body.sprites.current_animation() == "sword"
            && body.sprites.is_frame_in(body.stats.sword_active_frames)
            && body.sword_hitbox().overlaps(&entity.bounds)
    }

    fn is_obstacle(&self, _body: &HeroBody, kind: ObstacleKind) -> bool {
        // Teletransporters wait for the swing to end
        kind == ObstacleKind::Teletransporter || super::default_obstacle(kind)
    }
}
