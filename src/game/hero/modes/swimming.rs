// Swimming mode

use super::{FreeMode, HeroEvent, HeroMode, ModeBase, ModeContext, ModeKind};
use crate::game::entity::{Ground, ObstacleKind};
use crate::game::equipment::TreasureItem;
use crate::game::hero::body::HeroBody;
use crate::game::hero::commands::Command;

/// The hero swims in deep water. Action or attack gives a short burst of
/// speed.
#[derive(Debug, Default)]
pub struct SwimmingMode {
    base: ModeBase,
    fast_swimming: bool,
    fast_remaining: f32,
}

impl SwimmingMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_swimming_fast(&self) -> bool {
        self.fast_swimming
    }

    fn try_swim_faster(&mut self, ctx: &mut ModeContext<'_>) {
        if self.fast_swimming {
            return;
        }
        self.fast_swimming = true;
        self.fast_remaining = ctx.body.stats.fast_swim_duration;
        ctx.body.sprites.play("swimming_fast");
        ctx.body.play_sound("swim");
    }
}

impl HeroMode for SwimmingMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Swimming
    }

    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        &mut self.base
    }

    fn enter(&mut self, ctx: &mut ModeContext<'_>, previous: Option<&dyn HeroMode>) {
        self.fast_swimming = false;
        ctx.body.sprites.play("swimming_slow");
        if previous.is_some_and(|mode| mode.kind() == ModeKind::Jumping) {
            ctx.body.play_sound("splash");
        }
    }

    fn update(&mut self, ctx: &mut ModeContext<'_>) {
        if self.fast_swimming {
            self.fast_remaining -= ctx.dt;
            if self.fast_remaining <= 0.0 {
                self.fast_swimming = false;
                ctx.body.sprites.play("swimming_slow");
            }
        }

        let speed = if self.fast_swimming {
            ctx.body.stats.fast_swimming_speed
        } else {
            ctx.body.stats.slow_swimming_speed
        };
        ctx.body.apply_player_movement(speed);
    }

    fn handle_event(&mut self, ctx: &mut ModeContext<'_>, event: &HeroEvent) {
        match *event {
            HeroEvent::CommandPressed(Command::Action | Command::Attack) => {
                self.try_swim_faster(ctx);
            }
            HeroEvent::GroundChanged(ground) if ground != Ground::DeepWater => {
                ctx.request_transition(Box::new(FreeMode::new()));
            }
            HeroEvent::ObstacleReached => ctx.body.stop(),
            _ => {}
        }
    }

    fn can_pick_treasure(&self, _body: &HeroBody, _item: &TreasureItem) -> bool {
        true
    }

    fn is_obstacle(&self, _body: &HeroBody, kind: ObstacleKind) -> bool {
        kind == ObstacleKind::Stairs || super::default_obstacle(kind)
    }

    fn can_control_movement(&self) -> bool {
        true
    }
}
