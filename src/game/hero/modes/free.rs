// Free mode: the hero walks around and may start most actions

use super::{
    HeroEvent, HeroMode, ModeBase, ModeContext, ModeKind, RunningMode, SwimmingMode,
    SwordSwingingMode,
};
use crate::game::entity::Ground;
use crate::game::equipment::{Ability, TreasureItem};
use crate::game::hero::body::HeroBody;
use crate::game::hero::commands::Command;
use log::debug;

/// Default mode, resumed after most actions
#[derive(Debug, Default)]
pub struct FreeMode {
    base: ModeBase,
}

impl FreeMode {
    pub fn new() -> Self {
        Self::default()
    }

    fn update_animation(ctx: &mut ModeContext<'_>) {
        let animation = if ctx.body.velocity.length_squared() > 0.0 {
            "walking"
        } else {
            "stopped"
        };
        ctx.body.sprites.play_if_changed(animation);
    }
}

impl HeroMode for FreeMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Free
    }

    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        &mut self.base
    }

    fn enter(&mut self, ctx: &mut ModeContext<'_>, _previous: Option<&dyn HeroMode>) {
        ctx.body.stop();
        ctx.body.sprites.play("stopped");
    }

    fn update(&mut self, ctx: &mut ModeContext<'_>) {
        let speed = ctx.body.stats.walking_speed;
        ctx.body.apply_player_movement(speed);
        Self::update_animation(ctx);

        // Entering deep water is also noticed when the ground event was
        // raised while another mode was active
        if ctx.body.ground == Ground::DeepWater && ctx.body.equipment().has_ability(Ability::Swim)
        {
            ctx.request_transition(Box::new(SwimmingMode::new()));
        }
    }

    fn handle_event(&mut self, ctx: &mut ModeContext<'_>, event: &HeroEvent) {
        match *event {
            HeroEvent::ObstacleReached => {
                ctx.body.stop();
                Self::update_animation(ctx);
            }
            HeroEvent::CommandPressed(Command::Attack) => {
                if self.can_start_sword(ctx.body) {
                    ctx.request_transition(Box::new(SwordSwingingMode::new()));
                }
            }
            HeroEvent::CommandPressed(Command::Run) => {
                if ctx.body.equipment().has_ability(Ability::Run) {
                    ctx.request_transition(Box::new(RunningMode::new(Command::Run)));
                }
            }
            HeroEvent::GroundChanged(Ground::DeepWater) => {
                if ctx.body.equipment().has_ability(Ability::Swim) {
                    ctx.request_transition(Box::new(SwimmingMode::new()));
                } else {
                    debug!("Hero reached deep water without the swim ability");
                }
            }
            _ => {}
        }
    }

    fn can_start_sword(&self, body: &HeroBody) -> bool {
        body.equipment().has_ability(Ability::Sword)
    }

    fn can_pick_treasure(&self, _body: &HeroBody, _item: &TreasureItem) -> bool {
        true
    }

    fn can_use_shield(&self, body: &HeroBody) -> bool {
        body.equipment().has_ability(Ability::Shield)
    }

    fn is_free(&self) -> bool {
        true
    }

    fn can_control_movement(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::hero::modes::testing::{body, body_with, Rig};
    use glam::Vec2;

    #[test]
    fn test_walks_with_direction_commands() {
        let mut rig = Rig::new(body());
        let mut mode = FreeMode::new();
        rig.enter(&mut mode, None);

        rig.body.commands.press(Command::Right);
        rig.update(&mut mode, 1.0 / 60.0);
        assert_eq!(rig.body.velocity, Vec2::new(88.0, 0.0));
        assert_eq!(rig.body.sprites.current_animation(), "walking");

        rig.body.commands.release(Command::Right);
        rig.update(&mut mode, 1.0 / 60.0);
        assert_eq!(rig.body.velocity, Vec2::ZERO);
        assert_eq!(rig.body.sprites.current_animation(), "stopped");
    }

    #[test]
    fn test_attack_requests_swing() {
        let mut rig = Rig::new(body());
        let mut mode = FreeMode::new();
        rig.enter(&mut mode, None);

        rig.event(&mut mode, HeroEvent::CommandPressed(Command::Attack));
        assert_eq!(rig.requested(), Some(ModeKind::SwordSwinging));
    }

    #[test]
    fn test_attack_without_sword_does_nothing() {
        let mut rig = Rig::new(body_with(&[]));
        let mut mode = FreeMode::new();
        rig.enter(&mut mode, None);

        assert!(!mode.can_start_sword(&rig.body));
        assert!(!mode.can_use_shield(&rig.body));
        rig.event(&mut mode, HeroEvent::CommandPressed(Command::Attack));
        assert_eq!(rig.requested(), None);
    }

    #[test]
    fn test_run_command() {
        let mut rig = Rig::new(body());
        let mut mode = FreeMode::new();
        rig.enter(&mut mode, None);
        rig.event(&mut mode, HeroEvent::CommandPressed(Command::Run));
        assert_eq!(rig.requested(), Some(ModeKind::Running));
    }

    #[test]
    fn test_deep_water_needs_swim_ability() {
        let mut rig = Rig::new(body_with(&[Ability::Sword]));
        let mut mode = FreeMode::new();
        rig.enter(&mut mode, None);
        rig.event(&mut mode, HeroEvent::GroundChanged(Ground::DeepWater));
        assert_eq!(rig.requested(), None);

        let mut rig = Rig::new(body());
        rig.enter(&mut mode, None);
        rig.event(&mut mode, HeroEvent::GroundChanged(Ground::DeepWater));
        assert_eq!(rig.requested(), Some(ModeKind::Swimming));
    }

    #[test]
    fn test_standing_in_deep_water_requests_swimming() {
        let mut rig = Rig::new(body());
        let mut mode = FreeMode::new();
        rig.enter(&mut mode, None);
        rig.update(&mut mode, 1.0 / 60.0);
        assert_eq!(rig.requested(), None);

        rig.body.ground = Ground::DeepWater;
        rig.update(&mut mode, 1.0 / 60.0);
        assert_eq!(rig.requested(), Some(ModeKind::Swimming));

        let mut rig = Rig::new(body_with(&[Ability::Sword]));
        rig.body.ground = Ground::DeepWater;
        let mut mode = FreeMode::new();
        rig.enter(&mut mode, None);
        rig.update(&mut mode, 1.0 / 60.0);
        assert_eq!(rig.requested(), None);
    }

    #[test]
    fn test_obstacle_stops_walking() {
        let mut rig = Rig::new(body());
        let mut mode = FreeMode::new();
        rig.enter(&mut mode, None);
        rig.body.velocity = Vec2::new(88.0, 0.0);
        rig.event(&mut mode, HeroEvent::ObstacleReached);
        assert_eq!(rig.body.velocity, Vec2::ZERO);
    }
}
