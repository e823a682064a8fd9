// Running mode: charge, dash forward with the sword held out, bounce off walls

use super::{reaction_sound, FreeMode, HeroEvent, HeroMode, ModeBase, ModeContext, ModeKind};
use crate::game::entity::{EntityRef, ObstacleKind};
use crate::game::equipment::TreasureItem;
use crate::game::hero::body::HeroBody;
use crate::game::hero::commands::Command;

/// Phases of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Stamping in place before the dash
    Charging,
    /// Dashing in the facing direction
    Running,
    /// Knocked back after hitting an obstacle
    Bouncing,
}

#[derive(Debug)]
pub struct RunningMode {
    base: ModeBase,
    /// Command that started the run
    command: Command,
    phase: RunPhase,
    /// Time left in the current phase (charging or bouncing)
    phase_timer: f32,
}

impl RunningMode {
    pub fn new(command: Command) -> Self {
        Self {
            base: ModeBase::new(),
            command,
            phase: RunPhase::Charging,
            phase_timer: 0.0,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    fn is_bouncing(&self) -> bool {
        self.phase == RunPhase::Bouncing
    }

    fn start_bounce(&mut self, ctx: &mut ModeContext<'_>) {
        self.phase = RunPhase::Bouncing;
        self.phase_timer = ctx.body.stats.bounce_duration;
        ctx.body.velocity = -ctx.body.facing().to_vec() * ctx.body.stats.bounce_speed;
        ctx.body.play_sound("running_obstacle");
        ctx.body.sprites.play("hurt");
    }
}

impl HeroMode for RunningMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Running
    }

    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        &mut self.base
    }

    fn enter(&mut self, ctx: &mut ModeContext<'_>, _previous: Option<&dyn HeroMode>) {
        self.phase = RunPhase::Charging;
        self.phase_timer = ctx.body.stats.run_charge_time;
        ctx.body.stop();
        ctx.body.sprites.play("running");
        ctx.body.play_sound("running");
    }

    fn update(&mut self, ctx: &mut ModeContext<'_>) {
        match self.phase {
            RunPhase::Charging => {
                self.phase_timer -= ctx.dt;
                if self.phase_timer <= 0.0 {
                    self.phase = RunPhase::Running;
                }
            }
            RunPhase::Running => {}
            RunPhase::Bouncing => {
                self.phase_timer -= ctx.dt;
                if self.phase_timer <= 0.0 {
                    ctx.body.stop();
                    ctx.request_transition(Box::new(FreeMode::new()));
                }
            }
        }

        if self.phase == RunPhase::Running {
            ctx.body.velocity = ctx.body.facing().to_vec() * ctx.body.stats.running_speed;
        }
    }

    fn handle_event(&mut self, ctx: &mut ModeContext<'_>, event: &HeroEvent) {
        match *event {
            HeroEvent::CommandReleased(command)
                if command == self.command && self.phase == RunPhase::Charging =>
            {
                ctx.request_transition(Box::new(FreeMode::new()));
            }
            HeroEvent::CommandPressed(command) if self.phase == RunPhase::Running => {
                // Any other direction stops the run
                if command
                    .direction()
                    .is_some_and(|direction| direction != ctx.body.facing())
                {
                    ctx.body.stop();
                    ctx.request_transition(Box::new(FreeMode::new()));
                }
            }
            HeroEvent::ObstacleReached if self.phase == RunPhase::Running => {
                self.start_bounce(ctx);
            }
            HeroEvent::ObstacleReached => ctx.body.stop(),
            HeroEvent::AttackedEnemy {
                reaction, killed, ..
            } => {
                if let Some(sound) = reaction_sound(reaction.outcome, killed) {
                    ctx.body.play_sound(sound);
                }
            }
            _ => {}
        }
    }

    fn can_be_hurt(&self, body: &HeroBody, _attacker: Option<&EntityRef>) -> bool {
        !self.is_bouncing() && !body.invincibility.is_active()
    }

    fn can_pick_treasure(&self, _body: &HeroBody, item: &TreasureItem) -> bool {
        !self.is_bouncing() && !item.brandish
    }

    fn can_sword_hit_crystal(&self, _body: &HeroBody) -> bool {
        true
    }

    fn is_cutting_with_sword(&self, body: &HeroBody, entity: &EntityRef) -> bool {
        self.phase == RunPhase::Running && body.sword_hitbox().overlaps(&entity.bounds)
    }

    fn is_obstacle(&self, _body: &HeroBody, kind: ObstacleKind) -> bool {
        kind == ObstacleKind::Sensor || super::default_obstacle(kind)
    }

    fn sword_damage_factor(&self) -> u32 {
        2
    }

    fn is_touching_ground(&self) -> bool {
        !self.is_bouncing()
    }

    fn can_start_gameover(&self) -> bool {
        !self.is_bouncing()
    }
}
