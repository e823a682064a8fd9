// Hero behavioral modes
//
// Exactly one mode is active at a time. Each mode answers the capability
// queries, reacts to events and may ask for a transition; the `Hero` commits
// transitions at well-defined points.

mod custom;
mod dying;
mod free;
mod frozen;
mod hurt;
mod jumping;
mod running;
mod swimming;
mod sword_swinging;

pub use custom::CustomMode;
pub use dying::DyingMode;
pub use free::FreeMode;
pub use frozen::FrozenMode;
pub use hurt::HurtMode;
pub use jumping::JumpingMode;
pub use running::{RunPhase, RunningMode};
pub use swimming::SwimmingMode;
pub use sword_swinging::SwordSwingingMode;

use std::fmt;
use std::str::FromStr;

use super::body::HeroBody;
use super::commands::Command;
use super::transition::TransitionRequests;
use super::HeroError;
use crate::game::enemy::{EnemyAttack, Reaction, ReactionOutcome};
use crate::game::entity::{EntityRef, Ground, ObstacleKind};
use crate::game::equipment::TreasureItem;

/// Discriminant of a behavioral mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Walking around, default mode
    Free,
    /// Swinging the sword once
    SwordSwinging,
    /// Charging, running or bouncing off a wall
    Running,
    /// In the air, ignoring most grounds
    Jumping,
    /// In deep water
    Swimming,
    /// Knocked back after taking damage
    Hurt,
    /// No control at all, until released by the game
    Frozen,
    /// Life reached zero
    Dying,
    /// Mode defined outside this crate
    Custom,
}

impl ModeKind {
    pub const ALL: [ModeKind; 9] = [
        Self::Free,
        Self::SwordSwinging,
        Self::Running,
        Self::Jumping,
        Self::Swimming,
        Self::Hurt,
        Self::Frozen,
        Self::Dying,
        Self::Custom,
    ];

    /// Name used in logs and by scripts
    pub fn name(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::SwordSwinging => "sword swinging",
            Self::Running => "running",
            Self::Jumping => "jumping",
            Self::Swimming => "swimming",
            Self::Hurt => "hurt",
            Self::Frozen => "frozen",
            Self::Dying => "dying",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModeKind {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| HeroError::UnknownMode(s.to_string()))
    }
}

/// Events delivered to the active mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeroEvent {
    /// The hero's movement was stopped by an obstacle
    ObstacleReached,
    /// An attack of the hero reached an enemy
    AttackedEnemy {
        attack: EnemyAttack,
        victim: EntityRef,
        reaction: Reaction,
        killed: bool,
    },
    /// The current one-shot sprite animation ended
    AnimationFinished,
    CommandPressed(Command),
    CommandReleased(Command),
    /// The map reports a new ground below the hero
    GroundChanged(Ground),
}

/// Where a mode is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Active,
    Stopping,
    Stopped,
}

/// Bookkeeping shared by every mode
#[derive(Debug, Clone)]
pub struct ModeBase {
    lifecycle: Lifecycle,
    elapsed: f32,
}

impl Default for ModeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeBase {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Created,
            elapsed: 0.0,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Between the start of `enter` and the start of `exit`
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    /// Inside `exit`
    pub fn is_stopping(&self) -> bool {
        self.lifecycle == Lifecycle::Stopping
    }

    /// Seconds spent in this mode
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub(crate) fn start(&mut self, kind: ModeKind) {
        assert_eq!(
            self.lifecycle,
            Lifecycle::Created,
            "{kind} mode entered twice: mode instances cannot be reused"
        );
        self.lifecycle = Lifecycle::Active;
    }

    pub(crate) fn begin_stop(&mut self, kind: ModeKind) {
        assert_eq!(
            self.lifecycle,
            Lifecycle::Active,
            "{kind} mode exited while not active"
        );
        self.lifecycle = Lifecycle::Stopping;
    }

    pub(crate) fn finish_stop(&mut self) {
        self.lifecycle = Lifecycle::Stopped;
    }

    pub(crate) fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}

/// What a mode may touch while one of its hooks runs
pub struct ModeContext<'a> {
    /// Durable hero attributes, lent for the duration of the call
    pub body: &'a mut HeroBody,
    /// Duration of the current tick (zero outside `update`)
    pub dt: f32,
    requests: &'a mut TransitionRequests,
}

impl<'a> ModeContext<'a> {
    pub fn new(body: &'a mut HeroBody, requests: &'a mut TransitionRequests, dt: f32) -> Self {
        Self { body, dt, requests }
    }

    /// Ask the hero to switch to another mode. Returns false when the request
    /// lost against an earlier one in the same tick.
    pub fn request_transition(&mut self, mode: Box<dyn HeroMode>) -> bool {
        self.requests.request(mode)
    }
}

/// A behavioral mode of the hero.
///
/// Capability defaults are the restrictive answer: a mode that does not
/// override a query cannot use the sword, the shield or treasures, and can
/// be hurt unless an invincibility window is running.
pub trait HeroMode: fmt::Debug {
    fn kind(&self) -> ModeKind;
    fn base(&self) -> &ModeBase;
    fn base_mut(&mut self) -> &mut ModeBase;

    // Lifecycle

    /// Called once, right after the mode became the active one.
    /// `previous` is the outgoing mode, which is dropped when this returns.
    fn enter(&mut self, _ctx: &mut ModeContext<'_>, _previous: Option<&dyn HeroMode>) {}

    /// Called once, before `next` replaces this mode. Must not fail.
    fn exit(&mut self, _ctx: &mut ModeContext<'_>, _next: &dyn HeroMode) {}

    /// One simulation tick
    fn update(&mut self, _ctx: &mut ModeContext<'_>) {}

    /// Single entry point for every hook
    fn handle_event(&mut self, _ctx: &mut ModeContext<'_>, _event: &HeroEvent) {}

    // Capabilities

    fn can_start_sword(&self, _body: &HeroBody) -> bool {
        false
    }

    fn can_be_hurt(&self, body: &HeroBody, _attacker: Option<&EntityRef>) -> bool {
        !body.invincibility.is_active()
    }

    fn can_pick_treasure(&self, _body: &HeroBody, _item: &TreasureItem) -> bool {
        false
    }

    fn can_use_shield(&self, _body: &HeroBody) -> bool {
        false
    }

    fn can_sword_hit_crystal(&self, _body: &HeroBody) -> bool {
        false
    }

    fn is_cutting_with_sword(&self, _body: &HeroBody, _entity: &EntityRef) -> bool {
        false
    }

    fn is_obstacle(&self, _body: &HeroBody, kind: ObstacleKind) -> bool {
        default_obstacle(kind)
    }

    // Informational

    fn is_free(&self) -> bool {
        false
    }

    /// Whether direction commands move the hero
    fn can_control_movement(&self) -> bool {
        false
    }

    /// Multiplier applied to sword damage
    fn sword_damage_factor(&self) -> u32 {
        1
    }

    fn is_touching_ground(&self) -> bool {
        true
    }

    /// Whether the game-over sequence may start now if life is zero
    fn can_start_gameover(&self) -> bool {
        true
    }

    /// Whether the game-over sequence can take over from this mode
    fn is_game_over_ready(&self) -> bool {
        false
    }
}

/// What blocks the hero unless a mode says otherwise
pub fn default_obstacle(kind: ObstacleKind) -> bool {
    matches!(
        kind,
        ObstacleKind::Wall | ObstacleKind::LowWall | ObstacleKind::Crystal | ObstacleKind::Npc
    )
}

/// Sound feedback for an attack outcome. A victim reported as killed always
/// gets the kill sound, whatever reaction killed it.
pub(crate) fn reaction_sound(outcome: ReactionOutcome, killed: bool) -> Option<&'static str> {
    if killed {
        return Some("enemy_killed");
    }
    match outcome {
        ReactionOutcome::Protected => Some("sword_tapping"),
        ReactionOutcome::Immobilized | ReactionOutcome::Hurt { .. } => Some("enemy_hurt"),
        ReactionOutcome::Killed => Some("enemy_killed"),
        ReactionOutcome::Ignored | ReactionOutcome::Custom => None,
    }
}
