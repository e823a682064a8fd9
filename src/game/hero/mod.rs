// Hero: the player-controlled entity and its behavioral modes

pub mod animation;
pub mod body;
pub mod commands;
pub mod context;
pub mod invincibility;
pub mod modes;
pub mod stats;
pub mod transition;

pub use animation::{AnimationClip, AnimationPlayer};
pub use body::HeroBody;
pub use commands::{Command, CommandState};
pub use context::Hero;
pub use invincibility::Invincibility;
pub use modes::{
    CustomMode, DyingMode, FreeMode, FrozenMode, HeroEvent, HeroMode, HurtMode, JumpingMode,
    ModeBase, ModeContext, ModeKind, RunPhase, RunningMode, SwimmingMode, SwordSwingingMode,
};
pub use stats::HeroStats;
pub use transition::TransitionRequests;

/// Hero errors
#[derive(Debug, thiserror::Error)]
pub enum HeroError {
    #[error("Unknown hero mode: {0}")]
    UnknownMode(String),

    #[error("Missing animation: {0}")]
    MissingAnimation(String),

    #[error("Invalid hero stats: {0}")]
    InvalidStats(String),
}
