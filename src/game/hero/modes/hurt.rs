// Hurt mode: knockback after taking damage

use glam::Vec2;

use super::{FreeMode, HeroMode, ModeBase, ModeContext, ModeKind};
use crate::game::entity::EntityRef;
use crate::game::hero::body::HeroBody;

/// The hero is pushed away from what hurt it, then gets a window of
/// invincibility when the mode ends, whatever the next mode is.
#[derive(Debug)]
pub struct HurtMode {
    base: ModeBase,
    /// Where the damage came from
    source: Option<Vec2>,
    remaining: f32,
}

impl HurtMode {
    pub fn new(source: Option<Vec2>) -> Self {
        Self {
            base: ModeBase::new(),
            source,
            remaining: 0.0,
        }
    }

    /// Hurt by an entity, knocked back away from its center
    pub fn from_attacker(attacker: &EntityRef) -> Self {
        Self::new(Some(attacker.bounds.center()))
    }
}

impl HeroMode for HurtMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Hurt
    }

    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        &mut self.base
    }

    fn enter(&mut self, ctx: &mut ModeContext<'_>, _previous: Option<&dyn HeroMode>) {
        self.remaining = ctx.body.stats.hurt_duration;

        let away = self
            .source
            .map(|source| (ctx.body.position - source).normalize_or_zero())
            .filter(|direction| *direction != Vec2::ZERO)
            .unwrap_or(-ctx.body.facing().to_vec());
        ctx.body.velocity = away * ctx.body.stats.hurt_knockback_speed;

        ctx.body.sprites.play("hurt");
        ctx.body.play_sound("hero_hurt");
    }

    fn exit(&mut self, ctx: &mut ModeContext<'_>, _next: &dyn HeroMode) {
        ctx.body.stop();
        let duration = ctx.body.stats.post_hurt_invincibility;
        ctx.body.invincibility.grant(duration);
    }

    fn update(&mut self, ctx: &mut ModeContext<'_>) {
        self.remaining -= ctx.dt;
        if self.remaining <= 0.0 {
            ctx.body.stop();
            ctx.request_transition(Box::new(FreeMode::new()));
        }
    }

    fn can_be_hurt(&self, _body: &HeroBody, _attacker: Option<&EntityRef>) -> bool {
        false
    }

    fn can_start_gameover(&self) -> bool {
        false
    }
}
