// Dying mode

use super::{HeroEvent, HeroMode, ModeBase, ModeContext, ModeKind};
use crate::game::entity::EntityRef;
use crate::game::hero::body::HeroBody;

/// Life reached zero. Once the animation is over the game-over sequence can
/// take the hero.
#[derive(Debug, Default)]
pub struct DyingMode {
    base: ModeBase,
    finished: bool,
}

impl DyingMode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeroMode for DyingMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Dying
    }

    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        &mut self.base
    }

    fn enter(&mut self, ctx: &mut ModeContext<'_>, _previous: Option<&dyn HeroMode>) {
        self.finished = false;
        ctx.body.stop();
        ctx.body.invincibility.clear();
        ctx.body.sprites.play("dying");
        ctx.body.play_sound("hero_dying");
    }

    fn update(&mut self, ctx: &mut ModeContext<'_>) {
        if ctx.body.sprites.is_finished() {
            self.finished = true;
        }
    }

    fn handle_event(&mut self, _ctx: &mut ModeContext<'_>, event: &HeroEvent) {
        if let HeroEvent::AnimationFinished = event {
            self.finished = true;
        }
    }

    fn can_be_hurt(&self, _body: &HeroBody, _attacker: Option<&EntityRef>) -> bool {
        false
    }

    fn can_start_gameover(&self) -> bool {
        false
    }

    fn is_game_over_ready(&self) -> bool {
        self.finished
    }
}
