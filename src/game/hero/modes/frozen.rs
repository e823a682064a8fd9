// Frozen mode

use super::{HeroMode, ModeBase, ModeContext, ModeKind};

/// The hero cannot do anything until the game releases it
#[derive(Debug, Default)]
pub struct FrozenMode {
    base: ModeBase,
}

impl FrozenMode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeroMode for FrozenMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Frozen
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::hero::commands::Command;
    use crate::game::hero::modes::testing::{body, Rig};
    use crate::game::hero::modes::HeroEvent;
    use glam::Vec2;

    #[test]
    fn test_frozen_ignores_everything() {
        let mut rig = Rig::new(body());
        rig.body.velocity = Vec2::new(50.0, 0.0);
        let mut mode = FrozenMode::new();
        rig.enter(&mut mode, None);
        assert_eq!(rig.body.velocity, Vec2::ZERO);

        rig.body.commands.press(Command::Right);
        rig.event(&mut mode, HeroEvent::CommandPressed(Command::Attack));
        rig.update(&mut mode, 1.0);
        assert_eq!(rig.body.velocity, Vec2::ZERO);
        assert_eq!(rig.requested(), None);
        assert!(!mode.is_free());
    }
}
