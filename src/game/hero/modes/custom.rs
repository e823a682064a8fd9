// Custom mode: a mode configured by the game instead of coded in this crate

use super::{HeroEvent, HeroMode, ModeBase, ModeContext, ModeKind};
use crate::game::entity::{EntityRef, ObstacleKind};
use crate::game::equipment::{Ability, TreasureItem};
use crate::game::hero::body::HeroBody;

/// Mode whose capability answers are set when it is built.
///
/// Everything is allowed by default; the game turns off what its custom
/// action forbids:
///
/// ```
/// use rusted_hero::game::hero::CustomMode;
///
/// let mode = CustomMode::new("carrying a torch")
///     .with_can_start_sword(false)
///     .with_can_use_shield(false);
/// assert_eq!(mode.description(), "carrying a torch");
/// ```
#[derive(Debug)]
pub struct CustomMode {
    base: ModeBase,
    description: String,
    can_control_movement: bool,
    touching_ground: bool,
    can_be_hurt: bool,
    can_start_sword: bool,
    can_use_shield: bool,
    can_pick_treasure: bool,
    can_take_stairs: bool,
    can_take_jumper: bool,
}

impl CustomMode {
    pub fn new(description: &str) -> Self {
        Self {
            base: ModeBase::new(),
            description: description.to_string(),
            can_control_movement: true,
            touching_ground: true,
            can_be_hurt: true,
            can_start_sword: true,
            can_use_shield: true,
            can_pick_treasure: true,
            can_take_stairs: true,
            can_take_jumper: true,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn with_can_control_movement(mut self, allowed: bool) -> Self {
        self.can_control_movement = allowed;
        self
    }

    pub fn with_touching_ground(mut self, touching: bool) -> Self {
        self.touching_ground = touching;
        self
    }

    pub fn with_can_be_hurt(mut self, allowed: bool) -> Self {
        self.can_be_hurt = allowed;
        self
    }

    /// The sword ability is still required
    pub fn with_can_start_sword(mut self, allowed: bool) -> Self {
        self.can_start_sword = allowed;
        self
    }

    /// The shield ability is still required
    pub fn with_can_use_shield(mut self, allowed: bool) -> Self {
        self.can_use_shield = allowed;
        self
    }

    pub fn with_can_pick_treasure(mut self, allowed: bool) -> Self {
        self.can_pick_treasure = allowed;
        self
    }

    /// When false, stairs block the hero
    pub fn with_can_take_stairs(mut self, allowed: bool) -> Self {
        self.can_take_stairs = allowed;
        self
    }

    /// When false, jumpers block the hero
    pub fn with_can_take_jumper(mut self, allowed: bool) -> Self {
        self.can_take_jumper = allowed;
        self
    }
}

impl HeroMode for CustomMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Custom
    }

    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModeBase {
        &mut self.base
    }

    fn enter(&mut self, ctx: &mut ModeContext<'_>, _previous: Option<&dyn HeroMode>) {
        log::debug!("Hero starts custom mode: {}", self.description);
        if !self.can_control_movement {
            ctx.body.stop();
        }
    }

    fn update(&mut self, ctx: &mut ModeContext<'_>) {
        if self.can_control_movement {
            let speed = ctx.body.stats.walking_speed;
            ctx.body.apply_player_movement(speed);
        }
    }

    fn handle_event(&mut self, ctx: &mut ModeContext<'_>, event: &HeroEvent) {
        if *event == HeroEvent::ObstacleReached {
            ctx.body.stop();
        }
    }

    fn can_start_sword(&self, body: &HeroBody) -> bool {
        self.can_start_sword && body.equipment().has_ability(Ability::Sword)
    }

    fn can_be_hurt(&self, body: &HeroBody, _attacker: Option<&EntityRef>) -> bool {
        self.can_be_hurt && !body.invincibility.is_active()
    }

    fn can_pick_treasure(&self, _body: &HeroBody, _item: &TreasureItem) -> bool {
        self.can_pick_treasure
    }

    fn can_use_shield(&self, body: &HeroBody) -> bool {
        self.can_use_shield && body.equipment().has_ability(Ability::Shield)
    }

    fn is_obstacle(&self, _body: &HeroBody, kind: ObstacleKind) -> bool {
        match kind {
            ObstacleKind::Stairs => !self.can_take_stairs,
            ObstacleKind::Jumper => !self.can_take_jumper,
            _ => super::default_obstacle(kind),
        }
    }

    fn can_control_movement(&self) -> bool {
        self.can_control_movement
    }

    fn is_touching_ground(&self) -> bool {
        self.touching_ground
    }
}
