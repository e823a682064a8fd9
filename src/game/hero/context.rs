// Hero context: owns the body and the single active mode, drives the frame
// tick and commits mode transitions

use std::mem;
use std::rc::Rc;

use glam::Vec2;
use log::{debug, info};

use super::body::HeroBody;
use super::commands::Command;
use super::modes::{
    DyingMode, FreeMode, FrozenMode, HeroEvent, HeroMode, HurtMode, JumpingMode, ModeContext,
    ModeKind, RunningMode, SwordSwingingMode,
};
use super::stats::HeroStats;
use super::transition::TransitionRequests;
use super::HeroError;
use crate::core::math::Direction4;
use crate::game::enemy::{resolve, Attack, EnemyAttack, Reaction, ResistanceProfile};
use crate::game::entity::{EntityRef, Ground, ObstacleKind};
use crate::game::equipment::{Ability, Equipment, TreasureItem};

/// The player-controlled hero.
///
/// Exactly one mode is active at any time. Transitions requested between two
/// ticks are committed at the start of the next tick; a transition requested
/// by the mode's own update is committed right after that update. Once a
/// tick's commit point has passed, new requests are accepted again.
#[derive(Debug)]
pub struct Hero {
    body: HeroBody,
    mode: Box<dyn HeroMode>,
    requests: TransitionRequests,
    suspended: bool,
    /// Inside `update`, where the tick's own commit points apply
    in_update: bool,
    transition_count: u64,
    last_transition: Option<(ModeKind, ModeKind)>,
}

impl Hero {
    /// Create a hero in the free mode
    pub fn new(stats: HeroStats, equipment: Rc<dyn Equipment>) -> Result<Self, HeroError> {
        stats.validate()?;

        let mut hero = Self {
            body: HeroBody::new(stats, equipment),
            mode: Box::new(FreeMode::new()),
            requests: TransitionRequests::new(),
            suspended: false,
            in_update: false,
            transition_count: 0,
            last_transition: None,
        };

        let kind = hero.mode.kind();
        hero.mode.base_mut().start(kind);
        hero.requests.begin_commit();
        let mut ctx = ModeContext::new(&mut hero.body, &mut hero.requests, 0.0);
        hero.mode.enter(&mut ctx, None);
        hero.requests.end_commit();

        info!("Hero created in {} mode", kind);
        Ok(hero)
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.body.position = position;
        self
    }

    // Frame tick

    /// Advance the hero by one simulation step
    pub fn update(&mut self, dt: f32) {
        if self.suspended {
            return;
        }

        self.in_update = true;
        if let Some(next) = self.requests.take() {
            self.commit(next);
        }

        self.body.invincibility.tick(dt);
        self.mode.base_mut().advance(dt);
        self.check_game_over();

        if self.body.sprites.update(dt) {
            self.dispatch(HeroEvent::AnimationFinished);
        }

        {
            let mut ctx = ModeContext::new(&mut self.body, &mut self.requests, dt);
            self.mode.update(&mut ctx);
        }
        self.body.position += self.body.velocity * dt;

        if let Some(next) = self.requests.take() {
            self.commit(next);
        }
        self.in_update = false;
        self.requests.end_tick();
    }

    fn check_game_over(&mut self) {
        if self.body.equipment().life() == 0
            && self.mode.kind() != ModeKind::Dying
            && self.mode.can_start_gameover()
        {
            info!("Hero life reached zero in {} mode", self.mode.kind());
            self.force_transition(Box::new(DyingMode::new()));
        }
    }

    // Transitions

    /// Ask for a transition. The first request wins until it is committed.
    pub fn request_transition(&mut self, mode: Box<dyn HeroMode>) -> bool {
        self.requests.request(mode)
    }

    /// Switch to a mode immediately, dropping any pending request
    pub fn force_transition(&mut self, mode: Box<dyn HeroMode>) {
        self.requests.discard_pending();
        self.commit(mode);
        if !self.in_update {
            // Between ticks the forced commit is the commit point
            self.requests.end_tick();
        }
    }

    fn commit(&mut self, mut next: Box<dyn HeroMode>) {
        self.requests.mark_committed();
        // Anything requested from exit or enter is dropped
        self.requests.begin_commit();

        let from = self.mode.kind();
        let to = next.kind();
        debug!("Hero mode transition: {} -> {}", from, to);

        self.mode.base_mut().begin_stop(from);
        {
            let mut ctx = ModeContext::new(&mut self.body, &mut self.requests, 0.0);
            self.mode.exit(&mut ctx, next.as_ref());
        }
        self.mode.base_mut().finish_stop();

        next.base_mut().start(to);
        let previous = mem::replace(&mut self.mode, next);
        let mut ctx = ModeContext::new(&mut self.body, &mut self.requests, 0.0);
        self.mode.enter(&mut ctx, Some(previous.as_ref()));
        self.requests.end_commit();

        self.transition_count += 1;
        self.last_transition = Some((from, to));
    }

    /// A suspended hero ignores ticks. Pending requests stay pending.
    pub fn set_suspended(&mut self, suspended: bool) {
        if self.suspended != suspended {
            debug!("Hero {}", if suspended { "suspended" } else { "resumed" });
            self.suspended = suspended;
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    // Event hooks

    fn dispatch(&mut self, event: HeroEvent) {
        let mut ctx = ModeContext::new(&mut self.body, &mut self.requests, 0.0);
        self.mode.handle_event(&mut ctx, &event);
    }

    pub fn notify_obstacle_reached(&mut self) {
        self.dispatch(HeroEvent::ObstacleReached);
    }

    /// `killed` is reported by the victim, which may die from a custom
    /// reaction as well as from a resolved one
    pub fn notify_attacked_enemy(
        &mut self,
        attack: EnemyAttack,
        victim: &EntityRef,
        reaction: Reaction,
        killed: bool,
    ) {
        self.dispatch(HeroEvent::AttackedEnemy {
            attack,
            victim: *victim,
            reaction,
            killed,
        });
    }

    /// Resolve an attack of the hero against an enemy and notify the active
    /// mode of the outcome
    pub fn attack_enemy(
        &mut self,
        kind: EnemyAttack,
        victim: &EntityRef,
        profile: &ResistanceProfile,
    ) -> Reaction {
        let factor = match kind {
            EnemyAttack::Sword => self.mode.sword_damage_factor(),
            _ => 1,
        };
        let direction = victim.bounds.center() - self.body.position;
        let reaction = resolve(&Attack::new(kind, direction).with_damage_factor(factor), profile);
        debug!(
            "Hero attack {} on entity {}: {:?}",
            kind.name(),
            victim.id,
            reaction.outcome
        );
        self.notify_attacked_enemy(kind, victim, reaction, reaction.killed());
        reaction
    }

    pub fn notify_animation_finished(&mut self) {
        self.dispatch(HeroEvent::AnimationFinished);
    }

    pub fn notify_ground_changed(&mut self, ground: Ground) {
        if self.body.ground != ground {
            self.body.ground = ground;
            self.dispatch(HeroEvent::GroundChanged(ground));
        }
    }

    pub fn press_command(&mut self, command: Command) {
        self.body.commands.press(command);
        self.dispatch(HeroEvent::CommandPressed(command));
    }

    pub fn release_command(&mut self, command: Command) {
        self.body.commands.release(command);
        self.dispatch(HeroEvent::CommandReleased(command));
    }

    // Actions started by the game

    /// Start a sword swing now if the active mode allows it
    pub fn start_sword(&mut self) -> bool {
        if !self.mode.can_start_sword(&self.body) {
            return false;
        }
        self.force_transition(Box::new(SwordSwingingMode::new()));
        true
    }

    pub fn start_running(&mut self) -> bool {
        if !self.mode.is_free() || !self.body.equipment().has_ability(Ability::Run) {
            return false;
        }
        self.force_transition(Box::new(RunningMode::new(Command::Run)));
        true
    }

    /// Start a jump unless the hero is dying or the active mode must not be
    /// interrupted by a game over
    pub fn start_jumping(&mut self, direction8: u8, distance: f32, with_sound: bool) -> bool {
        if self.mode.kind() == ModeKind::Dying || !self.mode.can_start_gameover() {
            debug!("Jump refused in {} mode", self.mode.kind());
            return false;
        }
        self.force_transition(Box::new(JumpingMode::new(direction8, distance, with_sound)));
        true
    }

    /// Hurt the hero if the active mode allows it. Removing life is left to
    /// the owner of the equipment.
    pub fn hurt(&mut self, attacker: Option<&EntityRef>) -> bool {
        if !self.mode.can_be_hurt(&self.body, attacker) {
            return false;
        }
        let mode = match attacker {
            Some(attacker) => HurtMode::from_attacker(attacker),
            None => HurtMode::new(None),
        };
        self.force_transition(Box::new(mode));
        true
    }

    pub fn freeze(&mut self) {
        if self.mode.kind() != ModeKind::Frozen {
            self.force_transition(Box::new(FrozenMode::new()));
        }
    }

    pub fn unfreeze(&mut self) {
        if self.mode.kind() == ModeKind::Frozen {
            self.force_transition(Box::new(FreeMode::new()));
        }
    }

    // Capability queries, answered by the active mode

    pub fn can_start_sword(&self) -> bool {
        self.mode.can_start_sword(&self.body)
    }

    pub fn can_be_hurt(&self, attacker: Option<&EntityRef>) -> bool {
        self.mode.can_be_hurt(&self.body, attacker)
    }

    pub fn can_pick_treasure(&self, item: &TreasureItem) -> bool {
        self.mode.can_pick_treasure(&self.body, item)
    }

    pub fn can_use_shield(&self) -> bool {
        self.mode.can_use_shield(&self.body)
    }

    pub fn can_sword_hit_crystal(&self) -> bool {
        self.mode.can_sword_hit_crystal(&self.body)
    }

    pub fn is_cutting_with_sword(&self, entity: &EntityRef) -> bool {
        self.mode.is_cutting_with_sword(&self.body, entity)
    }

    pub fn is_obstacle(&self, kind: ObstacleKind) -> bool {
        self.mode.is_obstacle(&self.body, kind)
    }

    pub fn is_free(&self) -> bool {
        self.mode.is_free()
    }

    pub fn can_control_movement(&self) -> bool {
        self.mode.can_control_movement()
    }

    pub fn sword_damage_factor(&self) -> u32 {
        self.mode.sword_damage_factor()
    }

    pub fn is_touching_ground(&self) -> bool {
        self.mode.is_touching_ground()
    }

    pub fn can_start_gameover(&self) -> bool {
        self.mode.can_start_gameover()
    }

    pub fn is_game_over_ready(&self) -> bool {
        self.mode.is_game_over_ready()
    }

    // Accessors

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn mode(&self) -> &dyn HeroMode {
        self.mode.as_ref()
    }

    pub fn body(&self) -> &HeroBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut HeroBody {
        &mut self.body
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn facing(&self) -> Direction4 {
        self.body.facing()
    }

    /// Sounds requested since the last call
    pub fn drain_sounds(&mut self) -> Vec<&'static str> {
        self.body.drain_sounds()
    }

    pub fn pending_transition(&self) -> Option<ModeKind> {
        self.requests.pending_kind()
    }

    /// Number of transitions committed since creation
    pub fn transition_count(&self) -> u64 {
        self.transition_count
    }

    pub fn last_transition(&self) -> Option<(ModeKind, ModeKind)> {
        self.last_transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Rect;
    use crate::game::enemy::ReactionOutcome;
    use crate::game::equipment::BasicEquipment;
    use crate::game::hero::modes::{CustomMode, ModeBase};
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    const DT: f32 = 1.0 / 60.0;

    fn equipment() -> Rc<BasicEquipment> {
        Rc::new(BasicEquipment::with_abilities(
            12,
            &[Ability::Sword, Ability::Shield, Ability::Swim, Ability::Run],
        ))
    }

    fn hero() -> Hero {
        Hero::new(HeroStats::default(), equipment()).unwrap()
    }

    /// Tick until the hero leaves `kind`, returns the number of ticks
    fn ticks_in(hero: &mut Hero, kind: ModeKind) -> usize {
        let mut ticks = 0;
        while hero.mode_kind() == kind {
            hero.update(DT);
            ticks += 1;
            assert!(ticks < 1000, "hero stuck in {kind} mode");
        }
        ticks
    }

    /// Mode that logs its lifecycle hooks
    #[derive(Debug)]
    struct Recorder {
        base: ModeBase,
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Box<dyn HeroMode> {
            Box::new(Self {
                base: ModeBase::new(),
                name,
                log: Rc::clone(log),
            })
        }
    }

    impl HeroMode for Recorder {
        fn kind(&self) -> ModeKind {
            ModeKind::Custom
        }

        fn base(&self) -> &ModeBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ModeBase {
            &mut self.base
        }

        fn enter(&mut self, ctx: &mut ModeContext<'_>, previous: Option<&dyn HeroMode>) {
            let previous = previous.map_or("none", |mode| mode.kind().name());
            self.log
                .borrow_mut()
                .push(format!("enter {} after {}", self.name, previous));
            // Dropped: a transition was just committed
            let accepted = ctx.request_transition(Box::new(FreeMode::new()));
            assert!(!accepted);
        }

        fn exit(&mut self, _ctx: &mut ModeContext<'_>, next: &dyn HeroMode) {
            assert!(self.base.is_stopping());
            self.log
                .borrow_mut()
                .push(format!("exit {} before {}", self.name, next.kind().name()));
        }
    }

    #[test]
    fn test_starts_free() {
        let hero = hero();
        assert_eq!(hero.mode_kind(), ModeKind::Free);
        assert!(hero.mode().base().is_active());
        assert!(hero.is_free());
        assert_eq!(hero.transition_count(), 0);
        assert_eq!(hero.last_transition(), None);
    }

    #[test]
    fn test_invalid_stats_are_rejected() {
        let stats = HeroStats {
            walking_speed: 0.0,
            ..HeroStats::default()
        };
        let err = Hero::new(stats, equipment()).unwrap_err();
        assert!(matches!(err, HeroError::InvalidStats(_)));
    }

    #[test]
    fn test_exit_completes_before_enter() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hero = hero();

        hero.force_transition(Recorder::boxed("a", &log));
        hero.force_transition(Recorder::boxed("b", &log));
        hero.force_transition(Box::new(FreeMode::new()));

        assert_eq!(
            *log.borrow(),
            vec![
                "enter a after free",
                "exit a before custom",
                "enter b after custom",
                "exit b before free",
            ]
        );
        assert_eq!(hero.mode_kind(), ModeKind::Free);
        assert_eq!(hero.transition_count(), 3);
    }

    #[test]
    fn test_first_request_wins() {
        let mut hero = hero();
        hero.press_command(Command::Attack);
        hero.notify_ground_changed(Ground::DeepWater);
        assert_eq!(hero.pending_transition(), Some(ModeKind::SwordSwinging));

        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::SwordSwinging);
        assert_eq!(hero.transition_count(), 1);

        // Back in the free mode, the hero notices the deep water below it
        ticks_in(&mut hero, ModeKind::SwordSwinging);
        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::Swimming);
    }

    #[test]
    fn test_requests_are_visible_from_next_tick() {
        let mut hero = hero();
        hero.press_command(Command::Attack);

        // Queries in the same tick still see the free mode
        assert_eq!(hero.mode_kind(), ModeKind::Free);
        assert!(hero.can_start_sword());
        assert!(hero.can_use_shield());

        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::SwordSwinging);
        assert!(!hero.can_start_sword());
    }

    #[test]
    fn test_hook_request_after_previous_tick_commit() {
        let mut hero = hero();
        hero.press_command(Command::Run);
        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::Running);

        // Raised between ticks, after the commit of the previous tick
        hero.release_command(Command::Run);
        assert_eq!(hero.pending_transition(), Some(ModeKind::Free));

        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::Free);
        assert_eq!(
            hero.last_transition(),
            Some((ModeKind::Running, ModeKind::Free))
        );
    }

    #[test]
    fn test_attack_right_after_swing_ends() {
        let mut hero = hero();
        assert!(hero.start_sword());
        ticks_in(&mut hero, ModeKind::SwordSwinging);
        assert_eq!(hero.mode_kind(), ModeKind::Free);

        hero.press_command(Command::Attack);
        assert_eq!(hero.pending_transition(), Some(ModeKind::SwordSwinging));
        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::SwordSwinging);
    }

    #[test]
    fn test_deep_water_right_after_swing_ends() {
        let mut hero = hero();
        assert!(hero.start_sword());
        ticks_in(&mut hero, ModeKind::SwordSwinging);

        hero.notify_ground_changed(Ground::DeepWater);
        assert_eq!(hero.pending_transition(), Some(ModeKind::Swimming));
        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::Swimming);
    }

    #[test]
    fn test_requests_after_forced_transition_between_ticks() {
        let mut hero = hero();
        hero.freeze();
        hero.update(DT);

        hero.unfreeze();
        hero.press_command(Command::Attack);
        assert_eq!(hero.pending_transition(), Some(ModeKind::SwordSwinging));

        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::SwordSwinging);
        assert_eq!(hero.transition_count(), 3);
    }

    #[test]
    fn test_forced_transition_drops_pending_request() {
        let mut hero = hero();
        hero.press_command(Command::Attack);
        hero.freeze();
        assert_eq!(hero.pending_transition(), None);

        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::Frozen);

        hero.unfreeze();
        assert_eq!(hero.mode_kind(), ModeKind::Free);
    }

    #[test]
    fn test_swing_then_free_scenario() {
        let mut hero = hero();
        assert!(hero.can_start_sword());

        assert!(hero.start_sword());
        assert_eq!(hero.mode_kind(), ModeKind::SwordSwinging);
        assert!(!hero.can_use_shield());
        assert!(!hero.can_start_sword());

        let mut ticks = 0;
        while hero.mode_kind() == ModeKind::SwordSwinging {
            assert!(!hero.can_start_sword());
            assert!(!hero.body().sprites.is_finished());
            hero.update(DT);
            ticks += 1;
            assert!(ticks < 100);
        }

        // The transition is committed on the tick the animation completes
        assert_eq!(hero.mode_kind(), ModeKind::Free);
        assert_eq!(
            hero.last_transition(),
            Some((ModeKind::SwordSwinging, ModeKind::Free))
        );
        assert!(hero.can_start_sword());
    }

    #[test]
    fn test_hits_do_not_change_swing_duration() {
        let mut baseline = hero();
        baseline.start_sword();
        let expected = ticks_in(&mut baseline, ModeKind::SwordSwinging);

        let mut hero = hero().with_position(Vec2::new(100.0, 100.0));
        hero.start_sword();
        for _ in 0..3 {
            hero.update(DT);
        }

        let enemy = EntityRef::new(5, Rect::new(100.0, 110.0, 16.0, 16.0));
        let profile = ResistanceProfile::new(1);
        let reaction = hero.attack_enemy(EnemyAttack::Sword, &enemy, &profile);
        assert_eq!(reaction.outcome, ReactionOutcome::Killed);
        assert_eq!(hero.mode_kind(), ModeKind::SwordSwinging);
        assert_eq!(hero.pending_transition(), None);

        for _ in 0..5 {
            hero.notify_attacked_enemy(EnemyAttack::Sword, &enemy, Reaction::ignored(), false);
        }
        let transitions = hero.transition_count();

        let remaining = ticks_in(&mut hero, ModeKind::SwordSwinging);
        assert_eq!(remaining + 3, expected);
        assert_eq!(hero.transition_count(), transitions + 1);
        assert_eq!(hero.mode_kind(), ModeKind::Free);
    }

    #[test]
    fn test_custom_reaction_that_kills() {
        let mut hero = hero();
        hero.start_sword();
        hero.update(DT);
        hero.drain_sounds();

        let enemy = EntityRef::new(4, Rect::new(-8.0, 8.0, 16.0, 16.0));
        let custom = Reaction {
            outcome: ReactionOutcome::Custom,
            ..Reaction::ignored()
        };
        hero.notify_attacked_enemy(EnemyAttack::Sword, &enemy, custom, true);
        assert_eq!(hero.drain_sounds(), vec!["enemy_killed"]);

        hero.notify_attacked_enemy(EnemyAttack::Sword, &enemy, custom, false);
        assert!(hero.drain_sounds().is_empty());
        assert_eq!(hero.mode_kind(), ModeKind::SwordSwinging);
        assert_eq!(hero.pending_transition(), None);
    }

    #[test]
    fn test_preemption_runs_exit_exactly_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hero = hero();
        hero.force_transition(Recorder::boxed("swing", &log));
        hero.update(DT);

        assert!(hero.hurt(None));
        assert_eq!(hero.mode_kind(), ModeKind::Hurt);
        ticks_in(&mut hero, ModeKind::Hurt);

        let exits = log
            .borrow()
            .iter()
            .filter(|entry| entry.starts_with("exit swing"))
            .count();
        assert_eq!(exits, 1);
    }

    #[test]
    fn test_hurt_mid_swing() {
        let mut hero = hero();
        hero.start_sword();
        hero.update(DT);

        let enemy = EntityRef::new(8, Rect::centered(Vec2::new(0.0, -16.0), Vec2::splat(16.0)));
        assert!(hero.hurt(Some(&enemy)));
        assert_eq!(
            hero.last_transition(),
            Some((ModeKind::SwordSwinging, ModeKind::Hurt))
        );
        assert!(hero.velocity().y > 0.0, "Knocked back away from the enemy");
        assert!(!hero.hurt(Some(&enemy)), "Already hurt");

        ticks_in(&mut hero, ModeKind::Hurt);
        assert_eq!(hero.last_transition(), Some((ModeKind::Hurt, ModeKind::Free)));

        // Post-hurt invincibility outlives the hurt mode
        assert!(!hero.can_be_hurt(Some(&enemy)));
        assert!(!hero.hurt(Some(&enemy)));
        for _ in 0..130 {
            hero.update(DT);
        }
        assert!(hero.can_be_hurt(Some(&enemy)));
    }

    #[test]
    fn test_jumping_hero_cannot_be_hurt() {
        let mut hero = hero();
        assert!(hero.start_jumping(6, 32.0, true));
        assert!(!hero.hurt(None));
        assert!(!hero.is_touching_ground());
        assert_eq!(hero.drain_sounds(), vec!["jump"]);
    }

    #[test]
    fn test_no_jump_while_hurt_or_dying() {
        let equipment = equipment();
        let mut hero = Hero::new(HeroStats::default(), equipment.clone()).unwrap();

        assert!(hero.hurt(None));
        assert!(!hero.start_jumping(2, 32.0, false));
        assert_eq!(hero.mode_kind(), ModeKind::Hurt);

        ticks_in(&mut hero, ModeKind::Hurt);
        equipment.set_life(0);
        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::Dying);
        assert!(!hero.start_jumping(2, 32.0, false));
        assert_eq!(hero.mode_kind(), ModeKind::Dying);
        assert_eq!(hero.last_transition(), Some((ModeKind::Free, ModeKind::Dying)));
    }

    #[test]
    fn test_zero_life_starts_dying() {
        let equipment = equipment();
        let mut hero = Hero::new(HeroStats::default(), equipment.clone()).unwrap();

        hero.hurt(None);
        equipment.set_life(0);
        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::Hurt, "Hurt mode delays game over");

        ticks_in(&mut hero, ModeKind::Hurt);
        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::Dying);
        assert!(!hero.is_game_over_ready());

        for _ in 0..100 {
            hero.update(DT);
        }
        assert!(hero.is_game_over_ready());
        assert_eq!(hero.mode_kind(), ModeKind::Dying);
    }

    #[test]
    fn test_suspended_hero_ignores_ticks() {
        let mut hero = hero();
        hero.press_command(Command::Attack);
        hero.set_suspended(true);

        for _ in 0..10 {
            hero.update(DT);
        }
        assert_eq!(hero.mode_kind(), ModeKind::Free);
        assert_eq!(hero.pending_transition(), Some(ModeKind::SwordSwinging));

        hero.set_suspended(false);
        hero.update(DT);
        assert_eq!(hero.mode_kind(), ModeKind::SwordSwinging);
    }

    #[test]
    fn test_walking_moves_the_hero() {
        let mut hero = hero().with_position(Vec2::new(10.0, 10.0));
        hero.press_command(Command::Right);
        hero.update(DT);

        assert_relative_eq!(hero.position().x, 10.0 + 88.0 * DT, epsilon = 1e-4);
        assert_eq!(hero.facing(), Direction4::Right);

        hero.release_command(Command::Right);
        hero.update(DT);
        assert_eq!(hero.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_custom_mode_answers_from_its_settings() {
        let mut hero = hero().with_position(Vec2::new(10.0, 10.0));
        hero.force_transition(Box::new(
            CustomMode::new("carrying a torch").with_can_start_sword(false),
        ));
        assert_eq!(hero.mode_kind(), ModeKind::Custom);
        assert!(!hero.can_start_sword());
        assert!(!hero.start_sword());
        assert!(hero.can_use_shield());

        hero.press_command(Command::Left);
        hero.update(DT);
        assert_relative_eq!(hero.position().x, 10.0 - 88.0 * DT, epsilon = 1e-4);
        assert_eq!(hero.mode_kind(), ModeKind::Custom);
    }

    #[test]
    fn test_running_doubles_sword_damage() {
        let mut hero = hero();
        assert!(hero.start_running());
        assert!(!hero.start_running(), "Only from the free mode");

        for _ in 0..40 {
            hero.update(DT);
        }
        assert_eq!(hero.sword_damage_factor(), 2);

        let enemy = EntityRef::new(1, Rect::new(40.0, -8.0, 16.0, 16.0));
        let reaction = hero.attack_enemy(EnemyAttack::Sword, &enemy, &ResistanceProfile::new(3));
        assert_eq!(reaction.outcome, ReactionOutcome::Hurt { life_lost: 2 });
    }
}
