use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use glam::Vec2;
use log::info;

use rusted_hero::core::math::Rect;
use rusted_hero::engine::game_loop::GameLoop;
use rusted_hero::game::enemy::{EnemyAttack, ResistanceProfile};
use rusted_hero::game::entity::EntityRef;
use rusted_hero::game::equipment::{Ability, BasicEquipment, Equipment};
use rusted_hero::game::hero::{Command, Hero, HeroStats, ModeKind};

/// Length of one simulated frame of the scripted scenario
const FRAME: Duration = Duration::from_millis(16);

/// Run one frame worth of hero steps and log mode changes
fn run_frame(game_loop: &mut GameLoop, hero: &mut Hero) {
    let steps = game_loop.advance(FRAME);
    for _ in 0..steps {
        let before = hero.mode_kind();
        hero.update(game_loop.fixed_timestep());
        if hero.mode_kind() != before {
            info!(
                "{:>6.3}s  {} -> {}",
                game_loop.simulated().as_secs_f32(),
                before,
                hero.mode_kind()
            );
        }
        for sound in hero.drain_sounds() {
            info!("{:>6.3}s  sound: {}", game_loop.simulated().as_secs_f32(), sound);
        }
    }
}

fn run_until(game_loop: &mut GameLoop, hero: &mut Hero, kind: ModeKind) {
    // Scenario frames are bounded, a stuck hero ends the demo
    for _ in 0..600 {
        if hero.mode_kind() == kind {
            return;
        }
        run_frame(game_loop, hero);
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Hero scripted scenario...");

    let equipment = Rc::new(BasicEquipment::with_abilities(
        6,
        &[Ability::Sword, Ability::Shield, Ability::Run],
    ));
    let mut hero = Hero::new(HeroStats::standard(), equipment.clone())?
        .with_position(Vec2::new(160.0, 120.0));
    let mut game_loop = GameLoop::new();

    // Walk right for a moment
    hero.press_command(Command::Right);
    for _ in 0..20 {
        run_frame(&mut game_loop, &mut hero);
    }
    hero.release_command(Command::Right);
    info!("Hero walked to {:?}", hero.position());

    // Swing at a slime standing in front of the hero
    let slime = EntityRef::new(
        1,
        Rect::centered(hero.position() + Vec2::new(14.0, 0.0), Vec2::splat(16.0)),
    );
    let slime_profile = ResistanceProfile::new(2);
    hero.press_command(Command::Attack);
    run_frame(&mut game_loop, &mut hero);

    let mut hits = 0;
    while hero.mode_kind() == ModeKind::SwordSwinging && hits < 2 {
        if hero.is_cutting_with_sword(&slime) {
            let reaction = hero.attack_enemy(EnemyAttack::Sword, &slime, &slime_profile);
            info!("Sword hit the slime: {:?}", reaction.outcome);
            hits += 1;
        }
        run_frame(&mut game_loop, &mut hero);
    }
    run_until(&mut game_loop, &mut hero, ModeKind::Free);

    // A second enemy touches the hero
    let bat = EntityRef::new(
        2,
        Rect::centered(hero.position() + Vec2::new(0.0, -12.0), Vec2::splat(12.0)),
    );
    if hero.hurt(Some(&bat)) {
        equipment.remove_life(2);
        info!("Hero hurt, life left: {}", equipment.life());
    }
    run_until(&mut game_loop, &mut hero, ModeKind::Free);
    info!(
        "Hero can be hurt again right away: {}",
        hero.can_be_hurt(Some(&bat))
    );

    info!(
        "Scenario done: {} transitions in {:.2}s of simulated time",
        hero.transition_count(),
        game_loop.simulated().as_secs_f32()
    );

    Ok(())
}
