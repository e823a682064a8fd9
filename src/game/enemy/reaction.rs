// Enemy reaction protocol
//
// Turns an attack issued by the hero into what the enemy does about it.
// Resolution is a pure function of the attack and the enemy's resistance
// profile: no enemy state is read or written here.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

/// Ways the hero can attack an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyAttack {
    Sword,
    ThrownItem,
    Explosion,
    Arrow,
    Hookshot,
    Boomerang,
    Fire,
    Script,
}

impl EnemyAttack {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sword => "sword",
            Self::ThrownItem => "thrown_item",
            Self::Explosion => "explosion",
            Self::Arrow => "arrow",
            Self::Hookshot => "hookshot",
            Self::Boomerang => "boomerang",
            Self::Fire => "fire",
            Self::Script => "script",
        }
    }
}

/// How an enemy is configured to respond to one kind of attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResponse {
    /// Nothing happens
    Ignored,
    /// The attack bounces off
    Protected,
    /// The enemy stops moving for a while
    Immobilized,
    /// The enemy loses life points
    Damage(u32),
}

/// Resistance and behavior profile of an enemy
#[derive(Debug, Clone)]
pub struct ResistanceProfile {
    /// Remaining life of the enemy
    pub life: u32,
    /// Push the enemy back when it is hurt
    pub pushed_back_when_hurt: bool,
    /// Push the hero back when the attack is blocked
    pub push_hero_on_protected: bool,
    /// Distance-per-second applied as knockback
    pub knockback_speed: f32,
    responses: HashMap<EnemyAttack, AttackResponse>,
    custom: HashSet<EnemyAttack>,
}

impl ResistanceProfile {
    /// Profile with the usual defaults: one point of damage from the sword,
    /// more from explosions and arrows, boomerang and hookshot immobilize
    pub fn new(life: u32) -> Self {
        let mut responses = HashMap::new();
        responses.insert(EnemyAttack::Sword, AttackResponse::Damage(1));
        responses.insert(EnemyAttack::ThrownItem, AttackResponse::Damage(1));
        responses.insert(EnemyAttack::Explosion, AttackResponse::Damage(2));
        responses.insert(EnemyAttack::Arrow, AttackResponse::Damage(2));
        responses.insert(EnemyAttack::Hookshot, AttackResponse::Immobilized);
        responses.insert(EnemyAttack::Boomerang, AttackResponse::Immobilized);
        responses.insert(EnemyAttack::Fire, AttackResponse::Damage(3));
        responses.insert(EnemyAttack::Script, AttackResponse::Ignored);

        Self {
            life,
            pushed_back_when_hurt: true,
            push_hero_on_protected: false,
            knockback_speed: 120.0,
            responses,
            custom: HashSet::new(),
        }
    }

    /// Set the response to one kind of attack
    pub fn with_response(mut self, attack: EnemyAttack, response: AttackResponse) -> Self {
        self.responses.insert(attack, response);
        self
    }

    /// Hand an attack over to the enemy's script
    pub fn with_custom(mut self, attack: EnemyAttack) -> Self {
        self.custom.insert(attack);
        self
    }

    pub fn with_push_hero_on_protected(mut self, push: bool) -> Self {
        self.push_hero_on_protected = push;
        self
    }

    pub fn response(&self, attack: EnemyAttack) -> AttackResponse {
        self.responses
            .get(&attack)
            .copied()
            .unwrap_or(AttackResponse::Ignored)
    }

    pub fn is_custom(&self, attack: EnemyAttack) -> bool {
        self.custom.contains(&attack)
    }
}

/// Outcome of resolving one attack against one enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    Ignored,
    Protected,
    Immobilized,
    /// Handled by the enemy's script
    Custom,
    Hurt { life_lost: u32 },
    Killed,
}

/// Reaction produced for one attack event, consumed once by the active mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reaction {
    pub outcome: ReactionOutcome,
    /// Velocity applied to the enemy
    pub victim_knockback: Vec2,
    /// Velocity applied to the hero
    pub attacker_recoil: Vec2,
}

impl Reaction {
    pub fn ignored() -> Self {
        Self {
            outcome: ReactionOutcome::Ignored,
            victim_knockback: Vec2::ZERO,
            attacker_recoil: Vec2::ZERO,
        }
    }

    pub fn killed(&self) -> bool {
        self.outcome == ReactionOutcome::Killed
    }
}

/// One attack issued by the hero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attack {
    pub kind: EnemyAttack,
    /// Direction from the hero to the enemy (not necessarily normalized)
    pub direction: Vec2,
    /// Damage multiplier of the current mode (running doubles the sword)
    pub damage_factor: u32,
}

impl Attack {
    pub fn new(kind: EnemyAttack, direction: Vec2) -> Self {
        Self {
            kind,
            direction,
            damage_factor: 1,
        }
    }

    pub fn with_damage_factor(mut self, factor: u32) -> Self {
        self.damage_factor = factor;
        self
    }
}

/// Resolve an attack against a resistance profile.
///
/// A custom reaction always takes precedence, even when the enemy is also
/// vulnerable to the attack.
pub fn resolve(attack: &Attack, profile: &ResistanceProfile) -> Reaction {
    if profile.is_custom(attack.kind) {
        return Reaction {
            outcome: ReactionOutcome::Custom,
            ..Reaction::ignored()
        };
    }

    let push = attack.direction.normalize_or_zero() * profile.knockback_speed;

    match profile.response(attack.kind) {
        AttackResponse::Ignored => Reaction::ignored(),
        AttackResponse::Protected => Reaction {
            outcome: ReactionOutcome::Protected,
            victim_knockback: Vec2::ZERO,
            attacker_recoil: if profile.push_hero_on_protected {
                -push
            } else {
                Vec2::ZERO
            },
        },
        AttackResponse::Immobilized => Reaction {
            outcome: ReactionOutcome::Immobilized,
            ..Reaction::ignored()
        },
        AttackResponse::Damage(base) => {
            let life_lost = base.saturating_mul(attack.damage_factor.max(1));
            let outcome = if life_lost >= profile.life {
                ReactionOutcome::Killed
            } else {
                ReactionOutcome::Hurt { life_lost }
            };
            Reaction {
                outcome,
                victim_knockback: if profile.pushed_back_when_hurt {
                    push
                } else {
                    Vec2::ZERO
                },
                attacker_recoil: Vec2::ZERO,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword_right() -> Attack {
        Attack::new(EnemyAttack::Sword, Vec2::new(1.0, 0.0))
    }

    #[test]
    fn test_sword_hurts_by_default() {
        let profile = ResistanceProfile::new(3);
        let reaction = resolve(&sword_right(), &profile);
        assert_eq!(reaction.outcome, ReactionOutcome::Hurt { life_lost: 1 });
        assert_eq!(reaction.victim_knockback, Vec2::new(120.0, 0.0));
        assert_eq!(reaction.attacker_recoil, Vec2::ZERO);
    }

    #[test]
    fn test_lethal_damage_kills() {
        let profile = ResistanceProfile::new(1);
        let reaction = resolve(&sword_right(), &profile);
        assert!(reaction.killed());
    }

    #[test]
    fn test_damage_factor_applies() {
        let profile = ResistanceProfile::new(4);
        let reaction = resolve(&sword_right().with_damage_factor(2), &profile);
        assert_eq!(reaction.outcome, ReactionOutcome::Hurt { life_lost: 2 });

        let reaction = resolve(&sword_right().with_damage_factor(4), &profile);
        assert_eq!(reaction.outcome, ReactionOutcome::Killed);
    }

    #[test]
    fn test_custom_takes_precedence_over_hurt() {
        let profile = ResistanceProfile::new(1).with_custom(EnemyAttack::Sword);
        // Vulnerable to the sword (it would be killed), but scripted
        assert_eq!(profile.response(EnemyAttack::Sword), AttackResponse::Damage(1));
        let reaction = resolve(&sword_right(), &profile);
        assert_eq!(reaction.outcome, ReactionOutcome::Custom);
        assert_eq!(reaction.victim_knockback, Vec2::ZERO);
    }

    #[test]
    fn test_protected_recoils_hero() {
        let profile = ResistanceProfile::new(3)
            .with_response(EnemyAttack::Sword, AttackResponse::Protected)
            .with_push_hero_on_protected(true);
        let reaction = resolve(&sword_right(), &profile);
        assert_eq!(reaction.outcome, ReactionOutcome::Protected);
        assert_eq!(reaction.attacker_recoil, Vec2::new(-120.0, 0.0));
    }

    #[test]
    fn test_immobilized_and_ignored() {
        let profile = ResistanceProfile::new(3);
        let boomerang = Attack::new(EnemyAttack::Boomerang, Vec2::X);
        assert_eq!(
            resolve(&boomerang, &profile).outcome,
            ReactionOutcome::Immobilized
        );

        let script = Attack::new(EnemyAttack::Script, Vec2::X);
        assert_eq!(resolve(&script, &profile), Reaction::ignored());
    }

    #[test]
    fn test_resolution_is_pure() {
        let profile = ResistanceProfile::new(2);
        let first = resolve(&sword_right(), &profile);
        let second = resolve(&sword_right(), &profile);
        assert_eq!(first, second);
        assert_eq!(profile.life, 2);
    }

    #[test]
    fn test_attack_names() {
        assert_eq!(EnemyAttack::Sword.name(), "sword");
        assert_eq!(EnemyAttack::ThrownItem.name(), "thrown_item");
    }
}
