// Enemy side of combat, as far as the hero is concerned
//
// Enemy AI and internal state are not part of this crate. Only the reaction
// contract (attack + resistance profile -> outcome) is defined here.

pub mod reaction;

pub use reaction::{
    resolve, Attack, AttackResponse, EnemyAttack, Reaction, ReactionOutcome, ResistanceProfile,
};
