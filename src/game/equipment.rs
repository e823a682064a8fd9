// Equipment collaborator
//
// The hero only ever *queries* equipment. Item data, scripting and life
// bookkeeping are owned by the game; `BasicEquipment` is a small in-memory
// implementation for hosts that do not have their own.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// Built-in abilities the hero may have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Sword,
    Shield,
    Swim,
    Run,
}

/// Read-only equipment queries used by the behavioral modes
pub trait Equipment: std::fmt::Debug {
    /// Whether the hero currently has an ability
    fn has_ability(&self, ability: Ability) -> bool;

    /// Current life points
    fn life(&self) -> u32;
}

/// An item lying on the map that the hero may pick up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasureItem {
    pub name: String,
    /// Whether picking the item shows the brandish animation
    pub brandish: bool,
}

impl TreasureItem {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            brandish: false,
        }
    }

    /// Item that is brandished above the hero's head when picked
    pub fn brandished(name: &str) -> Self {
        Self {
            name: name.to_string(),
            brandish: true,
        }
    }
}

/// In-memory equipment with interior mutability, so the host can keep a
/// shared handle and change it while the hero holds another one
#[derive(Debug, Default)]
pub struct BasicEquipment {
    abilities: RefCell<HashSet<Ability>>,
    life: Cell<u32>,
}

impl BasicEquipment {
    pub fn new(life: u32) -> Self {
        Self {
            abilities: RefCell::new(HashSet::new()),
            life: Cell::new(life),
        }
    }

    /// Equipment with a starting set of abilities
    pub fn with_abilities(life: u32, abilities: &[Ability]) -> Self {
        let equipment = Self::new(life);
        for ability in abilities {
            equipment.add_ability(*ability);
        }
        equipment
    }

    pub fn add_ability(&self, ability: Ability) {
        self.abilities.borrow_mut().insert(ability);
    }

    pub fn remove_ability(&self, ability: Ability) {
        self.abilities.borrow_mut().remove(&ability);
    }

    pub fn set_life(&self, life: u32) {
        self.life.set(life);
    }

    /// Remove life points, saturating at zero
    pub fn remove_life(&self, amount: u32) {
        self.life.set(self.life.get().saturating_sub(amount));
    }
}

impl Equipment for BasicEquipment {
    fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.borrow().contains(&ability)
    }

    fn life(&self) -> u32 {
        self.life.get()
    }
}
