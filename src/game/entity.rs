// Views of map entities as seen by the hero
//
// Entity storage, collision geometry and ground resolution live outside this
// crate. The map hands the hero short-lived references built from these types.

use crate::core::math::Rect;

/// Unique identifier of a map entity
pub type EntityId = u32;

/// Borrowed description of a map entity the hero interacts with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityRef {
    pub id: EntityId,
    /// Bounding box in map coordinates
    pub bounds: Rect,
    /// Whether this entity blocks the hero (walls, bushes, pots...)
    pub obstacle: bool,
}

impl EntityRef {
    pub fn new(id: EntityId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            obstacle: false,
        }
    }

    /// Mark the entity as an obstacle for the hero
    pub fn as_obstacle(mut self) -> Self {
        self.obstacle = true;
        self
    }
}

/// Kinds of things that may or may not block the hero depending on its mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Wall,
    LowWall,
    ShallowWater,
    DeepWater,
    Hole,
    Lava,
    Prickle,
    Ladder,
    Teletransporter,
    Stairs,
    Sensor,
    Jumper,
    Switch,
    Crystal,
    Npc,
    Enemy,
}

impl ObstacleKind {
    /// Whether this kind is a dangerous ground the hero normally walks into
    /// and falls, drowns or gets hurt
    pub fn is_bad_ground(&self) -> bool {
        matches!(self, Self::DeepWater | Self::Hole | Self::Lava | Self::Prickle)
    }
}

/// Ground below the hero, as resolved by the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ground {
    #[default]
    Traversable,
    ShallowWater,
    DeepWater,
    Grass,
    Hole,
    Ice,
    Lava,
    Prickle,
    Ladder,
}
