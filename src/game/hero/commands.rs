// Game commands as seen by the hero
//
// Mapping keys or gamepad buttons to commands is the host's business; the
// hero only receives already-resolved commands.

use std::collections::HashSet;

use glam::Vec2;

use crate::core::math::Direction4;

/// Represents all commands the hero reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Directions
    Right,
    Up,
    Left,
    Down,

    // Actions
    Action,
    Attack,
    Run,
    Item1,
    Item2,
}

impl Command {
    /// The direction this command stands for, if it is a direction command
    pub fn direction(&self) -> Option<Direction4> {
        match self {
            Self::Right => Some(Direction4::Right),
            Self::Up => Some(Direction4::Up),
            Self::Left => Some(Direction4::Left),
            Self::Down => Some(Direction4::Down),
            _ => None,
        }
    }
}

/// Which commands are currently held down
#[derive(Debug, Clone, Default)]
pub struct CommandState {
    pressed: HashSet<Command>,
}

impl CommandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, command: Command) {
        self.pressed.insert(command);
    }

    pub fn release(&mut self, command: Command) {
        self.pressed.remove(&command);
    }

    pub fn is_pressed(&self, command: Command) -> bool {
        self.pressed.contains(&command)
    }

    /// Release everything (e.g. when the game loses focus)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Movement wanted by the player, normalized; zero when opposite
    /// directions cancel out or nothing is pressed
    pub fn wanted_movement(&self) -> Vec2 {
        let sum: Vec2 = [Command::Right, Command::Up, Command::Left, Command::Down]
            .into_iter()
            .filter(|command| self.is_pressed(*command))
            .filter_map(|command| command.direction())
            .map(Direction4::to_vec)
            .sum();
        sum.normalize_or_zero()
    }
}
