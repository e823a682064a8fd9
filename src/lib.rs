// Rusted Hero: behavior core of the player-controlled hero

pub mod core;
pub mod engine;
pub mod game;
