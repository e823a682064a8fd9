// Game layer: the hero and the collaborators it talks to
//
// - `entity`: lightweight views of map entities, obstacles and grounds
// - `equipment`: read-only equipment queries
// - `enemy`: enemy reaction protocol
// - `hero`: hero context and behavioral modes

pub mod enemy;
pub mod entity;
pub mod equipment;
pub mod hero;
