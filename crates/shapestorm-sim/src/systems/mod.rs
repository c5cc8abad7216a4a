//! Systems that operate on the entity store each frame.
//!
//! Systems are free functions over explicit component sets. They hold no
//! state between entities; anything that persists lives in components or
//! in the engine. Structural changes they request (spawns, destroys) take
//! effect at the next commit.

pub mod collision;
pub mod lifespan;
pub mod movement;
pub mod rotation;
pub mod snapshot;
pub mod spawner;
