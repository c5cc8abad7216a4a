//! Simulation engine for SHAPESTORM.
//!
//! Owns the entity store, runs the systems pipeline once per frame,
//! and produces `FrameSnapshot`s for the render side.

pub mod engine;
pub mod spawn;
pub mod store;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use shapestorm_core as core;
pub use store::{CommitStats, EntityStore};

/// Handle to an entity in the store. Copyable and generation-checked,
/// so a handle to a removed entity never aliases a newer one.
pub use hecs::Entity;
