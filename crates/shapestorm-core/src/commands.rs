//! Player commands produced by the input boundary.
//!
//! Commands are queued and applied during the input phase of a frame,
//! after the simulation passes and before the snapshot is built.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the player's directional intent.
    SetIntent {
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    },
    /// Fire a bullet from the player toward a point in world space.
    Fire { x: f32, y: f32 },
    /// Pause or resume the simulation.
    SetPaused { paused: bool },
    /// Flip the pause flag.
    TogglePause,
    /// Stop the frame loop.
    Quit,
}
