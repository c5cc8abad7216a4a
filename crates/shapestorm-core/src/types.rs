//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use glam::Vec2;

/// 8-bit RGBA color. Alpha 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "Rgba::opaque_alpha")]
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    /// Opaque color from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    fn opaque_alpha() -> u8 {
        255
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Normalize `v`, or return it unchanged when it has no direction.
///
/// A zero-length (or non-finite) vector is a recoverable condition here:
/// it is logged and passed through instead of turning into NaN.
pub fn normalize_or_self(v: Vec2) -> Vec2 {
    match v.try_normalize() {
        Some(unit) => unit,
        None => {
            warn!(x = v.x, y = v.y, "cannot normalize zero-length vector");
            v
        }
    }
}

/// Unit vector pointing along `degrees` (0 = +x, counter-clockwise towards +y).
pub fn unit_from_degrees(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Frame counter. Only advances while the simulation is unpaused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Number of simulated frames so far.
    pub frame: u64,
}

impl FrameClock {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}
