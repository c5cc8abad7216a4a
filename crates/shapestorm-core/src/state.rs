//! Frame snapshot: the visible state handed to the render side each frame.

use serde::{Deserialize, Serialize};

use crate::enums::Tag;
use crate::types::{Rgba, Vec2};

/// Everything the renderer and HUD need for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub score: i64,
    pub paused: bool,
    /// Drawable entities in committed insertion order.
    pub entities: Vec<EntityView>,
}

impl FrameSnapshot {
    /// Number of drawn entities carrying `tag`.
    pub fn count(&self, tag: Tag) -> usize {
        self.entities.iter().filter(|e| e.tag == tag).count()
    }
}

/// A single drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u64,
    pub tag: Tag,
    pub position: Vec2,
    /// Rotation in degrees.
    pub angle: f32,
    pub radius: f32,
    pub sides: u32,
    /// Fill color; alpha carries the lifespan fade.
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: f32,
}
