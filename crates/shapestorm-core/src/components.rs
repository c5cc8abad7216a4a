//! Component records attached to entities in the store.
//!
//! Components are plain data with no behavior. Any of them may be absent;
//! a system simply skips entities that lack what it reads.

use serde::{Deserialize, Serialize};

use crate::enums::Tag;
use crate::types::{Rgba, Vec2};

/// Identity of every entity. Attached by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta {
    /// Process-unique, monotonic, never reused.
    pub id: u64,
    pub tag: Tag,
    /// Cleared by `destroy`; the entity is removed at the next commit.
    pub alive: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Displacement per frame.
    pub velocity: Vec2,
    /// Draw rotation in degrees.
    pub angle: f32,
}

impl Transform {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            angle: 0.0,
        }
    }
}

/// Regular polygon drawn around the entity position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub radius: f32,
    pub sides: u32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: f32,
}

impl Shape {
    /// Distance from the center to the outer edge of the outline.
    pub fn extent(&self) -> f32 {
        self.radius + self.outline_thickness
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionBody {
    pub radius: f32,
}

/// Directional intent set by the input boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Points awarded when this entity is destroyed by a bullet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: i64,
}

/// Remaining frames before the entity expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifespan {
    pub total: u32,
    pub remaining: u32,
}

impl Lifespan {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
        }
    }
}
