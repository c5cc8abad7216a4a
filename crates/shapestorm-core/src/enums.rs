//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity category. Used only to index entities for queries,
/// never to dispatch behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Player,
    Enemy,
    /// Fragment left behind by a destroyed enemy.
    SmallEnemy,
    Bullet,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::Player, Tag::Enemy, Tag::SmallEnemy, Tag::Bullet];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "player" => Some(Tag::Player),
            "enemy" => Some(Tag::Enemy),
            "smallenemy" => Some(Tag::SmallEnemy),
            "bullet" => Some(Tag::Bullet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Player => "player",
            Tag::Enemy => "enemy",
            Tag::SmallEnemy => "smallenemy",
            Tag::Bullet => "bullet",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the collision pass treats an entity that overlaps several others
/// in the same tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitPolicy {
    /// An entity destroyed earlier in the pass takes part in no further
    /// collisions that tick, so fragmentation and scoring happen once.
    #[default]
    OncePerTick,
    /// Every overlapping pair is resolved, even when a participant was
    /// already destroyed this tick. One enemy overlapping two bullets
    /// fragments and scores twice.
    Repeat,
}
