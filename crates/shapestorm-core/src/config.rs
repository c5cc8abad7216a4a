//! Game configuration consumed by the simulation.
//!
//! Values arrive already parsed (see the app crate's loader). Defaults
//! mirror the stock configuration the game ships with.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Rgba, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Frames per second cap; 0 runs unthrottled.
    pub frame_limit: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frame_limit: 60,
            fullscreen: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontConfig {
    pub file: String,
    pub size: u32,
    pub color: Rgba,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            file: "fonts/tech.ttf".to_string(),
            size: 24,
            color: Rgba::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub speed: f32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: f32,
    pub vertices: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            shape_radius: 32.0,
            collision_radius: 32.0,
            speed: 5.0,
            fill: Rgba::rgb(5, 5, 5),
            outline: Rgba::rgb(255, 0, 0),
            outline_thickness: 4.0,
            vertices: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnemyConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub outline: Rgba,
    pub outline_thickness: f32,
    pub vertices_min: u32,
    pub vertices_max: u32,
    /// Lifespan of the fragments a destroyed enemy leaves behind (frames).
    pub lifespan: u32,
    /// Frames between two enemy spawns.
    pub spawn_interval: u64,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            shape_radius: 32.0,
            collision_radius: 32.0,
            speed_min: 3.0,
            speed_max: 3.0,
            outline: Rgba::WHITE,
            outline_thickness: 2.0,
            vertices_min: 3,
            vertices_max: 8,
            lifespan: 90,
            spawn_interval: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub speed: f32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: f32,
    pub vertices: u32,
    pub lifespan: u32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            shape_radius: 10.0,
            collision_radius: 10.0,
            speed: 20.0,
            fill: Rgba::WHITE,
            outline: Rgba::WHITE,
            outline_thickness: 2.0,
            vertices: 20,
            lifespan: 90,
        }
    }
}

/// The full set of configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub font: FontConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
}

impl GameConfig {
    /// Size of the play area in world units.
    pub fn play_area(&self) -> Vec2 {
        Vec2::new(self.window.width as f32, self.window.height as f32)
    }

    /// Where the player starts and respawns.
    pub fn center(&self) -> Vec2 {
        self.play_area() / 2.0
    }

    /// Reject values the systems cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("window.width", self.window.width as f32)?;
        positive("window.height", self.window.height as f32)?;

        positive("player.shapeRadius", self.player.shape_radius)?;
        positive("player.collisionRadius", self.player.collision_radius)?;
        positive("player.speed", self.player.speed)?;
        non_negative("player.outlineThickness", self.player.outline_thickness)?;
        min_vertices("player.vertices", self.player.vertices)?;

        let enemy = &self.enemy;
        positive("enemy.shapeRadius", enemy.shape_radius)?;
        positive("enemy.collisionRadius", enemy.collision_radius)?;
        positive("enemy.speedMin", enemy.speed_min)?;
        positive("enemy.speedMax", enemy.speed_max)?;
        ordered("enemy.speed", enemy.speed_min, enemy.speed_max)?;
        non_negative("enemy.outlineThickness", enemy.outline_thickness)?;
        min_vertices("enemy.verticesMin", enemy.vertices_min)?;
        ordered(
            "enemy.vertices",
            enemy.vertices_min as f32,
            enemy.vertices_max as f32,
        )?;
        if enemy.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        let diameter = enemy.shape_radius * 2.0;
        if diameter >= self.window.width as f32 || diameter >= self.window.height as f32 {
            return Err(ConfigError::EnemyDoesNotFit {
                radius: enemy.shape_radius,
                width: self.window.width,
                height: self.window.height,
            });
        }

        positive("bullet.shapeRadius", self.bullet.shape_radius)?;
        positive("bullet.collisionRadius", self.bullet.collision_radius)?;
        positive("bullet.speed", self.bullet.speed)?;
        non_negative("bullet.outlineThickness", self.bullet.outline_thickness)?;
        min_vertices("bullet.vertices", self.bullet.vertices)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// NaN and infinities poison every boundary and overlap comparison.
fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { field, min, max })
    }
}

fn min_vertices(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value >= 3 {
        Ok(())
    } else {
        Err(ConfigError::TooFewVertices { field, value })
    }
}
