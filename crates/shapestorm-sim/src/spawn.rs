//! Entity factories.
//!
//! Each factory queues one kind of entity with its full component bundle.
//! New entities become visible to systems at the next commit.

use hecs::Entity;
use tracing::debug;

use shapestorm_core::components::*;
use shapestorm_core::config::{BulletConfig, EnemyConfig, PlayerConfig};
use shapestorm_core::constants::{FRAGMENT_SCORE_FACTOR, SCORE_MULTIPLIER};
use shapestorm_core::enums::Tag;
use shapestorm_core::types::{normalize_or_self, unit_from_degrees, Rgba, Vec2};

use crate::store::EntityStore;

/// Randomized parameters of a standard enemy, drawn by the spawner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyParams {
    pub position: Vec2,
    /// Unit direction of travel.
    pub direction: Vec2,
    pub speed: f32,
    pub sides: u32,
    pub fill: Rgba,
}

/// Queue the player at `position`, standing still.
pub fn spawn_player(store: &mut EntityStore, config: &PlayerConfig, position: Vec2) -> Entity {
    let player = store.add_entity(Tag::Player);
    store.insert(player, Transform::new(position, Vec2::ZERO));
    store.insert(
        player,
        Shape {
            radius: config.shape_radius,
            sides: config.vertices,
            fill: config.fill,
            outline: config.outline,
            outline_thickness: config.outline_thickness,
        },
    );
    store.insert(player, InputIntent::default());
    store.insert(
        player,
        CollisionBody {
            radius: config.collision_radius,
        },
    );
    player
}

/// Queue a standard enemy.
pub fn spawn_enemy(store: &mut EntityStore, config: &EnemyConfig, params: &EnemyParams) -> Entity {
    let enemy = store.add_entity(Tag::Enemy);
    store.insert(
        enemy,
        Transform::new(params.position, params.direction * params.speed),
    );
    store.insert(
        enemy,
        Shape {
            radius: config.shape_radius,
            sides: params.sides,
            fill: params.fill,
            outline: config.outline,
            outline_thickness: config.outline_thickness,
        },
    );
    store.insert(
        enemy,
        CollisionBody {
            radius: config.collision_radius,
        },
    );
    store.insert(
        enemy,
        Score {
            value: params.sides as i64 * SCORE_MULTIPLIER,
        },
    );
    debug!(
        x = params.position.x,
        y = params.position.y,
        sides = params.sides,
        speed = params.speed,
        "enemy spawned"
    );
    enemy
}

/// Break `parent` into one small enemy per polygon side, fanned out evenly.
///
/// Reads the parent's transform and shape, which remain readable after
/// `destroy` until the next commit. Returns the number of fragments queued.
pub fn spawn_fragments(store: &mut EntityStore, config: &EnemyConfig, parent: Entity) -> u32 {
    let Some(origin) = store.get::<Transform>(parent).map(|t| t.position) else {
        return 0;
    };
    let Some(shape) = store.get::<Shape>(parent).map(|s| *s) else {
        return 0;
    };

    let count = shape.sides;
    let step = 360.0 / count.max(1) as f32;
    for i in 0..count {
        let fragment = store.add_entity(Tag::SmallEnemy);
        store.insert(
            fragment,
            Transform::new(origin, unit_from_degrees(i as f32 * step)),
        );
        store.insert(
            fragment,
            Shape {
                radius: shape.radius / 2.0,
                ..shape
            },
        );
        store.insert(
            fragment,
            CollisionBody {
                radius: config.collision_radius / 2.0,
            },
        );
        store.insert(fragment, Lifespan::new(config.lifespan));
        store.insert(
            fragment,
            Score {
                value: FRAGMENT_SCORE_FACTOR * count as i64 * SCORE_MULTIPLIER,
            },
        );
    }
    debug!(count, x = origin.x, y = origin.y, "enemy fragmented");
    count
}

/// Queue a bullet leaving `origin` toward `target` at the configured speed.
///
/// A target equal to the origin has no direction; the bullet is then
/// created at rest and simply expires.
pub fn spawn_bullet(
    store: &mut EntityStore,
    config: &BulletConfig,
    origin: Vec2,
    target: Vec2,
) -> Entity {
    let direction = normalize_or_self(target - origin);
    let bullet = store.add_entity(Tag::Bullet);
    store.insert(bullet, Transform::new(origin, direction * config.speed));
    store.insert(
        bullet,
        Shape {
            radius: config.shape_radius,
            sides: config.vertices,
            fill: config.fill,
            outline: config.outline,
            outline_thickness: config.outline_thickness,
        },
    );
    store.insert(
        bullet,
        CollisionBody {
            radius: config.collision_radius,
        },
    );
    store.insert(bullet, Lifespan::new(config.lifespan));
    bullet
}
