//! Movement system.
//!
//! Steers the player from its input intent, bounces hazards off the
//! play-area walls, then integrates `position += velocity` for everything.

use hecs::Entity;

use shapestorm_core::components::{CollisionBody, InputIntent, Shape, Transform};
use shapestorm_core::enums::Tag;
use shapestorm_core::types::Vec2;

use crate::store::EntityStore;

/// Run the full movement pass.
pub fn run(store: &mut EntityStore, play_area: Vec2, player_speed: f32) {
    steer_players(store, play_area, player_speed);
    reflect_off_walls(store, Tag::Enemy, play_area);
    reflect_off_walls(store, Tag::SmallEnemy, play_area);
    integrate(store);
}

/// Recompute player velocity from intent.
///
/// A direction only contributes if the step keeps the player's outline inside
/// the play area; otherwise that direction is zero for this frame.
pub fn steer_players(store: &mut EntityStore, play_area: Vec2, speed: f32) {
    for player in store.query_tag(Tag::Player).to_vec() {
        let Some(intent) = store.get::<InputIntent>(player).map(|i| *i) else {
            continue;
        };
        let extent = extent_of(store, player);
        let Some(mut transform) = store.get_mut::<Transform>(player) else {
            continue;
        };

        let pos = transform.position;
        let mut velocity = Vec2::ZERO;
        if intent.up && pos.y - speed >= extent {
            velocity.y -= speed;
        }
        if intent.down && pos.y + speed <= play_area.y - extent {
            velocity.y += speed;
        }
        if intent.left && pos.x - speed >= extent {
            velocity.x -= speed;
        }
        if intent.right && pos.x + speed <= play_area.x - extent {
            velocity.x += speed;
        }
        transform.velocity = velocity;
    }
}

/// Negate a velocity component when the leading edge would reach a wall
/// on this step while moving toward it. Each wall is checked on its own,
/// so a corner flips both axes.
pub fn reflect_off_walls(store: &mut EntityStore, tag: Tag, play_area: Vec2) {
    for entity in store.query_tag(tag).to_vec() {
        let extent = extent_of(store, entity);
        let Some(mut transform) = store.get_mut::<Transform>(entity) else {
            continue;
        };

        let next = transform.position + transform.velocity;
        let vel = &mut transform.velocity;
        if vel.x < 0.0 && next.x - extent <= 0.0 {
            vel.x = -vel.x;
        }
        if vel.x > 0.0 && next.x + extent >= play_area.x {
            vel.x = -vel.x;
        }
        if vel.y < 0.0 && next.y - extent <= 0.0 {
            vel.y = -vel.y;
        }
        if vel.y > 0.0 && next.y + extent >= play_area.y {
            vel.y = -vel.y;
        }
    }
}

/// Euler step for every committed entity with a transform.
pub fn integrate(store: &mut EntityStore) {
    for entity in store.query().to_vec() {
        if let Some(mut transform) = store.get_mut::<Transform>(entity) {
            let velocity = transform.velocity;
            transform.position += velocity;
        }
    }
}

/// Distance from the center to the entity's outer edge: drawn radius plus
/// outline, falling back to the collision radius.
fn extent_of(store: &EntityStore, entity: Entity) -> f32 {
    if let Some(shape) = store.get::<Shape>(entity) {
        return shape.extent();
    }
    store
        .get::<CollisionBody>(entity)
        .map(|body| body.radius)
        .unwrap_or(0.0)
}
