//! Snapshot system: builds the per-frame `FrameSnapshot` from the store.
//!
//! Read-only; it never modifies the store.

use shapestorm_core::components::{Shape, Transform};
use shapestorm_core::state::{EntityView, FrameSnapshot};
use shapestorm_core::types::FrameClock;

use crate::store::EntityStore;

/// Build the snapshot of every committed entity that can be drawn.
pub fn build_snapshot(
    store: &EntityStore,
    clock: &FrameClock,
    score: i64,
    paused: bool,
) -> FrameSnapshot {
    FrameSnapshot {
        frame: clock.frame,
        score,
        paused,
        entities: build_entities(store),
    }
}

/// Entities with both a transform and a shape, in insertion order.
fn build_entities(store: &EntityStore) -> Vec<EntityView> {
    store
        .query()
        .iter()
        .filter_map(|&entity| {
            let meta = store.meta(entity)?;
            let transform = *store.get::<Transform>(entity)?;
            let shape = *store.get::<Shape>(entity)?;
            Some(EntityView {
                id: meta.id,
                tag: meta.tag,
                position: transform.position,
                angle: transform.angle,
                radius: shape.radius,
                sides: shape.sides,
                fill: shape.fill,
                outline: shape.outline,
                outline_thickness: shape.outline_thickness,
            })
        })
        .collect()
}
