//! Spins every drawn shape a fixed amount per frame.
//!
//! Purely cosmetic and runs every frame, paused or not.

use shapestorm_core::components::{Shape, Transform};
use shapestorm_core::constants::SPIN_DEGREES_PER_FRAME;

use crate::store::EntityStore;

pub fn run(store: &mut EntityStore) {
    for entity in store.query().to_vec() {
        if !store.has::<Shape>(entity) {
            continue;
        }
        if let Some(mut transform) = store.get_mut::<Transform>(entity) {
            transform.angle = (transform.angle + SPIN_DEGREES_PER_FRAME).rem_euclid(360.0);
        }
    }
}
