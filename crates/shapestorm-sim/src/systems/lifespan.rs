//! Lifespan system: counts down finite-lived entities and fades them out.

use shapestorm_core::components::{Lifespan, Shape};
use shapestorm_core::constants::COLOR_CHANNEL_MAX;

use crate::store::EntityStore;

/// Tick every lifespan. Returns how many entities expired this frame.
///
/// Expired entities are only marked destroyed; they leave the store at
/// the next commit.
pub fn run(store: &mut EntityStore) -> usize {
    let mut expired = 0;

    for entity in store.query().to_vec() {
        let alive = store.is_alive(entity);
        let (remaining, total) = {
            let Some(mut life) = store.get_mut::<Lifespan>(entity) else {
                continue;
            };
            if life.remaining > 0 {
                life.remaining -= 1;
            }
            (life.remaining, life.total)
        };

        if alive {
            if let Some(mut shape) = store.get_mut::<Shape>(entity) {
                shape.fill.a = fade_alpha(remaining, total);
            }
        }

        if remaining == 0 && alive {
            store.destroy(entity);
            expired += 1;
        }
    }

    expired
}

/// Fill alpha proportional to the fraction of life left.
pub fn fade_alpha(remaining: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = u64::from(COLOR_CHANNEL_MAX) * u64::from(remaining.min(total)) / u64::from(total);
    scaled as u8
}
