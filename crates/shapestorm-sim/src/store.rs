//! Entity store: single owner of every entity.
//!
//! Structural changes are deferred. `add_entity` queues a new entity that
//! stays invisible to queries until the next `commit`, and `destroy` only
//! clears the alive flag; the entity is purged at the next `commit`. Systems
//! can therefore create and destroy entities mid-pass without disturbing the
//! committed sequences other passes iterate in the same frame.

use std::collections::HashMap;

use hecs::{Component, Entity, Ref, RefMut, World};
use tracing::{debug, trace};

use shapestorm_core::components::EntityMeta;
use shapestorm_core::enums::Tag;

/// What a `commit` changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub added: usize,
    pub removed: usize,
}

/// Owns all entities and their component records.
pub struct EntityStore {
    world: World,
    /// Live set in insertion order.
    committed: Vec<Entity>,
    /// Created since the last commit, in arrival order.
    pending: Vec<Entity>,
    /// Per-tag view over `committed`, same relative order.
    by_tag: HashMap<Tag, Vec<Entity>>,
    next_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            committed: Vec::new(),
            pending: Vec::new(),
            by_tag: HashMap::new(),
            next_id: 0,
        }
    }

    /// Create an entity. It can take components immediately but is not
    /// returned by any query until the next `commit`.
    pub fn add_entity(&mut self, tag: Tag) -> Entity {
        let id = self.next_id;
        self.next_id += 1;
        let entity = self.world.spawn((EntityMeta {
            id,
            tag,
            alive: true,
        },));
        self.pending.push(entity);
        trace!(id, %tag, "entity queued");
        entity
    }

    /// Attach or replace a component record.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) {
        if self.world.insert_one(entity, component).is_err() {
            debug!(?entity, "insert on unknown entity ignored");
        }
    }

    /// Mark an entity destroyed. Idempotent; removal happens at the next commit.
    pub fn destroy(&mut self, entity: Entity) {
        if let Ok(mut meta) = self.world.get::<&mut EntityMeta>(entity) {
            meta.alive = false;
        }
    }

    /// Make pending entities visible, then purge destroyed ones.
    ///
    /// Must run once per frame before any system reads entity state.
    pub fn commit(&mut self) -> CommitStats {
        let added = self.pending.len();
        for entity in self.pending.drain(..) {
            let tag = match self.world.get::<&EntityMeta>(entity) {
                Ok(meta) => meta.tag,
                Err(_) => continue,
            };
            self.committed.push(entity);
            self.by_tag.entry(tag).or_default().push(entity);
        }

        // Committed order, so slots are freed identically on every run.
        let dead: Vec<Entity> = self
            .committed
            .iter()
            .copied()
            .filter(|&entity| !alive_in(&self.world, entity))
            .collect();

        if !dead.is_empty() {
            let world = &self.world;
            self.committed.retain(|&entity| alive_in(world, entity));
            for bucket in self.by_tag.values_mut() {
                bucket.retain(|&entity| alive_in(world, entity));
            }
            for &entity in &dead {
                let _ = self.world.despawn(entity);
            }
        }

        CommitStats {
            added,
            removed: dead.len(),
        }
    }

    /// All committed entities in insertion order.
    pub fn query(&self) -> &[Entity] {
        &self.committed
    }

    /// Committed entities carrying `tag`, in insertion order.
    pub fn query_tag(&self, tag: Tag) -> &[Entity] {
        self.by_tag.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<Ref<'_, T>> {
        self.world.get::<&T>(entity).ok()
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<RefMut<'_, T>> {
        self.world.get::<&mut T>(entity).ok()
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.get::<T>(entity).is_some()
    }

    pub fn meta(&self, entity: Entity) -> Option<EntityMeta> {
        self.get::<EntityMeta>(entity).map(|meta| *meta)
    }

    pub fn id(&self, entity: Entity) -> Option<u64> {
        self.meta(entity).map(|meta| meta.id)
    }

    pub fn tag(&self, entity: Entity) -> Option<Tag> {
        self.meta(entity).map(|meta| meta.tag)
    }

    /// False once destroyed, and for handles the store no longer holds.
    pub fn is_alive(&self, entity: Entity) -> bool {
        alive_in(&self.world, entity)
    }

    /// Number of committed entities (dead ones included until the next commit).
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Entities created since the last commit, in arrival order.
    pub fn pending(&self) -> &[Entity] {
        &self.pending
    }
}

fn alive_in(world: &World, entity: Entity) -> bool {
    world
        .get::<&EntityMeta>(entity)
        .is_ok_and(|meta| meta.alive)
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapestorm_core::components::{Score, Transform};
    use shapestorm_core::types::Vec2;

    #[test]
    fn test_pending_entities_hidden_until_commit() {
        let mut store = EntityStore::new();
        let e = store.add_entity(Tag::Enemy);
        assert!(store.query().is_empty());
        assert!(store.query_tag(Tag::Enemy).is_empty());
        assert_eq!(store.pending_len(), 1);

        let stats = store.commit();
        assert_eq!(stats, CommitStats { added: 1, removed: 0 });
        assert_eq!(store.query(), &[e]);
        assert_eq!(store.query_tag(Tag::Enemy), &[e]);
        assert_eq!(store.pending_len(), 0);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut store = EntityStore::new();
        let a = store.add_entity(Tag::Player);
        let b = store.add_entity(Tag::Bullet);
        let c = store.add_entity(Tag::Bullet);
        assert_eq!(store.id(a), Some(0));
        assert_eq!(store.id(b), Some(1));
        assert_eq!(store.id(c), Some(2));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = EntityStore::new();
        let a = store.add_entity(Tag::Enemy);
        store.commit();
        store.destroy(a);
        store.commit();

        let b = store.add_entity(Tag::Enemy);
        assert_eq!(store.id(b), Some(1));
        assert!(store.meta(a).is_none(), "stale handle must not resolve");
    }

    #[test]
    fn test_components_attach_before_commit() {
        let mut store = EntityStore::new();
        let e = store.add_entity(Tag::Enemy);
        store.insert(e, Transform::new(Vec2::new(1.0, 2.0), Vec2::ZERO));
        store.insert(e, Score { value: 300 });
        store.commit();

        assert_eq!(store.get::<Transform>(e).unwrap().position, Vec2::new(1.0, 2.0));
        assert_eq!(store.get::<Score>(e).unwrap().value, 300);
        assert!(!store.has::<shapestorm_core::components::Lifespan>(e));
    }

    #[test]
    fn test_destroyed_entity_visible_until_commit() {
        let mut store = EntityStore::new();
        let e = store.add_entity(Tag::Bullet);
        store.commit();

        store.destroy(e);
        assert!(!store.is_alive(e));
        assert_eq!(store.query(), &[e], "removal is deferred");
        assert_eq!(store.query_tag(Tag::Bullet), &[e]);

        let stats = store.commit();
        assert_eq!(stats.removed, 1);
        assert!(store.query().is_empty());
        assert!(store.query_tag(Tag::Bullet).is_empty());
    }

    #[test]
    fn test_destroyed_while_pending_never_visible() {
        let mut store = EntityStore::new();
        let e = store.add_entity(Tag::SmallEnemy);
        store.destroy(e);
        let stats = store.commit();
        assert_eq!(stats, CommitStats { added: 1, removed: 1 });
        assert!(store.query().is_empty());
    }

    #[test]
    fn test_slot_reuse_is_reproducible() {
        let run = || {
            let mut store = EntityStore::new();
            let first: Vec<Entity> = (0..32).map(|_| store.add_entity(Tag::Bullet)).collect();
            store.commit();
            for &e in first.iter().step_by(3) {
                store.destroy(e);
            }
            store.commit();
            (0..16)
                .map(|_| store.add_entity(Tag::SmallEnemy).to_bits())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run(), "recycled handles depend only on the operations");
    }

    #[test]
    fn test_unknown_tag_query_is_empty() {
        let store = EntityStore::new();
        assert!(store.query_tag(Tag::Player).is_empty());
    }

    #[test]
    fn test_insert_on_removed_entity_is_ignored() {
        let mut store = EntityStore::new();
        let e = store.add_entity(Tag::Enemy);
        store.commit();
        store.destroy(e);
        store.commit();
        store.insert(e, Score { value: 1 });
        store.destroy(e);
        assert!(!store.has::<Score>(e));
        assert_eq!(store.commit(), CommitStats::default());
    }
}
