use super::{Entity, EntityId};

/// Flat entity store keyed by stable id.
///
/// Grid cells and groups refer to entities by [`EntityId`] only. Removal
/// leaves a tombstone so ids are never reused and dead entities never return.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    slots: Vec<Option<Entity>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next spawned entity will receive.
    pub fn next_id(&self) -> EntityId {
        EntityId(self.slots.len() as u32)
    }

    /// Stores an entity built for [`Self::next_id`].
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = self.next_id();
        debug_assert_eq!(entity.id, id, "entity built for a different slot");
        self.slots.push(Some(entity));
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Tombstones the entity; returns it only the first time.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    /// Living entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.slots.iter().flatten()
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|entity| entity.id).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
