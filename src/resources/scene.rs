//! Owning container for the objects of one screen.
//!
//! A screen creates its `Scene` in `enter` and clears it in `exit`, so every
//! object lives exactly as long as the activation that created it. Handles
//! are generational: a stale [`ObjectId`] never aliases a newer object.
//!
//! Despawning a handle that is not live is a programming error and panics.

use log::{debug, warn};

use crate::components::object::Object;

/// Handle to an object stored in a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId {
    index: u32,
    generation: u32,
}

/// Lifetime counters, checked when the scene is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub spawned: u64,
    pub despawned: u64,
}

impl SceneStats {
    /// Objects spawned and not yet despawned.
    pub fn live(&self) -> u64 {
        self.spawned - self.despawned
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    object: Option<Object>,
}

#[derive(Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    stats: SceneStats,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `object` and return its handle.
    pub fn spawn(&mut self, object: Object) -> ObjectId {
        self.stats.spawned += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.object = Some(object);
            return ObjectId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            object: Some(object),
        });
        ObjectId {
            index,
            generation: 0,
        }
    }

    /// Remove the object behind `id` and hand it back.
    ///
    /// # Panics
    /// If `id` is not live in this scene.
    pub fn despawn(&mut self, id: ObjectId) -> Object {
        let object = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| {
                let object = slot.object.take()?;
                slot.generation = slot.generation.wrapping_add(1);
                Some(object)
            })
            .unwrap_or_else(|| panic!("despawn of an object that is not live: {:?}", id));
        self.free.push(id.index);
        self.stats.despawned += 1;
        object
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.object.as_ref())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.object.as_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.slots.iter().filter_map(|slot| slot.object.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Object> {
        self.slots.iter_mut().filter_map(|slot| slot.object.as_mut())
    }

    pub fn len(&self) -> usize {
        self.stats.live() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a simulation step for every object. Must run before any movement
    /// of that step.
    pub fn begin_step(&mut self) {
        for object in self.iter_mut() {
            object.motion.begin_step();
        }
    }

    /// Release every live object. Returns how many were released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.object.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
                released += 1;
            }
        }
        self.stats.despawned += released as u64;

        debug!(
            "Scene cleared: {} released, {} spawned, {} despawned",
            released, self.stats.spawned, self.stats.despawned
        );
        if self.stats.spawned != self.stats.despawned {
            warn!(
                "Scene spawn/despawn mismatch after clear: {} vs {}",
                self.stats.spawned, self.stats.despawned
            );
        }
        released
    }

    pub fn stats(&self) -> SceneStats {
        self.stats
    }
}
