//! In-memory repositories.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Passenger, Ticket, Train};

use super::{Entity, Repository, Store};

struct Table<T: Entity> {
    rows: BTreeMap<T::Id, T>,
    last_id: u32,
}

/// A repository backed by an ordered map behind a read/write lock.
///
/// Identities are allocated sequentially from 1. `find_all` iterates the
/// map, so results come back in ascending identity order.
pub struct MemoryRepository<T: Entity> {
    table: RwLock<Table<T>>,
}

impl<T: Entity> MemoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    // A panic inside `update` can leave one row half-changed, never the map itself.
    fn read(&self) -> RwLockReadGuard<'_, Table<T>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table<T>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn create<F>(&self, build: F) -> T
    where
        F: FnOnce(T::Id) -> T,
    {
        let mut table = self.write();
        table.last_id += 1;
        let entity = build(table.last_id.into());
        table.rows.insert(entity.id(), entity.clone());
        entity
    }

    fn update<R, F>(&self, id: T::Id, change: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.write().rows.get_mut(&id).map(change)
    }

    fn find_by_id(&self, id: T::Id) -> Option<T> {
        self.read().rows.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<T> {
        self.read().rows.values().cloned().collect()
    }
}

/// A [`Store`] holding every entity kind in memory.
#[derive(Default)]
pub struct MemoryStore {
    passengers: MemoryRepository<Passenger>,
    trains: MemoryRepository<Train>,
    tickets: MemoryRepository<Ticket>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    type Passengers = MemoryRepository<Passenger>;
    type Trains = MemoryRepository<Train>;
    type Tickets = MemoryRepository<Ticket>;

    fn passengers(&self) -> &Self::Passengers {
        &self.passengers
    }

    fn trains(&self) -> &Self::Trains {
        &self.trains
    }

    fn tickets(&self) -> &Self::Tickets {
        &self.tickets
    }
}
