//! Entity storage.
//!
//! The ledger never touches process-wide state: it receives a [`Store`]
//! and reads and writes entities through its repositories. Tests and the
//! server both use [`MemoryStore`].

mod memory;

use std::fmt::Debug;
use std::hash::Hash;

use crate::domain::{Passenger, PassengerId, Ticket, TicketId, Train, TrainId};

pub use memory::{MemoryRepository, MemoryStore};

/// A stored record with a store-assigned identity.
pub trait Entity: Clone {
    /// Identity type. Raw identities count up from 1.
    type Id: Copy + Ord + Hash + Debug + From<u32>;

    /// The entity's identity.
    fn id(&self) -> Self::Id;
}

impl Entity for Passenger {
    type Id = PassengerId;

    fn id(&self) -> PassengerId {
        self.id
    }
}

impl Entity for Train {
    type Id = TrainId;

    fn id(&self) -> TrainId {
        self.id
    }
}

impl Entity for Ticket {
    type Id = TicketId;

    fn id(&self) -> TicketId {
        self.id
    }
}

/// Create/read/update access to one kind of entity.
///
/// Reads return owned snapshots, so a caller sees a consistent view of an
/// entity for as long as it holds the value.
pub trait Repository<T: Entity> {
    /// Allocate the next identity, build the entity from it and store it.
    fn create<F>(&self, build: F) -> T
    where
        F: FnOnce(T::Id) -> T;

    /// Apply `change` to the stored entity in place and return its result.
    ///
    /// No other write to the repository can interleave with `change`.
    /// Returns `None` if nothing is stored under `id`.
    fn update<R, F>(&self, id: T::Id, change: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R;

    /// Look up an entity by identity.
    fn find_by_id(&self, id: T::Id) -> Option<T>;

    /// All entities in ascending identity order.
    fn find_all(&self) -> Vec<T>;
}

/// The set of repositories the ledger works against.
pub trait Store {
    type Passengers: Repository<Passenger>;
    type Trains: Repository<Train>;
    type Tickets: Repository<Ticket>;

    fn passengers(&self) -> &Self::Passengers;
    fn trains(&self) -> &Self::Trains;
    fn tickets(&self) -> &Self::Tickets;
}
