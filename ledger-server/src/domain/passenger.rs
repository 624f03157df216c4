//! Passenger entity.

use super::PassengerId;

/// A registered traveller.
///
/// Immutable once registered. The tickets a passenger appears on are not
/// stored here; they are derived from the ticket ledger on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    pub age: u32,
}

impl Passenger {
    /// Create a passenger with an already assigned identity.
    pub fn new(id: PassengerId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}
