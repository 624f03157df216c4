//! Ticket entity.

use std::sync::Arc;

use super::{Passenger, PassengerId, Station, TicketId, TrainId};

/// A reservation for a group of passengers between two stations.
///
/// All passengers share the segment and each consumes one seat on it.
/// The booking path guarantees that both stations are on the train's
/// route with `from` strictly before `to`; nothing here re-checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub train_id: TrainId,
    pub from: Station,
    pub to: Station,
    pub passengers: Vec<Arc<Passenger>>,
}

impl Ticket {
    /// Number of seats this ticket consumes.
    pub fn seat_count(&self) -> usize {
        self.passengers.len()
    }

    /// Whether the ticket was booked for exactly `from` → `to`.
    pub fn covers_exactly(&self, from: Station, to: Station) -> bool {
        self.from == from && self.to == to
    }

    /// Whether `passenger` travels on this ticket.
    pub fn carries(&self, passenger: PassengerId) -> bool {
        self.passengers.iter().any(|p| p.id == passenger)
    }
}
