//! Train entity.

use super::{ClockTime, Route, RouteIndex, Ticket, TrainId};

/// A train with a fixed capacity running one route per day.
///
/// The ticket list only grows: tickets are appended by the booking path
/// and never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    pub id: TrainId,
    pub seats: u32,
    pub departure: ClockTime,
    pub route: Route,
    pub tickets: Vec<Ticket>,
}

impl Train {
    /// Create a train with no bookings.
    pub fn new(id: TrainId, seats: u32, departure: ClockTime, route: Route) -> Self {
        Self {
            id,
            seats,
            departure,
            route,
            tickets: Vec::new(),
        }
    }

    /// Build the station offset/arrival index for this train.
    pub fn route_index(&self, leg_minutes: u32) -> RouteIndex {
        RouteIndex::new(&self.route, self.departure, leg_minutes)
    }
}
