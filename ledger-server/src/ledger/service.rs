//! The ledger service: identity resolution, booking and queries.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    ClockTime, Passenger, PassengerId, Route, Station, Ticket, TicketId, Train, TrainId,
};
use crate::queries;
use crate::store::{Repository, Store};

use super::config::LedgerConfig;
use super::error::LedgerError;

/// Request to add a train.
#[derive(Debug, Clone)]
pub struct NewTrain {
    /// Stations in visiting order.
    pub route: Vec<Station>,

    /// Total seat capacity.
    pub seats: u32,

    /// Departure time from the first station.
    pub departure: ClockTime,
}

/// Request to book one ticket for a group of passengers.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub train_id: TrainId,
    pub passenger_ids: Vec<PassengerId>,
    pub from: Station,
    pub to: Station,
}

/// Reservation ledger over an injected store.
///
/// Queries are synchronous reads of store snapshots; each one sees a
/// single consistent copy of the train it inspects.
pub struct Ledger<S> {
    store: S,
    config: LedgerConfig,
}

impl<S: Store> Ledger<S> {
    /// Create a ledger over `store`.
    pub fn new(store: S, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    /// Register a passenger and return the assigned identity.
    pub fn add_passenger(&self, name: &str, age: u32) -> PassengerId {
        let passenger = self
            .store
            .passengers()
            .create(|id| Passenger::new(id, name, age));
        info!(passenger_id = %passenger.id, age, "registered passenger");
        passenger.id
    }

    /// Add a train with no bookings and return the assigned identity.
    pub fn add_train(&self, request: NewTrain) -> Result<TrainId, LedgerError> {
        if request.seats == 0 {
            return Err(LedgerError::InvalidSeats);
        }
        let route = Route::new(request.route)?;

        let train = self
            .store
            .trains()
            .create(|id| Train::new(id, request.seats, request.departure, route));
        info!(
            train_id = %train.id,
            route = %train.route,
            seats = train.seats,
            departure = %train.departure,
            "added train"
        );
        Ok(train.id)
    }

    /// Look up a train.
    pub fn find_train(&self, train_id: TrainId) -> Result<Train, LedgerError> {
        self.store
            .trains()
            .find_by_id(train_id)
            .ok_or(LedgerError::TrainNotFound(train_id))
    }

    /// Look up a passenger.
    pub fn find_passenger(&self, passenger_id: PassengerId) -> Result<Passenger, LedgerError> {
        self.store
            .passengers()
            .find_by_id(passenger_id)
            .ok_or(LedgerError::PassengerNotFound(passenger_id))
    }

    /// Book a ticket and attach it to the train.
    ///
    /// The segment must run forwards along the route, and the exact
    /// segment must have a seat for every passenger in the group. The
    /// capacity check and the append happen under the train's write lock,
    /// so concurrent bookings never overwrite each other.
    pub fn book_ticket(&self, request: BookingRequest) -> Result<TicketId, LedgerError> {
        let leg_minutes = self.config.leg_minutes;
        let ticket = self
            .store
            .trains()
            .update(request.train_id, |train| -> Result<Ticket, LedgerError> {
                if request.passenger_ids.is_empty() {
                    return Err(LedgerError::EmptyTicket);
                }
                let passengers = request
                    .passenger_ids
                    .iter()
                    .map(|id| self.find_passenger(*id).map(Arc::new))
                    .collect::<Result<Vec<_>, _>>()?;

                if !train
                    .route_index(leg_minutes)
                    .precedes(request.from, request.to)
                {
                    return Err(LedgerError::InvalidSegment {
                        from: request.from,
                        to: request.to,
                    });
                }

                let available = queries::available_seats(train, request.from, request.to);
                if available < passengers.len() as i64 {
                    return Err(LedgerError::InsufficientSeats {
                        requested: passengers.len(),
                        available,
                    });
                }

                let ticket = self.store.tickets().create(|id| Ticket {
                    id,
                    train_id: train.id,
                    from: request.from,
                    to: request.to,
                    passengers,
                });
                train.tickets.push(ticket.clone());
                Ok(ticket)
            })
            .ok_or(LedgerError::TrainNotFound(request.train_id))??;

        info!(
            ticket_id = %ticket.id,
            train_id = %ticket.train_id,
            from = %ticket.from,
            to = %ticket.to,
            passengers = ticket.seat_count(),
            "booked ticket"
        );
        Ok(ticket.id)
    }

    /// Tickets naming the passenger, in ascending ticket order.
    pub fn tickets_for_passenger(
        &self,
        passenger_id: PassengerId,
    ) -> Result<Vec<Ticket>, LedgerError> {
        self.find_passenger(passenger_id)?;
        Ok(self
            .store
            .tickets()
            .find_all()
            .into_iter()
            .filter(|ticket| ticket.carries(passenger_id))
            .collect())
    }

    /// Seats free on the train for exactly `from` → `to`.
    pub fn available_seats(
        &self,
        train_id: TrainId,
        from: Station,
        to: Station,
    ) -> Result<i64, LedgerError> {
        let train = self.find_train(train_id)?;
        let seats = queries::available_seats(&train, from, to);
        debug!(%train_id, %from, %to, seats, "available seats");
        Ok(seats)
    }

    /// Passengers boarding the train at `station`.
    ///
    /// Fails with [`LedgerError::NoBoarding`] when the count is zero,
    /// including when the train does not call at the station.
    pub fn boarding_count(&self, train_id: TrainId, station: Station) -> Result<u32, LedgerError> {
        let train = self.find_train(train_id)?;
        match queries::boarding_count(&train, station) {
            0 => Err(LedgerError::NoBoarding),
            count => {
                debug!(%train_id, %station, count, "boarding count");
                Ok(count)
            }
        }
    }

    /// Age of the oldest passenger on the train, 0 if it carries nobody.
    pub fn oldest_age(&self, train_id: TrainId) -> Result<u32, LedgerError> {
        let train = self.find_train(train_id)?;
        Ok(queries::oldest_age(&train))
    }

    /// Trains arriving at `station` within `start..=end`, by ascending id.
    pub fn trains_through(&self, station: Station, start: ClockTime, end: ClockTime) -> Vec<TrainId> {
        let trains = self.store.trains().find_all();
        let matches =
            queries::trains_through(&trains, station, start, end, self.config.leg_minutes);
        debug!(%station, %start, %end, matches = matches.len(), "trains through station");
        matches
    }
}
