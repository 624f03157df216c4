//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{PassengerId, Station, Ticket, TicketId, Train, TrainId};

/// Request to register a passenger.
#[derive(Debug, Deserialize)]
pub struct AddPassengerRequest {
    pub name: String,
    pub age: u32,
}

/// Response for passenger registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddPassengerResponse {
    pub passenger_id: PassengerId,
}

/// Request to add a train.
#[derive(Debug, Deserialize)]
pub struct AddTrainRequest {
    /// Stations in visiting order
    pub route: Vec<Station>,

    /// Seat capacity
    pub seats: u32,

    /// Departure time in HH:MM format
    pub departure: String,
}

/// Response for train creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddTrainResponse {
    pub train_id: TrainId,
}

/// Request to book a ticket.
#[derive(Debug, Deserialize)]
pub struct BookTicketRequest {
    pub train_id: TrainId,
    pub passenger_ids: Vec<PassengerId>,
    pub from: Station,
    pub to: Station,
}

/// Response for a booking.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookTicketResponse {
    pub ticket_id: TicketId,
}

/// Query string for seat availability.
#[derive(Debug, Deserialize)]
pub struct SeatsQuery {
    pub from: String,
    pub to: String,
}

/// Seat availability for an exact segment.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeatsResponse {
    pub train_id: TrainId,
    pub from: Station,
    pub to: Station,
    pub available_seats: i64,
}

/// Number of passengers boarding at a station.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoardingResponse {
    pub train_id: TrainId,
    pub station: Station,
    pub boarding: u32,
}

/// Age of the oldest passenger on a train.
#[derive(Debug, Serialize, Deserialize)]
pub struct OldestResponse {
    pub train_id: TrainId,
    pub oldest_age: u32,
}

/// Query string for the schedule window.
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// Window start in HH:MM format (inclusive)
    pub start: String,

    /// Window end in HH:MM format (inclusive)
    pub end: String,
}

/// Trains arriving at a station inside a time window.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainsThroughResponse {
    pub station: Station,
    pub train_ids: Vec<TrainId>,
}

/// A train with its bookings.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainView {
    pub train_id: TrainId,
    pub seats: u32,
    pub departure: String,
    pub route: Vec<Station>,
    pub tickets: Vec<TicketView>,
}

impl TrainView {
    pub fn from_train(train: &Train) -> Self {
        Self {
            train_id: train.id,
            seats: train.seats,
            departure: train.departure.to_string(),
            route: train.route.stations().to_vec(),
            tickets: train.tickets.iter().map(TicketView::from_ticket).collect(),
        }
    }
}

/// A booked ticket.
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketView {
    pub ticket_id: TicketId,
    pub train_id: TrainId,
    pub from: Station,
    pub to: Station,
    pub passenger_ids: Vec<PassengerId>,
}

impl TicketView {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.id,
            train_id: ticket.train_id,
            from: ticket.from,
            to: ticket.to,
            passenger_ids: ticket.passengers.iter().map(|p| p.id).collect(),
        }
    }
}

/// Tickets a passenger appears on.
#[derive(Debug, Serialize, Deserialize)]
pub struct PassengerTicketsResponse {
    pub passenger_id: PassengerId,
    pub tickets: Vec<TicketView>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
