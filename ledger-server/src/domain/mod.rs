//! Domain types for the reservation ledger.
//!
//! Value types (`Station`, `ClockTime`, `Route`) validate at construction
//! time. Entities (`Passenger`, `Train`, `Ticket`) are plain data whose
//! identities are assigned by the store.

mod ids;
mod passenger;
mod route;
mod station;
mod ticket;
mod time;
mod train;

pub use ids::{PassengerId, TicketId, TrainId};
pub use passenger::Passenger;
pub use route::{InvalidRoute, Route, RouteIndex};
pub use station::{InvalidStation, Station};
pub use ticket::Ticket;
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
pub use train::Train;
