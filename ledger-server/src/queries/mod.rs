//! Aggregate queries over the ticket ledger.
//!
//! Every function here is a pure read over one or more `Train` snapshots.
//! Identity resolution and error reporting live in [`crate::ledger`].

mod availability;
mod boarding;
mod schedule;

pub use availability::{available_seats, booked_seats};
pub use boarding::{boarding_count, oldest_age};
pub use schedule::trains_through;
