//! Web layer for the reservation ledger.
//!
//! Exposes each ledger operation as one JSON endpoint.

mod dto;
mod routes;
mod state;

#[cfg(test)]
mod routes_tests;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
