//! Reservation ledger service.
//!
//! Resolves train and passenger identities through the injected store,
//! enforces the booking rules and runs the aggregate queries.

mod config;
mod error;
mod service;


pub use config::{
    ADDR_ENV, ConfigError, LEG_MINUTES_ENV, LedgerConfig, MAX_LEG_MINUTES, ServerConfig,
};
pub use error::LedgerError;
pub use service::{BookingRequest, Ledger, NewTrain};
