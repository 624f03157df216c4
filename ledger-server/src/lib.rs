//! Train reservation ledger server.
//!
//! Keeps passengers, trains and tickets, and answers questions about
//! them: free seats on a segment, passengers boarding at a station, the
//! oldest traveller, and which trains reach a station inside a time
//! window.

pub mod domain;
pub mod ledger;
pub mod queries;
pub mod store;
pub mod web;
