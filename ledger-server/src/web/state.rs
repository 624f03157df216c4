//! Application state for the web layer.

use std::sync::Arc;

use crate::ledger::{Ledger, LedgerConfig};
use crate::store::MemoryStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Reservation ledger over the in-memory store
    pub ledger: Arc<Ledger<MemoryStore>>,
}

impl AppState {
    /// Create state with an empty store.
    pub fn new(config: LedgerConfig) -> Self {
        Self::from_ledger(Ledger::new(MemoryStore::new(), config))
    }

    /// Wrap an existing ledger.
    pub fn from_ledger(ledger: Ledger<MemoryStore>) -> Self {
        Self {
            ledger: Arc::new(ledger),
        }
    }
}
