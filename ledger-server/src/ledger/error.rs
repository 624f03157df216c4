//! Ledger error types.

use crate::domain::{InvalidRoute, PassengerId, Station, TrainId};

/// Errors returned by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// No train is stored under the identity
    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    /// No passenger is stored under the identity
    #[error("passenger {0} not found")]
    PassengerNotFound(PassengerId),

    /// Nobody boards the train at the station, or the train does not call there
    #[error("Train is not passing from this station")]
    NoBoarding,

    /// The station list does not form a route
    #[error(transparent)]
    InvalidRoute(#[from] InvalidRoute),

    /// A train must have at least one seat
    #[error("train must have at least one seat")]
    InvalidSeats,

    /// A ticket must carry at least one passenger
    #[error("ticket must have at least one passenger")]
    EmptyTicket,

    /// The stations are off the route or out of route order
    #[error("cannot book {from} to {to}: stations are not on the route in travel order")]
    InvalidSegment { from: Station, to: Station },

    /// Not enough seats left on the segment
    #[error("only {available} seats available, {requested} requested")]
    InsufficientSeats { requested: usize, available: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(LedgerError::TrainNotFound(TrainId(4)).to_string(), "train 4 not found");
        assert_eq!(
            LedgerError::PassengerNotFound(PassengerId(9)).to_string(),
            "passenger 9 not found"
        );
        assert_eq!(
            LedgerError::NoBoarding.to_string(),
            "Train is not passing from this station"
        );
        assert_eq!(
            LedgerError::from(InvalidRoute::Empty).to_string(),
            "route must have at least one station"
        );
        assert_eq!(
            LedgerError::InvalidSegment {
                from: Station::Bhopal,
                to: Station::Delhi
            }
            .to_string(),
            "cannot book BHOPAL to DELHI: stations are not on the route in travel order"
        );
        assert_eq!(
            LedgerError::InsufficientSeats {
                requested: 3,
                available: 1
            }
            .to_string(),
            "only 1 seats available, 3 requested"
        );
    }
}
