//! Boarding counts and passenger demographics over a train's tickets.

use crate::domain::{Station, Train};

/// Number of passengers whose ticket starts at `station`.
///
/// Zero both when nobody boards there and when the train does not call
/// there; callers cannot tell the two apart from this count.
pub fn boarding_count(train: &Train, station: Station) -> u32 {
    train
        .tickets
        .iter()
        .filter(|ticket| ticket.from == station)
        .map(|ticket| ticket.seat_count() as u32)
        .sum()
}

/// Age of the oldest passenger on any ticket, or 0 for an empty train.
pub fn oldest_age(train: &Train) -> u32 {
    train
        .tickets
        .iter()
        .flat_map(|ticket| ticket.passengers.iter())
        .map(|passenger| passenger.age)
        .max()
        .unwrap_or(0)
}
