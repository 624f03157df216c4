//! Seat availability for a station pair.
//!
//! Occupancy is tracked per advertised segment: only tickets booked for
//! exactly the queried `from` → `to` pair consume seats in the answer.
//! A ticket for DELHI → BHOPAL leaves DELHI → AGRA and AGRA → BHOPAL
//! untouched even though the physical seat is taken on both.

use crate::domain::{Station, Train};

/// Seats booked on `train` for exactly `from` → `to`.
pub fn booked_seats(train: &Train, from: Station, to: Station) -> i64 {
    train
        .tickets
        .iter()
        .filter(|ticket| ticket.covers_exactly(from, to))
        .map(|ticket| ticket.seat_count() as i64)
        .sum()
}

/// Seats still free on `train` for exactly `from` → `to`.
///
/// Not clamped: a train overbooked upstream reports a negative count.
pub fn available_seats(train: &Train, from: Station, to: Station) -> i64 {
    i64::from(train.seats) - booked_seats(train, from, to)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{ClockTime, Passenger, PassengerId, Route, Ticket, TicketId, TrainId};
    use proptest::prelude::*;
    use std::sync::Arc;

    const ROUTE: [Station; 4] = [Station::Delhi, Station::Agra, Station::Bhopal, Station::Mumbai];

    /// A forward segment on ROUTE as (from offset, to offset).
    fn segment() -> impl Strategy<Value = (usize, usize)> {
        (0usize..3).prop_flat_map(|from| (Just(from), (from + 1)..4))
    }

    fn make_train(seats: u32, bookings: &[((usize, usize), usize)]) -> Train {
        let mut train = Train::new(
            TrainId(1),
            seats,
            ClockTime::parse_hhmm("00:00").unwrap(),
            Route::new(ROUTE.to_vec()).unwrap(),
        );
        for (idx, ((from, to), group)) in bookings.iter().enumerate() {
            let passengers = (0..*group)
                .map(|p| Arc::new(Passenger::new(PassengerId(p as u32 + 1), "P", 20)))
                .collect();
            train.tickets.push(Ticket {
                id: TicketId(idx as u32 + 1),
                train_id: train.id,
                from: ROUTE[*from],
                to: ROUTE[*to],
                passengers,
            });
        }
        train
    }

    proptest! {
        /// A train with no tickets reports full capacity for every pair
        #[test]
        fn no_tickets_full_capacity(seats in 1u32..500, from in 0usize..4, to in 0usize..4) {
            let train = make_train(seats, &[]);
            prop_assert_eq!(available_seats(&train, ROUTE[from], ROUTE[to]), i64::from(seats));
        }

        /// Only tickets for the exact queried pair are subtracted
        #[test]
        fn only_exact_matches_count(
            seats in 1u32..500,
            bookings in prop::collection::vec((segment(), 1usize..4), 0..12),
            query in segment(),
        ) {
            let train = make_train(seats, &bookings);
            let expected: usize = bookings
                .iter()
                .filter(|(seg, _)| *seg == query)
                .map(|(_, group)| group)
                .sum();
            prop_assert_eq!(
                available_seats(&train, ROUTE[query.0], ROUTE[query.1]),
                i64::from(seats) - expected as i64
            );
        }
    }
}
