//! Time-window matching of trains through a station.

use crate::domain::{ClockTime, Station, Train, TrainId};

/// Trains whose arrival at `station` falls in `start..=end`.
///
/// Arrival is derived from each train's departure time and its offset on
/// the route, one `leg_minutes` per leg. Trains that do not call at the
/// station are skipped. An arrival that runs past midnight never matches,
/// since the window lies within a single day. The result is sorted by
/// ascending train id.
pub fn trains_through<'a, I>(
    trains: I,
    station: Station,
    start: ClockTime,
    end: ClockTime,
    leg_minutes: u32,
) -> Vec<TrainId>
where
    I: IntoIterator<Item = &'a Train>,
{
    let window = u64::from(start.minutes())..=u64::from(end.minutes());

    let mut matches: Vec<TrainId> = trains
        .into_iter()
        .filter(|train| {
            train
                .route_index(leg_minutes)
                .arrival_minutes(station)
                .is_some_and(|arrival| window.contains(&arrival))
        })
        .map(|train| train.id)
        .collect();

    matches.sort_unstable();
    matches
}
