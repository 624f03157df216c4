//! Train routes and the per-station timing derived from them.

use std::collections::HashMap;
use std::fmt;

use super::{ClockTime, Station};

/// Error returned when a station sequence cannot form a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRoute {
    /// The route has no stations
    #[error("route must have at least one station")]
    Empty,

    /// A station is visited twice
    #[error("station {0} appears more than once in the route")]
    RepeatedStation(Station),
}

/// The ordered, duplicate-free sequence of stations a train visits.
///
/// # Examples
///
/// ```
/// use ledger_server::domain::{Route, Station};
///
/// let route = Route::new(vec![Station::Delhi, Station::Agra, Station::Bhopal]).unwrap();
/// assert_eq!(route.to_string(), "DELHI,AGRA,BHOPAL");
///
/// assert!(Route::new(vec![]).is_err());
/// assert!(Route::new(vec![Station::Agra, Station::Agra]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(Vec<Station>);

impl Route {
    /// Build a route, rejecting empty and self-crossing sequences.
    pub fn new(stations: Vec<Station>) -> Result<Self, InvalidRoute> {
        if stations.is_empty() {
            return Err(InvalidRoute::Empty);
        }
        for (idx, station) in stations.iter().enumerate() {
            if stations[..idx].contains(station) {
                return Err(InvalidRoute::RepeatedStation(*station));
            }
        }
        Ok(Self(stations))
    }

    /// Stations in visiting order.
    pub fn stations(&self) -> &[Station] {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, station) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(station.as_str())?;
        }
        Ok(())
    }
}

/// Lookup of station offsets and arrival times along one train's route.
///
/// Every leg between consecutive stations takes `leg_minutes`, so the
/// arrival at offset `i` is `departure + i * leg_minutes`. Arrival
/// minutes are not wrapped at midnight and are computed in `u64`, so no
/// leg length overflows.
#[derive(Debug, Clone)]
pub struct RouteIndex {
    positions: HashMap<Station, usize>,
    departure_minutes: u32,
    leg_minutes: u32,
}

impl RouteIndex {
    /// Build the index for a route departing at `departure`.
    pub fn new(route: &Route, departure: ClockTime, leg_minutes: u32) -> Self {
        let positions = route
            .stations()
            .iter()
            .enumerate()
            .map(|(idx, station)| (*station, idx))
            .collect();

        Self {
            positions,
            departure_minutes: departure.minutes(),
            leg_minutes,
        }
    }

    fn position_of(&self, station: Station) -> Option<usize> {
        self.positions.get(&station).copied()
    }

    /// Arrival time at `station` in minutes since midnight of the departure day.
    pub fn arrival_minutes(&self, station: Station) -> Option<u64> {
        self.position_of(station).map(|offset| {
            u64::from(self.departure_minutes) + offset as u64 * u64::from(self.leg_minutes)
        })
    }

    /// Whether `from` is strictly before `to` on this route.
    pub fn precedes(&self, from: Station, to: Station) -> bool {
        match (self.position_of(from), self.position_of(to)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }
}
