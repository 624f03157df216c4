//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {name:?} is not a known station")]
pub struct InvalidStation {
    name: String,
}

/// A stop from the fixed network served by the ledger.
///
/// Declaration order is the enumeration order; it carries no meaning
/// for routes, which define their own ordering.
///
/// # Examples
///
/// ```
/// use ledger_server::domain::Station;
///
/// let agra = Station::parse("AGRA").unwrap();
/// assert_eq!(agra.as_str(), "AGRA");
///
/// // Names are case-sensitive
/// assert!(Station::parse("agra").is_err());
///
/// // ...unless normalised first
/// assert_eq!(Station::parse_normalized(" agra ").unwrap(), agra);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Station {
    Delhi,
    Mumbai,
    Kolkata,
    Chennai,
    Bengaluru,
    Hyderabad,
    Pune,
    Jaipur,
    Agra,
    Bhopal,
    Lucknow,
    Ahmedabad,
}

impl Station {
    /// Every station, in enumeration order.
    pub const ALL: [Station; 12] = [
        Station::Delhi,
        Station::Mumbai,
        Station::Kolkata,
        Station::Chennai,
        Station::Bengaluru,
        Station::Hyderabad,
        Station::Pune,
        Station::Jaipur,
        Station::Agra,
        Station::Bhopal,
        Station::Lucknow,
        Station::Ahmedabad,
    ];

    /// Parse a station from its upper-case name.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        Self::ALL
            .iter()
            .copied()
            .find(|station| station.as_str() == s)
            .ok_or_else(|| InvalidStation {
                name: s.to_string(),
            })
    }

    /// Parse a station after trimming whitespace and upper-casing.
    ///
    /// Used for user input from query strings and paths.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStation> {
        Self::parse(&s.trim().to_uppercase())
    }

    /// Returns the upper-case station name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Station::Delhi => "DELHI",
            Station::Mumbai => "MUMBAI",
            Station::Kolkata => "KOLKATA",
            Station::Chennai => "CHENNAI",
            Station::Bengaluru => "BENGALURU",
            Station::Hyderabad => "HYDERABAD",
            Station::Pune => "PUNE",
            Station::Jaipur => "JAIPUR",
            Station::Agra => "AGRA",
            Station::Bhopal => "BHOPAL",
            Station::Lucknow => "LUCKNOW",
            Station::Ahmedabad => "AHMEDABAD",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
