//! Raw headway observations from the performance feed.

use crate::identifiers::RouteIdentifier;

/// Travel direction (0 = outbound, 1 = inbound per GTFS)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Outbound = 0,
    Inbound = 1,
}

impl Direction {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Outbound),
            1 => Some(Self::Inbound),
            _ => None,
        }
    }
}

/// One observed gap between consecutive train departures at a stop.
///
/// Departure instants are unix seconds (the feed's `*_dep_dt` fields);
/// the benchmark is the scheduled gap the observation is judged against.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Headway {
    pub route_id: RouteIdentifier,
    pub prev_route_id: RouteIdentifier,
    pub direction: Direction,
    pub current_departure: i64,
    pub previous_departure: i64,
    pub headway_seconds: i64,
    pub benchmark_headway_seconds: i64,
}

impl Headway {
    /// Observed gap minus benchmark gap, in seconds. Positive means the
    /// train ran later than scheduled, negative earlier, zero on time.
    pub fn lateness(&self) -> f64 {
        (self.headway_seconds - self.benchmark_headway_seconds) as f64
    }
}
