//! Error types for the headway core.
//!
//! Every operation inside the core is total: empty or missing data is a
//! representable result, not an error. These errors exist only at the
//! fetch seam, where an implementation talks to the performance API.

use thiserror::Error;

use crate::identifiers::StopIdentifier;

#[derive(Debug, Error)]
pub enum HeadwayError {
    /// A fetcher implementation failed to retrieve headways for a stop.
    #[error("Failed to fetch headways for stop {stop}: {message}")]
    Fetch {
        stop: StopIdentifier,
        message: String,
    },

    /// A fetcher payload could not be decoded into headway records.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, HeadwayError>;
