//! Pluggable data fetching.
//!
//! External crates implement these against the MBTA APIs; tests
//! substitute canned responses. The core never performs I/O itself.

use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::identifiers::StopIdentifier;
use crate::performance::headway::Headway;
use crate::performance::window::QueryWindow;

/// Fetch observed headways for one stop inside a time window.
///
/// Implementations are queried once per stop when an index is built;
/// the calls may run concurrently and complete in any order. There is
/// no cancellation: a caller that changes its selection simply drops
/// the index built for the old one.
pub trait HeadwayFetcher: Send + Sync {
    fn fetch_headways<'a>(
        &'a self,
        stop_id: &'a StopIdentifier,
        window: QueryWindow,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Headway>>> + Send + 'a>>;
}
