//! Per-stop headway accumulation and queries.
//!
//! The index is the meeting point of the two halves of the dashboard:
//! fetched headway batches fold into it per stop, and every statistic
//! the panels display is a query against it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use tracing::warn;

use crate::identifiers::StopIdentifier;
use crate::models::path::Stop;
use crate::network::traits::HeadwayFetcher;
use crate::performance::headway::Headway;
use crate::performance::stats::{summarize, Extreme, LatenessSummary, LineExtreme};
use crate::performance::window::QueryWindow;

// ============================================================================
// Per-Stop Entry
// ============================================================================

/// One stop's accumulated headways, sorted ascending by departure time.
#[derive(Clone, Debug)]
pub struct StopHeadways {
    pub stop: Stop,
    headways: Vec<Headway>,
}

impl StopHeadways {
    fn new(stop: Stop) -> Self {
        Self {
            stop,
            headways: Vec::new(),
        }
    }

    pub fn headways(&self) -> &[Headway] {
        &self.headways
    }

    /// Latenesses in departure order.
    pub fn latenesses(&self) -> Vec<f64> {
        self.headways.iter().map(Headway::lateness).collect()
    }

    fn merge(&mut self, batch: Vec<Headway>) {
        self.headways.extend(batch);
        self.headways.sort_by_key(|h| h.current_departure);
    }
}

// ============================================================================
// Headway Index
// ============================================================================

/// Per-stop headway accumulator for one line.
///
/// Entries are keyed by stop id and iterate in the order stops appear
/// in the source path, so line-wide reductions and their tie-breaks are
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct HeadwayIndex {
    entries: Vec<StopHeadways>,
    by_id: HashMap<StopIdentifier, usize>,
}

impl HeadwayIndex {
    /// Seed one empty entry per stop, in path order. Duplicate ids keep
    /// their first occurrence.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let mut index = Self::default();
        for stop in stops {
            if !index.by_id.contains_key(&stop.id) {
                index.by_id.insert(stop.id.clone(), index.entries.len());
                index.entries.push(StopHeadways::new(stop.clone()));
            }
        }
        index
    }

    /// Fold one fetched batch into the entry for `stop_id`.
    ///
    /// The entry is re-sorted by departure after every append, so
    /// batches may arrive in any order. A batch for an unseeded id is
    /// dropped; the index cannot invent the stop it belongs to.
    pub fn merge_batch(&mut self, stop_id: &StopIdentifier, batch: Vec<Headway>) {
        match self.by_id.get(stop_id) {
            Some(&i) => self.entries[i].merge(batch),
            None => warn!(
                stop = %stop_id,
                dropped = batch.len(),
                "dropping headway batch for unknown stop"
            ),
        }
    }

    /// Fetch one headway batch per stop and fold them all into a fresh
    /// index.
    ///
    /// The fetches are issued concurrently and may complete in any
    /// order. A failed fetch logs a warning and leaves that stop's
    /// entry empty; an index is always produced.
    pub async fn build(
        stops: &[Stop],
        fetcher: &dyn HeadwayFetcher,
        window: QueryWindow,
    ) -> Self {
        let mut index = Self::from_stops(stops);

        let fetches: Vec<_> = index
            .entries
            .iter()
            .map(|entry| entry.stop.id.clone())
            .map(|id| async move {
                let result = fetcher.fetch_headways(&id, window).await;
                (id, result)
            })
            .collect();

        for (id, result) in join_all(fetches).await {
            match result {
                Ok(batch) => index.merge_batch(&id, batch),
                Err(error) => warn!(stop = %id, %error, "headway fetch failed, leaving entry empty"),
            }
        }

        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order.
    pub fn entries(&self) -> impl Iterator<Item = &StopHeadways> + '_ {
        self.entries.iter()
    }

    pub fn get(&self, stop_id: &StopIdentifier) -> Option<&StopHeadways> {
        self.by_id.get(stop_id).map(|&i| &self.entries[i])
    }

    /// Latenesses for one stop in departure order.
    ///
    /// Unknown ids and empty entries both yield an empty series.
    pub fn lateness_series(&self, stop_id: &StopIdentifier) -> Vec<f64> {
        self.get(stop_id)
            .map(StopHeadways::latenesses)
            .unwrap_or_default()
    }

    /// Departure instants for one stop, for chart axes. Departures that
    /// do not fit a representable instant are skipped.
    pub fn departures(&self, stop_id: &StopIdentifier) -> Vec<DateTime<Utc>> {
        self.get(stop_id)
            .map(|entry| {
                entry
                    .headways
                    .iter()
                    .filter_map(|h| DateTime::from_timestamp(h.current_departure, 0))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Summary statistics for one stop, `None` when it has no data.
    pub fn summary(&self, stop_id: &StopIdentifier) -> Option<LatenessSummary> {
        summarize(&self.lateness_series(stop_id))
    }

    /// The extreme lateness across every entry, attributed to the first
    /// entry in index order whose series contains that exact value.
    /// `None` when every series is empty.
    pub fn line_extreme(&self, extreme: Extreme) -> Option<LineExtreme> {
        let summary = self.line_summary()?;
        let value = match extreme {
            Extreme::Min => summary.min,
            Extreme::Max => summary.max,
        };

        self.entries
            .iter()
            .find(|entry| entry.latenesses().contains(&value))
            .map(|entry| LineExtreme {
                stop: entry.stop.clone(),
                value,
            })
    }

    /// Summary over the concatenation of every entry's series, in index
    /// order.
    pub fn line_summary(&self) -> Option<LatenessSummary> {
        let all: Vec<f64> = self
            .entries
            .iter()
            .flat_map(StopHeadways::latenesses)
            .collect();
        summarize(&all)
    }
}
