//! Station dashboard state.
//!
//! DESIGN
//! ======
//! The realtime and prediction panels are independent `Option`s: either may be
//! absent without implying anything about the other. Both are written in the
//! same `settle` call so the UI never shows one panel from a newer query next
//! to one from an older query. `query_seq` discards pairs that settle after a
//! newer query was started.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::error::ClientError;
use crate::net::types::{Prediction, RealtimeReading, Station};

/// Station selector contents and the latest reading/prediction pair.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub stations: Vec<Station>,
    pub selected_id: Option<String>,
    pub realtime: Option<RealtimeReading>,
    pub prediction: Option<Prediction>,
    pub loading: bool,
    /// Token of the most recent fan-out.
    pub query_seq: u64,
}

impl DashboardState {
    /// Store the station listing; a failed fetch leaves the selector empty.
    pub fn set_stations(&mut self, result: Result<Vec<Station>, ClientError>) {
        self.stations = result.unwrap_or_default();
    }

    /// Change the selected station.
    ///
    /// Returns the trimmed id when a station is selected, `None` when the
    /// selection was cleared. Switching stations drops both panels; clearing
    /// also abandons any in-flight query.
    pub fn select(&mut self, station_id: &str) -> Option<String> {
        let id = station_id.trim();
        if id.is_empty() {
            self.selected_id = None;
            self.realtime = None;
            self.prediction = None;
            self.query_seq += 1;
            self.loading = false;
            return None;
        }
        if self.selected_id.as_deref() != Some(id) {
            self.realtime = None;
            self.prediction = None;
            self.selected_id = Some(id.to_owned());
        }
        Some(id.to_owned())
    }

    /// Start a fan-out for the selected station, returning its token and id.
    pub fn begin_query(&mut self) -> Option<(u64, String)> {
        let id = self.selected_id.clone()?;
        self.query_seq += 1;
        self.loading = true;
        Some((self.query_seq, id))
    }

    /// Store both outcomes of a fan-out if `token` is still the latest.
    ///
    /// Returns `false` when the pair is stale and was discarded; the newer
    /// query still owns the loading flag in that case.
    pub fn settle(
        &mut self,
        token: u64,
        realtime: Result<RealtimeReading, ClientError>,
        prediction: Result<Prediction, ClientError>,
    ) -> bool {
        if token != self.query_seq {
            return false;
        }
        self.realtime = realtime.ok();
        self.prediction = prediction.ok();
        self.loading = false;
        true
    }

    /// Refresh is offered only with a selection and nothing in flight.
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.selected_id.is_some() && !self.loading
    }

    /// The "no data" hint shows once a selected station has settled without
    /// a realtime reading.
    #[must_use]
    pub fn shows_no_data(&self) -> bool {
        self.selected_id.is_some() && !self.loading && self.realtime.is_none()
    }
}
