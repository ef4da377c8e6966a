//! Dashboard controller: station listing plus the realtime/prediction fan-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each selection or refresh fires both per-station queries at once and joins
//! on both outcomes before touching state. Neither query short-circuits the
//! other; a failure only makes its own panel absent.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::telemetry::TelemetryApi;
use crate::state::dashboard::DashboardState;

/// Handle pairing a telemetry API with the dashboard's reactive state.
#[derive(Clone)]
pub struct DashboardController<A> {
    api: A,
    state: RwSignal<DashboardState>,
    station_limit: u32,
}

impl<A: TelemetryApi> DashboardController<A> {
    pub fn new(api: A, state: RwSignal<DashboardState>, config: &AppConfig) -> Self {
        Self { api, state, station_limit: config.station_limit }
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<DashboardState> {
        self.state
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Populate the station selector. Failures leave it empty.
    pub async fn load_stations(&self) {
        let result = self.api.list_stations(self.station_limit).await;
        match &result {
            Ok(stations) => log::debug!("loaded {} stations", stations.len()),
            Err(e) => log::warn!("station listing unavailable: {e}"),
        }
        self.state.try_update(|s| s.set_stations(result));
    }

    /// Select a station and query it. An empty id clears the selection.
    ///
    /// Returns whether a fan-out result was applied.
    pub async fn select(&self, station_id: &str) -> bool {
        let chosen = self.state.try_update(|s| s.select(station_id)).flatten();
        if chosen.is_none() {
            return false;
        }
        self.refresh().await
    }

    /// Re-run both queries for the current selection from scratch.
    ///
    /// Returns `false` with no selection, or when a newer query superseded
    /// this one before it settled.
    pub async fn refresh(&self) -> bool {
        let Some((token, station_id)) = self.state.try_update(DashboardState::begin_query).flatten() else {
            return false;
        };
        log::debug!("querying station {station_id} (token {token})");

        let (realtime, prediction) =
            futures::future::join(self.api.realtime(&station_id), self.api.prediction(&station_id)).await;

        if let Err(e) = &realtime {
            log::debug!("no realtime reading for {station_id}: {e}");
        }
        if let Err(e) = &prediction {
            log::debug!("no prediction for {station_id}: {e}");
        }

        let applied = self.state.try_update(|s| s.settle(token, realtime, prediction)).unwrap_or(false);
        if !applied {
            log::debug!("discarded stale result for {station_id} (token {token})");
        }
        applied
    }
}
