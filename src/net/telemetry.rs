//! Station telemetry API: the [`TelemetryApi`] seam and its `gloo-net`
//! implementation.
//!
//! A 404 from either per-station endpoint is the normal answer for a station
//! the collector or model has not covered yet; callers treat it as "absent".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use async_trait::async_trait;

use super::http;
use super::types::{Prediction, RealtimeReading, Station};
use crate::config::AppConfig;
use crate::error::ClientError;

/// Read-only queries against the telemetry service.
#[async_trait(?Send)]
pub trait TelemetryApi {
    /// `GET /ai/realtime?limit={limit}`.
    async fn list_stations(&self, limit: u32) -> Result<Vec<Station>, ClientError>;

    /// `GET /ai/realtime/{station_id}`.
    async fn realtime(&self, station_id: &str) -> Result<RealtimeReading, ClientError>;

    /// `GET /ai/predict/{station_id}`.
    async fn prediction(&self, station_id: &str) -> Result<Prediction, ClientError>;
}

fn stations_endpoint(base: &str, limit: u32) -> String {
    http::endpoint(base, &format!("/ai/realtime?limit={limit}"))
}

/// `{base}/ai/{resource}/{station_id}` with the id percent-encoded as a single
/// path segment.
fn station_endpoint(base: &str, resource: &str, station_id: &str) -> Result<String, ClientError> {
    let mut url =
        url::Url::parse(base).map_err(|e| ClientError::Network(format!("invalid telemetry url {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ClientError::Network(format!("telemetry url {base} cannot take a path")))?
        .pop_if_empty()
        .extend(["ai", resource, station_id]);
    Ok(url.into())
}

fn realtime_endpoint(base: &str, station_id: &str) -> Result<String, ClientError> {
    station_endpoint(base, "realtime", station_id)
}

fn prediction_endpoint(base: &str, station_id: &str) -> Result<String, ClientError> {
    station_endpoint(base, "predict", station_id)
}

/// Browser HTTP client for the telemetry API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTelemetryApi {
    base_url: String,
}

impl HttpTelemetryApi {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.telemetry_base_url.clone() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(feature = "csr")]
    async fn get_json<T>(&self, url: &str) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(http::network_error)?;
        http::decode_json(resp).await
    }
}

#[async_trait(?Send)]
impl TelemetryApi for HttpTelemetryApi {
    async fn list_stations(&self, limit: u32) -> Result<Vec<Station>, ClientError> {
        let url = stations_endpoint(&self.base_url, limit);
        #[cfg(feature = "csr")]
        {
            self.get_json(&url).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(http::transport_unavailable())
        }
    }

    async fn realtime(&self, station_id: &str) -> Result<RealtimeReading, ClientError> {
        let url = realtime_endpoint(&self.base_url, station_id)?;
        #[cfg(feature = "csr")]
        {
            self.get_json(&url).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(http::transport_unavailable())
        }
    }

    async fn prediction(&self, station_id: &str) -> Result<Prediction, ClientError> {
        let url = prediction_endpoint(&self.base_url, station_id)?;
        #[cfg(feature = "csr")]
        {
            self.get_json(&url).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(http::transport_unavailable())
        }
    }
}
