//! Shared response handling for the `gloo-net` transports.
//!
//! Status classification is kept separate from the browser fetch so it can be
//! unit tested natively.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use crate::error::ClientError;

/// Map an HTTP status to the client error taxonomy.
///
/// # Errors
///
/// Returns [`ClientError::NotFound`] for 404 and [`ClientError::Status`] for
/// any other status outside 200..=299.
pub fn check_status(status: u16) -> Result<(), ClientError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(ClientError::NotFound),
        other => Err(ClientError::Status { status: other }),
    }
}

/// Join a configured base URL with an absolute API path.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(feature = "csr")]
pub(crate) fn network_error(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

/// Check the status, then decode the JSON body.
#[cfg(feature = "csr")]
pub(crate) async fn decode_json<T>(resp: gloo_net::http::Response) -> Result<T, ClientError>
where
    T: serde::de::DeserializeOwned,
{
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
pub(crate) fn transport_unavailable() -> ClientError {
    ClientError::Network("http transport requires the csr feature".to_owned())
}
