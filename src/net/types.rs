//! Wire DTOs for the posts and telemetry APIs.
//!
//! DESIGN
//! ======
//! Field names mirror the backend payloads (`createdAt` from the posts API,
//! snake_case from the telemetry API) so deserialization needs no adapter
//! layer. Telemetry counts are parsed leniently because the prediction model
//! may emit fractional values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClientError;

// =============================================================================
// POSTS
// =============================================================================

/// Backend-assigned post identifier. Never constructed from user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post as returned by the posts API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Creation timestamp as sent by the backend (ISO-8601, usually without offset).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-modified timestamp, when the backend tracks one.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Post {
    /// True when the backend reports a modification after creation.
    #[must_use]
    pub fn was_edited(&self) -> bool {
        match (&self.created_at, &self.updated_at) {
            (Some(created), Some(updated)) => created != updated,
            _ => false,
        }
    }
}

/// Request body for create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into() }
    }

    /// Prefill a draft from an existing post for editing.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self { title: post.title.clone(), content: post.content.clone() }
    }

    /// Reject drafts whose title or content is blank after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.trim().is_empty() {
            return Err(ClientError::Validation { field: "title" });
        }
        if self.content.trim().is_empty() {
            return Err(ClientError::Validation { field: "content" });
        }
        Ok(())
    }
}

// =============================================================================
// TELEMETRY
// =============================================================================

/// A station entry from the telemetry listing. Reading fields that ride
/// along in the listing payload are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    #[serde(deserialize_with = "deserialize_id_string")]
    pub station_id: String,
    pub name: String,
}

/// Latest collected availability for one station.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealtimeReading {
    pub name: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub bikes: u32,
    #[serde(deserialize_with = "deserialize_count")]
    pub docks: u32,
    pub ts: String,
}

/// Model output for one station's near-future availability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(deserialize_with = "deserialize_count")]
    pub predicted_bikes: u32,
    pub model_version: String,
    pub target_time: String,
}

fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_u64() {
        return u32::try_from(int).map_err(|_| D::Error::custom(format!("count {int} out of range")));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float >= 0.0
        && float <= f64::from(u32::MAX)
    {
        return Ok(float.round() as u32);
    }
    Err(D::Error::custom("expected non-negative count"))
}
