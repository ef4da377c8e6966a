//! Endpoint configuration resolved once at startup.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment, so values are baked in at
//! build time through `option_env!` and parsed by [`AppConfig::from_values`].
//! The resulting `AppConfig` is provided as Leptos context and handed to each
//! API client at construction; nothing reads configuration globally after that.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_POSTS_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TELEMETRY_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_STATION_LIMIT: u32 = 50;

/// Base URLs and listing bounds for both collaborator APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the posts REST API (no trailing slash).
    pub posts_base_url: String,
    /// Root of the station telemetry API (no trailing slash).
    pub telemetry_base_url: String,
    /// Upper bound on stations requested for the dashboard selector.
    pub station_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            posts_base_url: DEFAULT_POSTS_BASE_URL.to_owned(),
            telemetry_base_url: DEFAULT_TELEMETRY_BASE_URL.to_owned(),
            station_limit: DEFAULT_STATION_LIMIT,
        }
    }
}

impl AppConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `BIKEBOARD_POSTS_API`: default `http://localhost:8080`
    /// - `BIKEBOARD_TELEMETRY_API`: default `http://localhost:8000`
    /// - `BIKEBOARD_STATION_LIMIT`: default 50
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("BIKEBOARD_POSTS_API"),
            option_env!("BIKEBOARD_TELEMETRY_API"),
            option_env!("BIKEBOARD_STATION_LIMIT"),
        )
    }

    /// Build config from raw optional values, applying defaults for anything
    /// missing, blank, or unparseable.
    #[must_use]
    pub fn from_values(posts: Option<&str>, telemetry: Option<&str>, station_limit: Option<&str>) -> Self {
        Self {
            posts_base_url: base_url_or(posts, DEFAULT_POSTS_BASE_URL),
            telemetry_base_url: base_url_or(telemetry, DEFAULT_TELEMETRY_BASE_URL),
            station_limit: parse_limit(station_limit),
        }
    }
}

fn base_url_or(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}

fn parse_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_STATION_LIMIT)
}
