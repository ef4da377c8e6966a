//! Display formatting for backend timestamps.
//!
//! The posts API sends local `LocalDateTime` strings without an offset; the
//! telemetry API sends RFC 3339 with an offset. Both render as
//! `YYYY. MM. DD. HH:MM` in the timestamp's own clock. Anything unparseable is
//! shown verbatim.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Format an optional backend timestamp; absent values render empty.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    parse_local(raw).unwrap_or_else(|| raw.to_owned())
}

fn parse_local(raw: &str) -> Option<String> {
    let display = format_description!("[year]. [month]. [day]. [hour]:[minute]");
    let local = match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(dt) => PrimitiveDateTime::new(dt.date(), dt.time()),
        Err(_) => PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).ok()?,
    };
    local.format(&display).ok()
}

/// Pluralised bike count label, e.g. `1 bike`, `4 bikes`.
#[must_use]
pub fn bikes_label(count: u32) -> String {
    if count == 1 { "1 bike".to_owned() } else { format!("{count} bikes") }
}
