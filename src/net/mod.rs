//! Network layer: wire types, shared HTTP handling, and the two API seams.

pub mod http;
pub mod posts;
pub mod telemetry;
pub mod types;
