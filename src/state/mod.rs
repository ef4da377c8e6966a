//! Plain view state for both pages.
//!
//! These structs hold no signals or futures; controllers wrap them in an
//! `RwSignal` and drive the transitions around network calls.

pub mod board;
pub mod dashboard;
