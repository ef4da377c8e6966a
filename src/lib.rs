//! # bikeboard
//!
//! Leptos + WASM client with two independent views: a CRUD board of text
//! posts and a bike-station dashboard showing realtime availability next to a
//! model forecast.
//!
//! Pure view state lives in `state`, async orchestration in `controller`, and
//! the REST seams in `net`. The `csr` feature enables the browser transport
//! and entry point; without it the crate builds natively for tests.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
