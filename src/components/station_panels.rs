//! Realtime and prediction cards for the station dashboard.
//!
//! Each card is rendered only when its value is present; the two never
//! depend on each other.

use leptos::prelude::*;

use crate::net::types::{Prediction, RealtimeReading};
use crate::util::format::{bikes_label, format_timestamp};

#[component]
pub fn RealtimePanel(reading: RealtimeReading) -> impl IntoView {
    let updated = format_timestamp(Some(reading.ts.as_str()));
    view! {
        <section class="station-panel station-panel--realtime">
            <h3>"Realtime"</h3>
            <p>"Station: " {reading.name}</p>
            <p>"Bikes available: " <strong>{bikes_label(reading.bikes)}</strong></p>
            <p>"Docks: " {reading.docks}</p>
            <p class="station-panel__ts">"Updated " {updated}</p>
        </section>
    }
}

#[component]
pub fn PredictionPanel(prediction: Prediction) -> impl IntoView {
    let target = format_timestamp(Some(prediction.target_time.as_str()));
    view! {
        <section class="station-panel station-panel--prediction">
            <h3>"Forecast"</h3>
            <p>"Predicted bikes: " <strong>{bikes_label(prediction.predicted_bikes)}</strong></p>
            <p>"Model: " {prediction.model_version}</p>
            <p class="station-panel__ts">"For " {target}</p>
        </section>
    }
}
