//! Dashboard page: station selector with realtime and forecast cards.

use leptos::prelude::*;

use crate::components::station_panels::{PredictionPanel, RealtimePanel};
use crate::config::AppConfig;
use crate::controller::dashboard::DashboardController;
use crate::net::telemetry::HttpTelemetryApi;
use crate::state::dashboard::DashboardState;

/// Dashboard page. Loads the station list on mount; every selection change or
/// refresh re-queries both panels.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let state = RwSignal::new(DashboardState::default());
    let ctrl = StoredValue::new(DashboardController::new(HttpTelemetryApi::new(&config), state, &config));

    leptos::task::spawn_local({
        let ctrl = ctrl.get_value();
        async move { ctrl.load_stations().await }
    });

    let on_select = move |ev: leptos::ev::Event| {
        let station_id = event_target_value(&ev);
        let ctrl = ctrl.get_value();
        leptos::task::spawn_local(async move {
            ctrl.select(&station_id).await;
        });
    };

    let on_refresh = move |_| {
        let ctrl = ctrl.get_value();
        leptos::task::spawn_local(async move {
            ctrl.refresh().await;
        });
    };

    view! {
        <div class="dashboard-page">
            <h2 class="dashboard-page__title">"Bike station dashboard"</h2>

            <select
                class="dashboard-page__select"
                prop:value=move || state.with(|s| s.selected_id.clone().unwrap_or_default())
                on:change=on_select
            >
                <option value="">"-- Select a station --"</option>
                {move || {
                    state
                        .with(|s| s.stations.clone())
                        .into_iter()
                        .map(|station| view! { <option value=station.station_id>{station.name}</option> })
                        .collect_view()
                }}
            </select>

            <button
                class="btn dashboard-page__refresh"
                disabled=move || !state.with(DashboardState::can_refresh)
                on:click=on_refresh
            >
                {move || if state.with(|s| s.loading) { "Loading..." } else { "Refresh" }}
            </button>

            {move || state.with(|s| s.realtime.clone()).map(|reading| view! { <RealtimePanel reading=reading/> })}
            {move || {
                state
                    .with(|s| s.prediction.clone())
                    .map(|prediction| view! { <PredictionPanel prediction=prediction/> })
            }}

            <Show when=move || state.with(DashboardState::shows_no_data)>
                <p class="dashboard-page__empty">"No data for this station yet. Run the collector first."</p>
            </Show>
        </div>
    }
}
