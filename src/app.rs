//! Root application component with routing and configuration context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::pages::{board::BoardPage, dashboard::DashboardPage};

/// Root application component.
///
/// Resolves endpoint configuration once and provides it to both pages. The
/// pages share nothing else; each owns its own state for as long as its route
/// is mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    log::info!(
        "posts api: {}, telemetry api: {}, station limit: {}",
        config.posts_base_url,
        config.telemetry_base_url,
        config.station_limit
    );
    provide_context(config);

    view! {
        <Title text="Bikeboard"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("board") view=BoardPage/>
            </Routes>
        </Router>
    }
}
