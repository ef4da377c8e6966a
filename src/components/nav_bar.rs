//! Top navigation switching between the dashboard and the board.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <A href="/">"Dashboard"</A>
            <A href="/board">"Board"</A>
        </nav>
    }
}
