//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Freshness Analyzer"</h1>
            <p class="text-muted">"Upload an image to get started."</p>
        </header>
    }
}
