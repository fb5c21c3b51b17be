//! Card Grid Component
//!
//! Container for the rendered catalog plus a one-line load status.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::models::{Card, LoadStatus};

fn status_line(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Loading => "Loading...".to_string(),
        LoadStatus::Loaded(count) => format!("{} loaded", count),
        LoadStatus::Failed(reason) => format!("Load failed: {}", reason),
    }
}

#[component]
pub fn CardGrid(cards: ReadSignal<Vec<Card>>, status: ReadSignal<LoadStatus>) -> impl IntoView {
    view! {
        <section class="catalog">
            <p class="load-status">{move || status.with(status_line)}</p>
            // Full replace on every change, no keyed diffing
            <div id="characters-container" class="row">
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| view! { <ItemCard card=card /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
