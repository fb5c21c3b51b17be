//! Pokedeck Frontend App
//!
//! Builds the widgets once, starts the catalog load, and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_timers::BrowserScheduler;

use crate::catalog::{load_catalog, Catalog, HttpClient};
use crate::components::{CardGrid, CountdownPanel, NotificationPanel};
use crate::config::AppConfig;
use crate::models::{Card, LoadStatus, Notice};
use crate::render::Renderer;
use crate::surface::BrowserAlerts;
use crate::timers::{format_clock, CountdownTimer, NotificationCenter};

pub type PageTimer = CountdownTimer<BrowserScheduler, WriteSignal<String>, BrowserAlerts>;
pub type PageNotifications = NotificationCenter<BrowserScheduler, RwSignal<Vec<Notice>>>;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (cards, set_cards) = signal(Vec::<Card>::new());
    let (load_status, set_load_status) = signal(LoadStatus::Loading);
    let (clock, set_clock) = signal(format_clock(0));
    let notices = RwSignal::new(Vec::<Notice>::new());

    // Widgets own their timers; dropping the owner cancels them
    let timer: StoredValue<PageTimer, LocalStorage> =
        StoredValue::new_local(CountdownTimer::new(BrowserScheduler, set_clock, BrowserAlerts, config.countdown_tick));
    let center: StoredValue<PageNotifications, LocalStorage> =
        StoredValue::new_local(NotificationCenter::new(BrowserScheduler, notices, config.notices.clone()));

    // Load the catalog once on mount; the outcome lands in `load_status`
    let catalog = Catalog::new(HttpClient::new(), config.catalog.clone());
    spawn_local(async move {
        let renderer = Renderer::new(set_cards);
        let status = match load_catalog(&catalog, &renderer, &BrowserAlerts).await {
            Ok(count) => LoadStatus::Loaded(count),
            Err(err) => LoadStatus::Failed(err.to_string()),
        };
        set_load_status.set(status);
    });

    view! {
        <div class="container">
            <h1>"Pokedeck"</h1>
            <CardGrid cards=cards status=load_status />
            <div class="widgets">
                <CountdownPanel timer=timer clock=clock />
                <NotificationPanel center=center notices=notices />
            </div>
        </div>
    }
}
