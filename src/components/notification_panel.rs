//! Notification Panel Component
//!
//! Buttons for the delayed and repeating notices, and the notice area.

use leptos::prelude::*;

use crate::app::PageNotifications;
use crate::models::Notice;

#[component]
pub fn NotificationPanel(
    center: StoredValue<PageNotifications, LocalStorage>,
    notices: RwSignal<Vec<Notice>>,
) -> impl IntoView {
    // Bumped on toggle so the button label re-reads the center
    let (toggle_trigger, set_toggle_trigger) = signal(0u32);

    let on_toggle = move |_| {
        let active = center.with_value(|center| center.toggle_repeating());
        log::debug!("[NotificationPanel] Repeating now {}", active);
        set_toggle_trigger.update(|v| *v += 1);
    };

    let toggle_label = move || {
        toggle_trigger.track();
        if center.with_value(|center| center.is_repeating()) {
            "Stop Repeating Notification"
        } else {
            "Start Repeating Notification"
        }
    };

    view! {
        <section class="notification-panel">
            <h2>"Notifications"</h2>
            <div class="notification-controls">
                <button
                    id="showDelayedNotification"
                    on:click=move |_| center.with_value(|center| center.show_delayed_message())
                >
                    "Show Delayed Notification"
                </button>
                <button id="toggleRepeatingNotification" on:click=on_toggle>
                    {toggle_label}
                </button>
            </div>
            <div id="notificationArea" class="notification-area">
                <For
                    each=move || notices.get()
                    key=|notice| notice.id
                    children=move |notice| {
                        view! { <div class="alert alert-info">{notice.text}</div> }
                    }
                />
            </div>
        </section>
    }
}
