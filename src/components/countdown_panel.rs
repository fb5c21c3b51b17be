//! Countdown Panel Component

use leptos::prelude::*;

use crate::app::PageTimer;
use crate::timers::{format_clock, Phase};

/// Duration input, start/stop buttons and the `m:ss` display
#[component]
pub fn CountdownPanel(timer: StoredValue<PageTimer, LocalStorage>, clock: ReadSignal<String>) -> impl IntoView {
    let (duration_input, set_duration_input) = signal(String::new());
    // Bumped on start/stop so the phase line re-reads the timer
    let (control_trigger, set_control_trigger) = signal(0u32);

    let on_start = move |_| {
        let input = duration_input.get_untracked();
        // Rejections are alerted by the timer itself
        let _ = timer.with_value(|timer| timer.start_from_input(&input));
        set_control_trigger.update(|v| *v += 1);
    };

    let on_stop = move |_| {
        timer.with_value(|timer| timer.stop());
        set_control_trigger.update(|v| *v += 1);
    };

    let phase_line = move || {
        clock.track();
        control_trigger.track();
        timer.with_value(|timer| match (timer.phase(), timer.remaining()) {
            (Phase::Running, _) => "Running".to_string(),
            (Phase::Idle, 0) => "Idle".to_string(),
            (Phase::Idle, left) => format!("Stopped at {}", format_clock(left)),
        })
    };

    view! {
        <section class="countdown-panel">
            <h2>"Countdown"</h2>
            <div id="timerDisplay" class="timer-display">{move || clock.get()}</div>
            <p class="timer-phase">{phase_line}</p>
            <div class="countdown-controls">
                <input
                    id="timerInput"
                    type="number"
                    min="1"
                    placeholder="Seconds"
                    prop:value=duration_input
                    on:input=move |ev| set_duration_input.set(event_target_value(&ev))
                />
                <button id="startTimer" on:click=on_start>"Start Timer"</button>
                <button id="stopTimer" on:click=on_stop>"Stop"</button>
            </div>
        </section>
    }
}
