//! Countdown Timer
//!
//! `Idle -> Running -> Idle`. One tick source at most; the display reads
//! `m:ss` and an alert fires when the count reaches zero.

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Duration;

use web_timers::Scheduler;

use crate::error::{AppError, AppResult};
use crate::surface::{Alerts, TextSink};

pub const FINISHED_MESSAGE: &str = "Timer finished!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// `m:ss`, minutes unpadded
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Parse the duration input box.
///
/// Stricter than `parseInt`: `"1.5"` and `"5abc"` are rejected, not truncated.
pub fn parse_duration(input: &str) -> AppResult<NonZeroU32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| AppError::InvalidDuration(input.to_string()))
}

struct State<H> {
    remaining: u32,
    /// Present exactly while running
    ticker: Option<H>,
}

struct Shared<S: Scheduler, D, A> {
    scheduler: S,
    display: D,
    alerts: A,
    tick: Duration,
    state: RefCell<State<S::Handle>>,
}

impl<S: Scheduler, D: TextSink, A: Alerts> Shared<S, D, A> {
    fn on_tick(&self) {
        let (remaining, finished) = {
            let mut state = self.state.borrow_mut();
            if state.ticker.is_none() {
                return;
            }
            state.remaining = state.remaining.saturating_sub(1);
            // Idle as soon as the count hits zero
            let finished = if state.remaining == 0 { state.ticker.take() } else { None };
            (state.remaining, finished)
        };

        self.display.set_text(format_clock(remaining));

        if let Some(ticker) = finished {
            drop(ticker);
            log::info!("[Countdown] Finished");
            self.alerts.alert(FINISHED_MESSAGE);
        }
    }

    fn cancel(&self) {
        let ticker = self.state.borrow_mut().ticker.take();
        drop(ticker);
    }
}

pub struct CountdownTimer<S: Scheduler, D, A> {
    shared: Rc<Shared<S, D, A>>,
}

impl<S, D, A> CountdownTimer<S, D, A>
where
    S: Scheduler,
    D: TextSink + 'static,
    A: Alerts + 'static,
{
    pub fn new(scheduler: S, display: D, alerts: A, tick: Duration) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                display,
                alerts,
                tick,
                state: RefCell::new(State { remaining: 0, ticker: None }),
            }),
        }
    }

    /// Restart from `seconds`, replacing any running countdown
    pub fn start(&self, seconds: NonZeroU32) {
        self.stop();

        let seconds = seconds.get();
        self.shared.state.borrow_mut().remaining = seconds;
        self.shared.display.set_text(format_clock(seconds));

        let weak = Rc::downgrade(&self.shared);
        let ticker = self.shared.scheduler.interval(self.shared.tick, move || {
            if let Some(shared) = weak.upgrade() {
                shared.on_tick();
            }
        });
        self.shared.state.borrow_mut().ticker = Some(ticker);
        log::debug!("[Countdown] Started at {}s", seconds);
    }

    /// Validate the duration input box, then start.
    ///
    /// A rejected input raises one alert and leaves the timer as it was.
    pub fn start_from_input(&self, input: &str) -> AppResult<()> {
        match parse_duration(input) {
            Ok(seconds) => {
                self.start(seconds);
                Ok(())
            }
            Err(err) => {
                log::warn!("[Countdown] Rejected input {:?}", input);
                self.shared.alerts.alert(&err.to_string());
                Err(err)
            }
        }
    }

    /// Cancel the tick source; the count stays where it is
    pub fn stop(&self) {
        self.shared.cancel();
    }

    pub fn remaining(&self) -> u32 {
        self.shared.state.borrow().remaining
    }

    pub fn phase(&self) -> Phase {
        if self.shared.state.borrow().ticker.is_some() {
            Phase::Running
        } else {
            Phase::Idle
        }
    }
}
