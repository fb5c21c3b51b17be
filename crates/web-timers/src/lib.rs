//! Web Timer Utilities
//!
//! Owned, cancel-on-drop timer handles for single-threaded UI code.
//! Widgets schedule through the [`Scheduler`] trait so they can run against
//! the browser event loop or a virtual clock.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};

#[cfg(feature = "manual")]
mod manual;

#[cfg(feature = "manual")]
pub use manual::{ManualHandle, ManualScheduler};

/// Source of repeating and one-shot callbacks.
///
/// Dropping a returned handle cancels the timer. Callbacks never run
/// synchronously inside `interval`/`timeout`.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    /// Fire `callback` every `period` until the handle is dropped
    fn interval<F>(&self, period: Duration, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static;

    /// Fire `callback` once after `delay` unless the handle is dropped first
    fn timeout<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Browser `setInterval` / `setTimeout` via gloo
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Handle to a browser timer, held only so that dropping it clears the timer
#[allow(dead_code)]
pub enum BrowserHandle {
    Interval(Interval),
    Timeout(Timeout),
}

/// Convert to whole milliseconds, saturating at `u32::MAX`
fn to_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserHandle;

    fn interval<F>(&self, period: Duration, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static,
    {
        BrowserHandle::Interval(Interval::new(to_millis(period), callback))
    }

    fn timeout<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static,
    {
        BrowserHandle::Timeout(Timeout::new(to_millis(delay), callback))
    }
}
