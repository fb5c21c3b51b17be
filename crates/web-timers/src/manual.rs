//! Manual Scheduler
//!
//! Virtual clock that only moves when told to. Timers fire in due order
//! (ties broken by registration order) during [`ManualScheduler::advance`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::Scheduler;

enum Callback {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due: Duration,
    period: Option<Duration>,
    /// Taken out while the callback runs
    callback: Option<Callback>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

impl Queue {
    /// Earliest runnable entry due at or before `limit`
    fn next_due(&self, limit: Duration) -> Option<(u64, Duration)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.callback.is_some() && entry.due <= limit)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, entry)| (*id, entry.due))
    }
}

/// Deterministic single-threaded scheduler
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

/// Cancels its timer when dropped
pub struct ManualHandle {
    id: u64,
    queue: Weak<RefCell<Queue>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            let removed = queue.borrow_mut().entries.remove(&self.id);
            // Release the borrow before the callback's captures are dropped
            drop(removed);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of live timers
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Move the clock forward, firing everything that falls due
    pub fn advance(&self, by: Duration) {
        let target = self.queue.borrow().now + by;

        loop {
            let fired = {
                let mut queue = self.queue.borrow_mut();
                let Some((id, due)) = queue.next_due(target) else {
                    break;
                };
                queue.now = due;
                match queue.entries.get(&id).map(|entry| entry.period.is_some()) {
                    Some(true) => {
                        let callback = queue.entries.get_mut(&id).and_then(|entry| entry.callback.take());
                        callback.map(|callback| (id, callback))
                    }
                    Some(false) => queue
                        .entries
                        .remove(&id)
                        .and_then(|entry| entry.callback)
                        .map(|callback| (id, callback)),
                    None => None,
                }
            };

            let Some((id, callback)) = fired else {
                continue;
            };

            match callback {
                Callback::Once(callback) => callback(),
                Callback::Repeat(mut callback) => {
                    callback();
                    // Put it back unless the handle was dropped during the call
                    let orphaned = {
                        let mut queue = self.queue.borrow_mut();
                        match queue.entries.get_mut(&id) {
                            Some(entry) => {
                                if let Some(period) = entry.period {
                                    entry.due += period;
                                }
                                entry.callback = Some(Callback::Repeat(callback));
                                None
                            }
                            None => Some(callback),
                        }
                    };
                    drop(orphaned);
                }
            }
        }

        self.queue.borrow_mut().now = target;
    }

    fn register(&self, delay: Duration, period: Option<Duration>, callback: Callback) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + delay;
        queue.entries.insert(id, Entry { due, period, callback: Some(callback) });
        ManualHandle { id, queue: Rc::downgrade(&self.queue) }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn interval<F>(&self, period: Duration, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static,
    {
        // A zero period would spin forever inside `advance`
        let period = period.max(Duration::from_millis(1));
        self.register(period, Some(period), Callback::Repeat(Box::new(callback)))
    }

    fn timeout<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static,
    {
        self.register(delay, None, Callback::Once(Box::new(callback)))
    }
}
