//! Notification Center
//!
//! Transient notices that remove themselves, a delayed notice, and a
//! repeating notice that can be toggled.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use web_timers::Scheduler;

use crate::config::NoticeConfig;
use crate::models::{Notice, NoticeId};
use crate::surface::NoticeArea;

struct CenterState<H> {
    next_notice: NoticeId,
    next_ticket: u64,
    /// Pending removals and delayed notices
    one_shots: HashMap<u64, H>,
    /// Present exactly while repeating
    repeating: Option<H>,
}

struct Shared<S: Scheduler, A> {
    scheduler: S,
    area: A,
    config: NoticeConfig,
    state: RefCell<CenterState<S::Handle>>,
}

/// Cheap handle; the last one dropped cancels every pending timer
pub struct NotificationCenter<S: Scheduler, A> {
    shared: Rc<Shared<S, A>>,
}

impl<S: Scheduler, A: NoticeArea> NotificationCenter<S, A> {
    pub fn new(scheduler: S, area: A, config: NoticeConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                area,
                config,
                state: RefCell::new(CenterState {
                    next_notice: 0,
                    next_ticket: 0,
                    one_shots: HashMap::new(),
                    repeating: None,
                }),
            }),
        }
    }

    /// Show `text` now and remove it after the notice lifetime
    pub fn show_message(&self, text: impl Into<String>) -> NoticeId {
        let id = {
            let mut state = self.shared.state.borrow_mut();
            state.next_notice += 1;
            state.next_notice
        };
        self.shared.area.push(Notice { id, text: text.into() });
        self.schedule_once(self.shared.config.lifetime, move |center| {
            center.shared.area.remove(id);
        });
        id
    }

    /// Show the delayed notice once the configured delay has passed
    pub fn show_delayed_message(&self) {
        self.schedule_once(self.shared.config.delay, |center| {
            center.show_message(center.shared.config.delayed_text.clone());
        });
    }

    /// Start or stop the repeating notice; returns whether it is now active
    pub fn toggle_repeating(&self) -> bool {
        let previous = self.shared.state.borrow_mut().repeating.take();

        if let Some(ticker) = previous {
            drop(ticker);
            log::debug!("[Notifications] Repeating stopped");
            self.show_message(self.shared.config.stopped_text.clone());
            return false;
        }

        let weak = Rc::downgrade(&self.shared);
        let ticker = self.shared.scheduler.interval(self.shared.config.repeat_every, move || {
            if let Some(shared) = weak.upgrade() {
                let center = NotificationCenter { shared };
                center.show_message(center.shared.config.repeat_text.clone());
            }
        });
        self.shared.state.borrow_mut().repeating = Some(ticker);
        log::debug!("[Notifications] Repeating started");
        true
    }

    pub fn is_repeating(&self) -> bool {
        self.shared.state.borrow().repeating.is_some()
    }

    fn schedule_once<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce(&NotificationCenter<S, A>) + 'static,
    {
        let ticket = {
            let mut state = self.shared.state.borrow_mut();
            state.next_ticket += 1;
            state.next_ticket
        };

        let weak = Rc::downgrade(&self.shared);
        let handle = self.shared.scheduler.timeout(delay, move || {
            if let Some(shared) = weak.upgrade() {
                let done = shared.state.borrow_mut().one_shots.remove(&ticket);
                drop(done);
                action(&NotificationCenter { shared });
            }
        });
        self.shared.state.borrow_mut().one_shots.insert(ticket, handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotices;
    use web_timers::ManualScheduler;

    fn setup() -> (ManualScheduler, RecordingNotices, NotificationCenter<ManualScheduler, RecordingNotices>) {
        let scheduler = ManualScheduler::new();
        let area = RecordingNotices::default();
        let center = NotificationCenter::new(scheduler.clone(), area.clone(), NoticeConfig::default());
        (scheduler, area, center)
    }

    fn millis(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_message_removes_itself() {
        let (scheduler, area, center) = setup();

        center.show_message("hello");
        assert_eq!(area.visible(), vec!["hello"]);

        scheduler.advance(millis(2999));
        assert_eq!(area.visible(), vec!["hello"]);

        scheduler.advance(millis(1));
        assert!(area.visible().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_messages_get_distinct_ids() {
        let (_scheduler, _area, center) = setup();

        let first = center.show_message("a");
        let second = center.show_message("b");
        assert_ne!(first, second);
    }

    #[test]
    fn test_delayed_message_appears_after_delay() {
        let (scheduler, area, center) = setup();
        let delayed = NoticeConfig::default().delayed_text;

        center.show_delayed_message();
        scheduler.advance(millis(1999));
        assert!(area.visible().is_empty());

        scheduler.advance(millis(1));
        assert_eq!(area.visible(), vec![delayed.clone()]);
        assert_eq!(area.shown(), vec![delayed]);

        scheduler.advance(millis(3000));
        assert!(area.visible().is_empty());
    }

    #[test]
    fn test_repeating_shows_every_period() {
        let (scheduler, area, center) = setup();
        let repeat = NoticeConfig::default().repeat_text;

        assert!(center.toggle_repeating());
        assert!(center.is_repeating());
        assert!(area.shown().is_empty());

        scheduler.advance(Duration::from_secs(9));
        assert_eq!(area.shown(), vec![repeat.clone(), repeat.clone(), repeat]);
    }

    #[test]
    fn test_toggle_twice_leaves_nothing_running() {
        let (scheduler, area, center) = setup();
        let config = NoticeConfig::default();

        assert!(center.toggle_repeating());
        scheduler.advance(Duration::from_secs(3));
        assert!(!center.toggle_repeating());

        assert!(!center.is_repeating());
        assert_eq!(area.shown(), vec![config.repeat_text.clone(), config.stopped_text.clone()]);

        scheduler.advance(Duration::from_secs(30));
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(area.shown().len(), 2);
        assert!(area.visible().is_empty());
    }

    #[test]
    fn test_toggle_off_before_first_tick() {
        let (scheduler, area, center) = setup();

        center.toggle_repeating();
        center.toggle_repeating();

        assert_eq!(area.shown(), vec![NoticeConfig::default().stopped_text]);
        scheduler.advance(Duration::from_secs(3));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_drop_cancels_pending_work() {
        let (scheduler, area, center) = setup();

        center.show_message("left behind");
        center.show_delayed_message();
        center.toggle_repeating();
        assert_eq!(scheduler.pending(), 3);

        drop(center);
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(area.shown(), vec!["left behind"]);
    }
}
