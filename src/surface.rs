//! UI Surface
//!
//! The page elements widgets write to, passed in at construction.
//! Leptos signals implement these for the live page.

use leptos::prelude::*;

use crate::models::{Card, Notice, NoticeId};

/// Container whose children are the rendered cards
pub trait CardContainer {
    /// Replace every child with `cards`
    fn replace(&self, cards: Vec<Card>);
}

/// Single line of text, e.g. the countdown display
pub trait TextSink {
    fn set_text(&self, text: String);
}

/// Area that holds transient notices
pub trait NoticeArea: Clone + 'static {
    fn push(&self, notice: Notice);
    fn remove(&self, id: NoticeId);
}

/// Blocking user-facing alerts
pub trait Alerts {
    fn alert(&self, message: &str);
}

impl CardContainer for WriteSignal<Vec<Card>> {
    fn replace(&self, cards: Vec<Card>) {
        self.set(cards);
    }
}

impl TextSink for WriteSignal<String> {
    fn set_text(&self, text: String) {
        self.set(text);
    }
}

impl NoticeArea for RwSignal<Vec<Notice>> {
    fn push(&self, notice: Notice) {
        self.update(|notices| notices.push(notice));
    }

    fn remove(&self, id: NoticeId) {
        self.update(|notices| notices.retain(|notice| notice.id != id));
    }
}

/// `window.alert`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlerts;

impl Alerts for BrowserAlerts {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
