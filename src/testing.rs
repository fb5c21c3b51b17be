//! Test Doubles
//!
//! Recording stand-ins for the page surface and the HTTP source.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::catalog::HttpSource;
use crate::error::{AppError, AppResult};
use crate::models::{Card, Item, Notice, NoticeId};
use crate::surface::{Alerts, CardContainer, NoticeArea, TextSink};

pub fn item(id: u32, name: &str, types: &[&str]) -> Item {
    Item {
        id,
        name: name.to_string(),
        image: Some(format!("https://img.test/{}.png", id)),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn detail_json(id: u32, name: &str, types: &[&str]) -> String {
    let slots: Vec<String> = types
        .iter()
        .enumerate()
        .map(|(i, t)| format!(r#"{{"slot":{},"type":{{"name":"{}","url":"u"}}}}"#, i + 1, t))
        .collect();
    format!(
        r#"{{"id":{},"name":"{}","sprites":{{"front_default":"https://img.test/{}.png"}},"types":[{}]}}"#,
        id,
        name,
        id,
        slots.join(",")
    )
}

// ========================
// HTTP
// ========================

#[derive(Clone)]
enum Reply {
    Body(String),
    Refuse,
    Status(u16),
}

/// Request lifecycle as seen by the source
#[derive(Debug, Clone, PartialEq)]
pub enum Exchange {
    Sent(String),
    Answered(String),
}

/// Canned responses keyed by URL; unknown URLs are refused.
///
/// A URL given a delay yields to the runtime that many times before it
/// answers, so other in-flight requests can overtake it.
#[derive(Clone, Default)]
pub struct FakeSource {
    replies: Rc<RefCell<HashMap<String, Reply>>>,
    delays: Rc<RefCell<HashMap<String, usize>>>,
    requests: Rc<RefCell<Vec<String>>>,
    exchanges: Rc<RefCell<Vec<Exchange>>>,
}

impl FakeSource {
    pub fn body(self, url: &str, body: &str) -> Self {
        self.replies.borrow_mut().insert(url.to_string(), Reply::Body(body.to_string()));
        self
    }

    pub fn refuse(self, url: &str) -> Self {
        self.replies.borrow_mut().insert(url.to_string(), Reply::Refuse);
        self
    }

    pub fn status(self, url: &str, status: u16) -> Self {
        self.replies.borrow_mut().insert(url.to_string(), Reply::Status(status));
        self
    }

    pub fn delay(self, url: &str, yields: usize) -> Self {
        self.delays.borrow_mut().insert(url.to_string(), yields);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        self.exchanges.borrow().clone()
    }
}

impl HttpSource for FakeSource {
    async fn get_text(&self, url: &str) -> AppResult<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.exchanges.borrow_mut().push(Exchange::Sent(url.to_string()));

        let yields = self.delays.borrow().get(url).copied().unwrap_or(0);
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }

        self.exchanges.borrow_mut().push(Exchange::Answered(url.to_string()));
        let reply = self.replies.borrow().get(url).cloned().unwrap_or(Reply::Refuse);
        match reply {
            Reply::Body(body) => Ok(body),
            Reply::Refuse => Err(AppError::network(url, "connection refused")),
            Reply::Status(status) => Err(AppError::Status { url: url.to_string(), status }),
        }
    }
}

// ========================
// Surface
// ========================

#[derive(Clone, Default)]
pub struct RecordingCards {
    current: Rc<RefCell<Vec<Card>>>,
    replacements: Rc<RefCell<usize>>,
}

impl RecordingCards {
    pub fn current(&self) -> Vec<Card> {
        self.current.borrow().clone()
    }

    pub fn replacements(&self) -> usize {
        *self.replacements.borrow()
    }
}

impl CardContainer for RecordingCards {
    fn replace(&self, cards: Vec<Card>) {
        *self.current.borrow_mut() = cards;
        *self.replacements.borrow_mut() += 1;
    }
}

#[derive(Clone, Default)]
pub struct RecordingAlerts {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingAlerts {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Clone, Default)]
pub struct RecordingText {
    history: Rc<RefCell<Vec<String>>>,
}

impl RecordingText {
    pub fn last(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl TextSink for RecordingText {
    fn set_text(&self, text: String) {
        self.history.borrow_mut().push(text);
    }
}

/// Visible notices plus every text ever shown
#[derive(Clone, Default)]
pub struct RecordingNotices {
    visible: Rc<RefCell<Vec<Notice>>>,
    shown: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotices {
    pub fn visible(&self) -> Vec<String> {
        self.visible.borrow().iter().map(|notice| notice.text.clone()).collect()
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }
}

impl NoticeArea for RecordingNotices {
    fn push(&self, notice: Notice) {
        self.shown.borrow_mut().push(notice.text.clone());
        self.visible.borrow_mut().push(notice);
    }

    fn remove(&self, id: NoticeId) {
        self.visible.borrow_mut().retain(|notice| notice.id != id);
    }
}
