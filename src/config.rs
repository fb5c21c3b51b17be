//! Page Configuration
//!
//! Endpoints, timings and message texts, built once in `App` and handed to
//! each widget.

use std::time::Duration;

use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub notices: NoticeConfig,
    /// Countdown tick period
    pub countdown_tick: Duration,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            notices: NoticeConfig::default(),
            countdown_tick: Duration::from_secs(1),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub page_size: u32,
}

impl CatalogConfig {
    /// URL of the reference list
    pub fn list_url(&self) -> String {
        format!("{}?limit={}", self.endpoint, self.page_size)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://pokeapi.co/api/v2/pokemon".to_string(),
            page_size: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NoticeConfig {
    /// How long a notice stays visible
    pub lifetime: Duration,
    /// Delay before the delayed notice appears
    pub delay: Duration,
    /// Period of the repeating notice
    pub repeat_every: Duration,
    pub delayed_text: String,
    pub repeat_text: String,
    pub stopped_text: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            lifetime: Duration::from_secs(3),
            delay: Duration::from_secs(2),
            repeat_every: Duration::from_secs(3),
            delayed_text: "This message was delayed by 2 seconds!".to_string(),
            repeat_text: "This message repeats every 3 seconds".to_string(),
            stopped_text: "Stopped repeating messages".to_string(),
        }
    }
}
