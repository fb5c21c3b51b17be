//! Timer Widgets
//!
//! Each widget owns its timer handles; dropping the widget cancels them.

mod countdown;
mod notifications;

pub use countdown::{format_clock, parse_duration, CountdownTimer, Phase};
pub use notifications::NotificationCenter;
