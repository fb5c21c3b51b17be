//! UI Components
//!
//! Page sections for the catalog and the two timer widgets.

mod card_grid;
mod countdown_panel;
mod item_card;
mod notification_panel;

pub use card_grid::CardGrid;
pub use countdown_panel::CountdownPanel;
pub use item_card::ItemCard;
pub use notification_panel::NotificationPanel;
