//! Chat-specific UI components.
//!
//! The chat area is a two-pane layout: a fixed navigation rail on the left
//! and the page body filling the remaining space.

mod layout;
mod nav;
mod sidebar;
mod welcome;

pub use layout::ChatLayout;
pub use nav::{NAV_ITEMS, NavItem};
pub use sidebar::Sidebar;
pub use welcome::ChatWelcome;
