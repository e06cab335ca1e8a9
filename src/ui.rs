//! List widgets: scroll state and menus.

pub mod menu;
pub mod scroll;

pub use menu::{ITEM_HEIGHT, Menu, MenuItem};
pub use scroll::{ScrollWindow, Visibility, VisibleItem};
