#![forbid(unsafe_code)]

//! Anchored dropdown-list widget.
//!
//! # Role in dropui
//! This crate owns the widget proper: [`Dropdown`] holds the item set, the
//! visible window over it, the current selection, and the cached geometry
//! used for pointer hit-testing and draw placement. Directional-navigation
//! linkage over the visible rows lives in [`nav`]; pointer-click outcomes in
//! [`mouse`].
//!
//! # Control flow
//! Host input events (click, wheel) mutate window/selection state first;
//! layout recompute runs only when the anchor, available height, or metrics
//! change; draws and hit tests read the geometry cached by the last
//! recompute. Every operation completes synchronously on the caller's
//! thread.

pub mod dropdown;
pub mod mouse;
pub mod nav;


pub use dropdown::{
    Dropdown, DropdownItem, INDICATOR_HEIGHT, INDICATOR_WIDTH, ITEM_PADDING, MIN_ITEM_WIDTH,
};
pub use mouse::ClickOutcome;
pub use nav::{NavId, NavSlot};
