#![forbid(unsafe_code)]

//! Dropdown-list widget.
//!
//! An anchored, scrollable, clickable list over a fixed set of candidate
//! values. The widget owns its items, the current selection, and a visible
//! window onto the item set; hosts drive it with pointer clicks, wheel
//! deltas, and layout recomputes, and render it through a
//! [`DrawSurface`].
//!
//! # Invariants
//!
//! 1. The item set is non-empty and immutable after construction.
//! 2. `0 <= first_visible <= max_first_visible`, where
//!    `max_first_visible = item_count - page_size`.
//! 3. `page_size = min(available_height / item_height, item_count)`,
//!    0 when the metrics report a zero row height.
//! 4. `selected` always indexes a real item; it is not constrained by the
//!    visible window.
//! 5. Only [`Dropdown::scroll_by`], [`Dropdown::handle_wheel`],
//!    [`Dropdown::click_at`], [`Dropdown::select_value`], and
//!    [`Dropdown::recompute`] mutate state.
//!
//! # Ordering
//!
//! Within one input event, selection/scroll mutation completes before any
//! geometry recompute, and a recompute completes before the next draw or
//! hit test reads its output. All calls are synchronous; nothing here
//! suspends or blocks.

use crate::mouse::ClickOutcome;
use crate::nav::{self, NavId, NavSlot};
use dropui_core::geometry::Rect;
use dropui_core::metrics::FontMetrics;
use dropui_core::surface::{DrawSurface, IndicatorIcon, RowFill};
use smallvec::SmallVec;

#[cfg(feature = "tracing")]
use tracing::trace;

/// Row height is measured from this fixed string so the row grid never
/// shifts as differently-shaped labels scroll through the window.
const REFERENCE_LABEL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Minimum item width before padding, in layout units.
pub const MIN_ITEM_WIDTH: u16 = 10;

/// Horizontal inset between a row's edge and its label.
pub const ITEM_PADDING: u16 = 1;

/// Fixed width of a scroll-indicator icon.
pub const INDICATOR_WIDTH: u16 = 2;

/// Fixed height of a scroll-indicator icon.
pub const INDICATOR_HEIGHT: u16 = 1;

/// One candidate value plus its display label and stable index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem<T> {
    index: usize,
    label: String,
    value: T,
}

impl<T> DropdownItem<T> {
    /// Position of this item in the original candidate list.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Display label produced by the construction-time label function.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The underlying candidate value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }
}

/// An anchored dropdown list with selection, paging, and hit-testing.
#[derive(Debug, Clone)]
pub struct Dropdown<T> {
    items: Vec<DropdownItem<T>>,
    /// Index of the selected item; may lie outside the visible window.
    selected: usize,
    /// First item index inside the visible window.
    first_visible: usize,
    /// Upper bound for `first_visible` under the current page size.
    max_first_visible: usize,
    item_width: u16,
    item_height: u16,
    bounds: Rect,
    /// One hit region per visible slot, top to bottom from the anchor.
    slots: SmallVec<[Rect; 8]>,
    scroll_up_region: Rect,
    scroll_down_region: Rect,
    nav: SmallVec<[NavSlot; 8]>,
}

impl<T> Dropdown<T> {
    /// Build a dropdown over `values`, labeled by `label`, anchored at
    /// `(anchor_x, anchor_y)` with `available_height` of vertical space.
    ///
    /// The selection starts on the item equal to `initial`, falling back to
    /// the first item when no candidate matches.
    ///
    /// # Panics
    ///
    /// Panics when `values` is empty; a dropdown with zero candidates has
    /// no meaningful selection.
    pub fn new<F>(
        values: Vec<T>,
        initial: &T,
        label: F,
        anchor_x: u16,
        anchor_y: u16,
        available_height: u16,
        metrics: &dyn FontMetrics,
    ) -> Self
    where
        T: PartialEq,
        F: Fn(&T) -> String,
    {
        assert!(
            !values.is_empty(),
            "Dropdown requires at least one candidate value"
        );
        let items: Vec<DropdownItem<T>> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| DropdownItem {
                index,
                label: label(&value),
                value,
            })
            .collect();
        let selected = items
            .iter()
            .position(|item| item.value == *initial)
            .unwrap_or(0);

        let mut dropdown = Self {
            items,
            selected,
            first_visible: 0,
            max_first_visible: 0,
            item_width: 0,
            item_height: 0,
            bounds: Rect::ZERO,
            slots: SmallVec::new(),
            scroll_up_region: Rect::ZERO,
            scroll_down_region: Rect::ZERO,
            nav: SmallVec::new(),
        };
        dropdown.recompute(anchor_x, anchor_y, available_height, metrics);
        dropdown
    }

    // -- Layout engine ------------------------------------------------------

    /// Recompute geometry from the anchor, the vertical space below it, and
    /// the host's font metrics.
    ///
    /// Overwrites the cached bounding box, per-slot hit regions, indicator
    /// regions, and navigation chain in place; clamps `first_visible` into
    /// the new `[0, max_first_visible]`. Pure function of its inputs
    /// otherwise. Call again whenever the anchor, available height, or
    /// metrics change.
    ///
    /// Zero available height (or a zero measured row height) yields an
    /// empty visible window; selection and value lookup keep working.
    pub fn recompute(
        &mut self,
        anchor_x: u16,
        anchor_y: u16,
        available_height: u16,
        metrics: &dyn FontMetrics,
    ) {
        self.item_height = metrics.measure(REFERENCE_LABEL).height;

        let label_width = self
            .items
            .iter()
            .map(|item| metrics.measure(&item.label).width)
            .max()
            .unwrap_or(0);
        self.item_width = label_width
            .max(MIN_ITEM_WIDTH)
            .saturating_add(2 * ITEM_PADDING);

        let page_size = if self.item_height == 0 {
            0
        } else {
            ((available_height / self.item_height) as usize).min(self.items.len())
        };
        self.max_first_visible = self.items.len() - page_size;
        self.first_visible = self.first_visible.min(self.max_first_visible);

        self.bounds = Rect::new(
            anchor_x,
            anchor_y,
            self.item_width,
            self.item_height.saturating_mul(page_size as u16),
        );

        self.slots.clear();
        for slot in 0..page_size {
            let y = anchor_y.saturating_add(self.item_height.saturating_mul(slot as u16));
            self.slots
                .push(Rect::new(anchor_x, y, self.item_width, self.item_height));
        }

        let indicator_x = anchor_x.saturating_sub(INDICATOR_WIDTH);
        self.scroll_up_region =
            Rect::new(indicator_x, anchor_y, INDICATOR_WIDTH, INDICATOR_HEIGHT);
        self.scroll_down_region = Rect::new(
            indicator_x,
            self.bounds.bottom().saturating_sub(INDICATOR_HEIGHT),
            INDICATOR_WIDTH,
            INDICATOR_HEIGHT,
        );

        self.nav = nav::build_chain(&self.slots);

        #[cfg(feature = "tracing")]
        trace!(
            page_size,
            max_first_visible = self.max_first_visible,
            item_width = self.item_width,
            item_height = self.item_height,
            "dropdown layout recompute"
        );
    }

    // -- Selection & scroll state -------------------------------------------

    /// Shift the visible window by `delta` items, clamped to
    /// `[0, max_first_visible]`.
    ///
    /// Returns false when the clamped target equals the current position
    /// (boundary no-op; nothing downstream needs refreshing).
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let target = (self.first_visible as i64 + i64::from(delta))
            .clamp(0, self.max_first_visible as i64) as usize;
        if target == self.first_visible {
            return false;
        }
        #[cfg(feature = "tracing")]
        trace!(previous = self.first_visible, next = target, "dropdown scroll");
        self.first_visible = target;
        true
    }

    /// Apply a wheel notification with the given signed direction.
    ///
    /// A positive direction moves the window up by one (decreasing
    /// `first_visible`); a negative direction moves it down by one. The
    /// inversion matches the "scroll down reveals lower items" convention
    /// and is intentional. Returns whether the window moved.
    pub fn handle_wheel(&mut self, direction: i32) -> bool {
        match direction.signum() {
            1 => self.scroll_by(-1),
            -1 => self.scroll_by(1),
            _ => false,
        }
    }

    /// Process a pointer click at `(x, y)`.
    ///
    /// Visible item regions are tested first, then the up indicator, then
    /// the down indicator. Item precedence over the indicators is part of
    /// the contract and must survive any future geometry change. A click on
    /// an indicator at its scroll boundary still reports
    /// [`ClickOutcome::Scrolled`]; the underlying shift is a no-op.
    pub fn click_at(&mut self, x: u16, y: u16) -> ClickOutcome {
        if let Some(slot) = self.slots.iter().position(|region| region.contains(x, y)) {
            let index = self.first_visible + slot;
            debug_assert!(index < self.items.len());
            self.selected = index;
            return ClickOutcome::Activated(index);
        }
        if self.scroll_up_region.contains(x, y) {
            self.scroll_by(-1);
            return ClickOutcome::Scrolled;
        }
        if self.scroll_down_region.contains(x, y) {
            self.scroll_by(1);
            return ClickOutcome::Scrolled;
        }
        ClickOutcome::Ignored
    }

    /// Select the first item whose value equals `value`.
    ///
    /// Returns true on a match; otherwise leaves the selection untouched
    /// and returns false. Does not scroll the window to reveal the new
    /// selection; visibility and selection are independent.
    pub fn select_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|item| item.value == *value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// True when `(x, y)` falls inside the bounding box or either
    /// scroll-indicator region. Hosts use this to decide whether an outside
    /// click should dismiss the widget.
    #[must_use]
    pub fn contains_point(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
            || self.scroll_up_region.contains(x, y)
            || self.scroll_down_region.contains(x, y)
    }

    /// True when items exist above the visible window.
    #[inline]
    #[must_use]
    pub fn can_scroll_up(&self) -> bool {
        self.first_visible > 0
    }

    /// True when items exist below the visible window.
    #[inline]
    #[must_use]
    pub fn can_scroll_down(&self) -> bool {
        self.first_visible < self.max_first_visible
    }

    // -- Draw ---------------------------------------------------------------

    /// Issue draw calls for the visible window onto `surface`.
    ///
    /// Per visible item: one filled rect (selected wins over hovered, which
    /// requires the pointer inside the row) and one label run inset by
    /// [`ITEM_PADDING`]. Indicator icons draw only while their scroll
    /// condition holds.
    pub fn draw(&self, surface: &mut dyn DrawSurface, pointer: Option<(u16, u16)>, opacity: f32) {
        for (slot, region) in self.slots.iter().enumerate() {
            let index = self.first_visible + slot;
            let item = &self.items[index];
            let fill = if index == self.selected {
                RowFill::Selected
            } else if pointer.is_some_and(|(px, py)| region.contains(px, py)) {
                RowFill::Hovered
            } else {
                RowFill::Inactive
            };
            surface.fill_rect(*region, fill, opacity);
            surface.draw_text(
                region.x.saturating_add(ITEM_PADDING),
                region.y,
                &item.label,
                opacity,
            );
        }
        if self.can_scroll_up() {
            surface.draw_icon(self.scroll_up_region, IndicatorIcon::Up, opacity);
        }
        if self.can_scroll_down() {
            surface.draw_icon(self.scroll_down_region, IndicatorIcon::Down, opacity);
        }
    }

    // -- Host queries -------------------------------------------------------

    /// Bounding rectangle of the visible window at the anchor.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Row width including padding, for host layout composition.
    #[inline]
    #[must_use]
    pub const fn item_width(&self) -> u16 {
        self.item_width
    }

    /// Row height, measured from a fixed reference string.
    #[inline]
    #[must_use]
    pub const fn item_height(&self) -> u16 {
        self.item_height
    }

    /// Number of rows the visible window holds.
    #[inline]
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.slots.len()
    }

    /// Index of the first item inside the visible window.
    #[inline]
    #[must_use]
    pub const fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// The currently selected item.
    #[inline]
    #[must_use]
    pub fn selected_item(&self) -> &DropdownItem<T> {
        &self.items[self.selected]
    }

    /// Value of the currently selected item.
    #[inline]
    #[must_use]
    pub fn selected_value(&self) -> &T {
        self.items[self.selected].value()
    }

    /// Label of the currently selected item.
    #[inline]
    #[must_use]
    pub fn selected_label(&self) -> &str {
        self.items[self.selected].label()
    }

    /// Total number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; the construction contract forbids empty item sets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items inside the visible window, paired with their hit regions.
    pub fn visible_items(&self) -> impl Iterator<Item = (&DropdownItem<T>, Rect)> {
        self.slots
            .iter()
            .enumerate()
            .map(move |(slot, region)| (&self.items[self.first_visible + slot], *region))
    }

    /// Navigation id of the topmost visible row, if any row is visible.
    /// Hosts hand this to their focus system as the entry point.
    #[must_use]
    pub fn first_nav_id(&self) -> Option<NavId> {
        self.nav.first().map(|slot| slot.id)
    }

    /// Full directional-navigation chain over the visible rows.
    #[must_use]
    pub fn nav_slots(&self) -> &[NavSlot] {
        &self.nav
    }
}
