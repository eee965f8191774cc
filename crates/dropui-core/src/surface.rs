#![forbid(unsafe_code)]

//! Draw-surface boundary.
//!
//! The widget renders by issuing calls on a [`DrawSurface`] the host passes
//! into each draw. The surface is opaque to the widget: it accepts filled
//! rectangles, text runs, and indicator icons, and maps them onto whatever
//! sprite/text primitives the host toolkit provides. The widget never retains
//! the surface between draws.

use crate::geometry::Rect;

/// Background fill variant for one dropdown row.
///
/// The widget picks the variant; the host decides what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowFill {
    /// Row is neither selected nor under the pointer.
    Inactive,
    /// Pointer is inside the row's region.
    Hovered,
    /// Row holds the current selection.
    Selected,
}

/// Identity of a scroll-indicator icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorIcon {
    /// More items exist above the visible window.
    Up,
    /// More items exist below the visible window.
    Down,
}

/// Opaque draw target supplied by the host at draw time.
pub trait DrawSurface {
    /// Fill `rect` with the host's rendering of `fill`, at the given opacity.
    fn fill_rect(&mut self, rect: Rect, fill: RowFill, opacity: f32);

    /// Draw a single-line text run with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, opacity: f32);

    /// Draw a scroll-indicator icon covering `rect`.
    fn draw_icon(&mut self, rect: Rect, icon: IndicatorIcon, opacity: f32);
}
