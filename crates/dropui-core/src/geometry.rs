#![forbid(unsafe_code)]

//! Integer geometry primitives for layout and hit-testing.
//!
//! Coordinates are `u16` layout units: terminal cells for cell-grid hosts,
//! pixels for hosts that scale into a `u16` space. All arithmetic saturates
//! so degenerate anchors near the screen edge clamp instead of wrapping.

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in layout units.
    pub width: u16,
    /// Height in layout units.
    pub height: u16,
}

impl Size {
    /// Zero-extent size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An axis-aligned rectangle: top-left position plus size.
///
/// The right and bottom edges are exclusive: a rect at `(0, 0)` with width 5
/// contains `x` in `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: u16,
    /// Top edge.
    pub y: u16,
    /// Width in layout units.
    pub width: u16,
    /// Height in layout units.
    pub height: u16,
}

impl Rect {
    /// Zero-extent rect at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a new rect.
    #[inline]
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, saturating at `u16::MAX`.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `u16::MAX`.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Size of this rect.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when the rect covers no area.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when `(x, y)` falls inside this rect.
    ///
    /// Empty rects contain no points.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rect_edges_are_exclusive() {
        let r = Rect::new(10, 5, 30, 8);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 13);
        assert!(r.contains(10, 5)); // top-left corner
        assert!(r.contains(39, 12)); // bottom-right interior
        assert!(!r.contains(40, 5)); // right edge exclusive
        assert!(!r.contains(10, 13)); // bottom edge exclusive
        assert!(!r.contains(9, 5));
        assert!(!r.contains(10, 4));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(3, 3, 0, 10);
        assert!(r.is_empty());
        assert!(!r.contains(3, 3));

        let r = Rect::new(3, 3, 10, 0);
        assert!(r.is_empty());
        assert!(!r.contains(5, 3));
    }

    #[test]
    fn edges_saturate_near_u16_max() {
        let r = Rect::new(u16::MAX - 1, u16::MAX - 1, 10, 10);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.bottom(), u16::MAX);
        assert!(r.contains(u16::MAX - 1, u16::MAX - 1));
    }

    #[test]
    fn size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0, 4).is_empty());
        assert!(Size::new(4, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    proptest! {
        #[test]
        fn contains_matches_range_membership(
            x in 0u16..1000,
            y in 0u16..1000,
            w in 0u16..1000,
            h in 0u16..1000,
            px in 0u16..2500,
            py in 0u16..2500,
        ) {
            let r = Rect::new(x, y, w, h);
            let expected = (x..x + w).contains(&px) && (y..y + h).contains(&py);
            prop_assert_eq!(r.contains(px, py), expected);
        }
    }
}
