#![forbid(unsafe_code)]

//! Directional-navigation linkage over the visible dropdown rows.
//!
//! Controller-style input moves focus between rows without a pointer. Each
//! visible slot gets a [`NavId`] derived deterministically from its slot
//! index, and a [`NavSlot`] records its region plus up/down neighbors. The
//! chain is rebuilt wholesale on every layout recompute, never patched
//! incrementally.
//!
//! # Invariants
//!
//! 1. `NavId`s are unique within one chain and equal to the slot index.
//! 2. Slot 0 has no up neighbor; the last slot has no down neighbor.
//! 3. Interior slot *i* links up to *i−1* and down to *i+1*.

use dropui_core::Rect;
use smallvec::SmallVec;

/// Identifier for one visible slot's navigation node.
///
/// Constructed deterministically from the slot index, so the host can hand
/// these to its focus system and map them back without a lookup table.
/// "No neighbor" is expressed as `Option::None`, never a sentinel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavId(u32);

impl NavId {
    /// Id for the given visible-slot index.
    #[inline]
    #[must_use]
    pub const fn from_slot(slot: usize) -> Self {
        Self(slot as u32)
    }

    /// The visible-slot index this id was built from.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// One visible row's region plus its directional neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSlot {
    /// This slot's navigation id.
    pub id: NavId,
    /// Hit region of the row, identical to its draw placement.
    pub region: Rect,
    /// Neighbor above, `None` at the top of the window.
    pub up: Option<NavId>,
    /// Neighbor below, `None` at the bottom of the window.
    pub down: Option<NavId>,
}

/// Build the vertical neighbor chain over the visible slot rectangles.
pub(crate) fn build_chain(slots: &[Rect]) -> SmallVec<[NavSlot; 8]> {
    slots
        .iter()
        .enumerate()
        .map(|(i, region)| NavSlot {
            id: NavId::from_slot(i),
            region: *region,
            up: i.checked_sub(1).map(NavId::from_slot),
            down: (i + 1 < slots.len()).then(|| NavId::from_slot(i + 1)),
        })
        .collect()
}
