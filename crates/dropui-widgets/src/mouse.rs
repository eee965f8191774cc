#![forbid(unsafe_code)]

//! Shared pointer-click result type for widget hit handling.

/// Result of processing a pointer click on the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click fell outside every region; no state changed.
    Ignored,
    /// A visible item was clicked and is now the selection.
    /// Carries the item's index into the full item set.
    Activated(usize),
    /// A scroll indicator was clicked; the visible window shifted
    /// (or was already at its boundary).
    Scrolled,
}

impl ClickOutcome {
    /// True when the click landed on the widget at all.
    #[inline]
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }

    /// Index of the activated item, if one was activated.
    #[inline]
    #[must_use]
    pub const fn activated(&self) -> Option<usize> {
        match self {
            ClickOutcome::Activated(index) => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handled_covers_activation_and_scroll() {
        assert!(ClickOutcome::Activated(3).is_handled());
        assert!(ClickOutcome::Scrolled.is_handled());
        assert!(!ClickOutcome::Ignored.is_handled());
    }

    #[test]
    fn activated_index_extraction() {
        assert_eq!(ClickOutcome::Activated(7).activated(), Some(7));
        assert_eq!(ClickOutcome::Scrolled.activated(), None);
        assert_eq!(ClickOutcome::Ignored.activated(), None);
    }
}
