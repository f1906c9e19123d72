//! The presentation state machine — the only mutable entity in the kiosk.

use tracing::trace;

use crate::error::CoreError;

/// Which tablet view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Grid of all products, one highlighted as selected.
    #[default]
    Catalog,
    /// Single product, full info, prev/next controls.
    Detail,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Catalog => Self::Detail,
            Self::Detail => Self::Catalog,
        }
    }
}

/// View, selection, and autoplay state with the transition rules of the
/// tablet showcase.
///
/// Invariant: `0 <= selected < len` at all times, enforced by modulo
/// arithmetic on advance/retreat — never by clamping. Autoplay starts on
/// and is permanently disabled by any manual navigation or selection;
/// [`set_auto_playing`](Self::set_auto_playing) is the only way to
/// re-enable it.
#[derive(Debug, Clone)]
pub struct Presentation {
    view: ViewMode,
    selected: usize,
    auto_playing: bool,
    len: usize,
}

impl Presentation {
    /// Initial state: catalog view, first product selected, autoplay on.
    ///
    /// `len` is the catalog size; catalogs are never empty (empty input
    /// falls back to sample data), so `len >= 1` here.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "catalog is never empty");
        Self {
            view: ViewMode::Catalog,
            selected: 0,
            auto_playing: true,
            len: len.max(1),
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Select product `i` and open its detail view. Disables autoplay.
    ///
    /// Rejects out-of-range indices: indices normally come from
    /// enumerating the catalog, so anything else is a caller bug.
    pub fn select(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.len {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        trace!(index, "product selected");
        self.selected = index;
        self.view = ViewMode::Detail;
        self.auto_playing = false;
        Ok(())
    }

    /// Advance to the next product (wraps). Disables autoplay; view is
    /// unchanged.
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.len;
        self.auto_playing = false;
    }

    /// Retreat to the previous product (wraps). Disables autoplay; view
    /// is unchanged.
    pub fn prev(&mut self) {
        self.selected = (self.selected + self.len - 1) % self.len;
        self.auto_playing = false;
    }

    /// Timer-driven advance by `steps` slides. Does not touch autoplay —
    /// this is the scheduler acting, not the user.
    pub fn auto_advance(&mut self, steps: usize) {
        self.selected = (self.selected + steps % self.len) % self.len;
    }

    /// Flip between catalog and detail without changing the selection.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    /// Manual autoplay override. View and selection are unchanged.
    pub fn set_auto_playing(&mut self, flag: bool) {
        self.auto_playing = flag;
    }

    /// Force the catalog view; selection and autoplay are unchanged.
    pub fn back(&mut self) {
        self.view = ViewMode::Catalog;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initial_state() {
        let p = Presentation::new(3);
        assert_eq!(p.view(), ViewMode::Catalog);
        assert_eq!(p.selected(), 0);
        assert!(p.auto_playing());
    }

    #[test]
    fn index_stays_in_range_for_any_sequence() {
        for n in 1..=5 {
            let mut p = Presentation::new(n);
            for step in 0..50 {
                if step % 3 == 0 {
                    p.prev();
                } else {
                    p.next();
                }
                assert!(p.selected() < n, "selected out of range for n={n}");
            }
        }
    }

    #[test]
    fn next_n_times_is_identity() {
        for n in 1..=6 {
            let mut p = Presentation::new(n);
            let start = p.selected();
            for _ in 0..n {
                p.next();
            }
            assert_eq!(p.selected(), start, "cyclic property failed for n={n}");
        }
    }

    #[test]
    fn prev_wraps_backwards() {
        let mut p = Presentation::new(3);
        p.prev();
        assert_eq!(p.selected(), 2);
    }

    #[test]
    fn manual_navigation_disables_autoplay() {
        let mut p = Presentation::new(3);
        p.next();
        assert!(!p.auto_playing());

        let mut p = Presentation::new(3);
        p.prev();
        assert!(!p.auto_playing());

        let mut p = Presentation::new(3);
        p.select(1).unwrap();
        assert!(!p.auto_playing());
    }

    #[test]
    fn autoplay_never_resumes_without_explicit_override() {
        let mut p = Presentation::new(3);
        p.next();
        p.auto_advance(5);
        p.toggle_view();
        p.back();
        assert!(!p.auto_playing());

        p.set_auto_playing(true);
        assert!(p.auto_playing());
    }

    #[test]
    fn select_opens_detail_and_then_next_wraps() {
        // Scenario from the contract: n=3, select(2), then next().
        let mut p = Presentation::new(3);
        p.select(2).unwrap();
        assert_eq!(p.selected(), 2);
        assert_eq!(p.view(), ViewMode::Detail);
        assert!(!p.auto_playing());

        p.next();
        assert_eq!(p.selected(), 0);
        assert_eq!(p.view(), ViewMode::Detail);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut p = Presentation::new(3);
        let err = p.select(3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfRange { index: 3, len: 3 }
        ));
        // State untouched on rejection.
        assert_eq!(p.selected(), 0);
        assert_eq!(p.view(), ViewMode::Catalog);
        assert!(p.auto_playing());
    }

    #[test]
    fn toggle_view_keeps_selection() {
        let mut p = Presentation::new(3);
        p.select(1).unwrap();
        p.toggle_view();
        assert_eq!(p.view(), ViewMode::Catalog);
        assert_eq!(p.selected(), 1);
        p.toggle_view();
        assert_eq!(p.view(), ViewMode::Detail);
    }

    #[test]
    fn back_forces_catalog_view_only() {
        let mut p = Presentation::new(3);
        p.select(2).unwrap();
        p.back();
        assert_eq!(p.view(), ViewMode::Catalog);
        assert_eq!(p.selected(), 2);
        assert!(!p.auto_playing());
    }

    #[test]
    fn auto_advance_wraps_and_keeps_autoplay() {
        let mut p = Presentation::new(3);
        p.auto_advance(4);
        assert_eq!(p.selected(), 1);
        assert!(p.auto_playing());
    }

    #[test]
    fn single_product_catalog_is_stable() {
        let mut p = Presentation::new(1);
        p.next();
        p.prev();
        p.auto_advance(10);
        assert_eq!(p.selected(), 0);
    }
}
