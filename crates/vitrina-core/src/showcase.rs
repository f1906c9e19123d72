//! The two kiosk modes, composing catalog, state machine, and scheduler.

use std::time::Duration;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::gesture::Swipe;
use crate::model::Product;
use crate::presentation::{Presentation, ViewMode};
use crate::slideshow::Slideshow;

/// TV mode: unattended auto-rotating slideshow.
///
/// The scheduler runs unconditionally — there is no pause control in TV
/// mode. The keyboard remote ([`next`](Self::next)/[`prev`](Self::prev))
/// and the mini-queue ([`jump`](Self::jump)) move the slide without
/// touching the rotation.
#[derive(Debug)]
pub struct TvShowcase {
    catalog: Catalog,
    index: usize,
    slideshow: Slideshow,
}

impl TvShowcase {
    pub fn new(catalog: Catalog, slide_interval: Duration) -> Self {
        Self {
            catalog,
            index: 0,
            slideshow: Slideshow::new(slide_interval),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The product currently on screen.
    pub fn current(&self) -> &Product {
        // index is maintained modulo len, and the catalog is never empty
        self.catalog
            .get(self.index)
            .unwrap_or_else(|| unreachable!("slide index {} wraps modulo {}", self.index, self.len()))
    }

    /// Feed elapsed time to the rotation. Returns `true` if the slide
    /// changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let fired = self.slideshow.on_elapsed(dt) as usize;
        if fired == 0 {
            return false;
        }
        self.index = (self.index + fired % self.len()) % self.len();
        true
    }

    /// Keyboard remote: advance one slide. Rotation keeps running.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len();
    }

    /// Keyboard remote: retreat one slide. Rotation keeps running.
    pub fn prev(&mut self) {
        self.index = (self.index + self.len() - 1) % self.len();
    }

    /// Mini-queue selection: show slide `i` now.
    pub fn jump(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    /// Change the rotation interval; the next slide fires a full
    /// interval from now.
    pub fn set_interval(&mut self, interval: Duration) {
        debug!(?interval, "tv rotation interval changed");
        self.slideshow.set_interval(interval);
    }
}

/// Tablet mode: interactive catalog with autoplay until first touch.
///
/// The scheduler is armed exactly while the presentation's autoplay flag
/// is on: every manual navigation disarms it in the same call, and
/// [`set_auto_playing(true)`](Self::set_auto_playing) is the only way to
/// re-arm it.
#[derive(Debug)]
pub struct TabletShowcase {
    catalog: Catalog,
    presentation: Presentation,
    slideshow: Slideshow,
}

impl TabletShowcase {
    pub fn new(catalog: Catalog, slide_interval: Duration) -> Self {
        let presentation = Presentation::new(catalog.len());
        Self {
            catalog,
            presentation,
            // Armed on creation, matching the initial autoplay = true.
            slideshow: Slideshow::new(slide_interval),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> ViewMode {
        self.presentation.view()
    }

    pub fn selected(&self) -> usize {
        self.presentation.selected()
    }

    pub fn auto_playing(&self) -> bool {
        self.presentation.auto_playing()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The currently selected product.
    pub fn current(&self) -> &Product {
        self.catalog
            .get(self.presentation.selected())
            .unwrap_or_else(|| {
                unreachable!(
                    "selected index {} stays below {}",
                    self.presentation.selected(),
                    self.len()
                )
            })
    }

    /// Feed elapsed time to autoplay. Advances only while autoplay is
    /// on; returns `true` if the selection changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let fired = self.slideshow.on_elapsed(dt) as usize;
        if fired == 0 {
            return false;
        }
        self.presentation.auto_advance(fired);
        true
    }

    /// Select product `i` and open its detail view. Kills autoplay.
    pub fn select(&mut self, index: usize) -> Result<(), CoreError> {
        self.presentation.select(index)?;
        self.slideshow.disarm();
        Ok(())
    }

    /// Manual next. Kills autoplay; view is unchanged.
    pub fn next(&mut self) {
        self.presentation.next();
        self.slideshow.disarm();
    }

    /// Manual previous. Kills autoplay; view is unchanged.
    pub fn prev(&mut self) {
        self.presentation.prev();
        self.slideshow.disarm();
    }

    /// Apply a classified swipe gesture.
    pub fn swipe(&mut self, swipe: Swipe) {
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Prev => self.prev(),
        }
    }

    /// Flip between catalog and detail. Selection and autoplay unchanged.
    pub fn toggle_view(&mut self) {
        self.presentation.toggle_view();
    }

    /// Force the catalog view. Selection and autoplay unchanged.
    pub fn back(&mut self) {
        self.presentation.back();
    }

    /// Manual autoplay override; re-arms or disarms the scheduler.
    pub fn set_auto_playing(&mut self, flag: bool) {
        self.presentation.set_auto_playing(flag);
        if flag {
            self.slideshow.arm();
        } else {
            self.slideshow.disarm();
        }
    }

    /// Change the autoplay interval. Re-arms the accumulator without
    /// overriding the autoplay gate.
    pub fn set_interval(&mut self, interval: Duration) {
        self.slideshow.set_interval(interval);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn tv(slide_ms: u32) -> TvShowcase {
        TvShowcase::new(Catalog::sample(), slide_ms * MS)
    }

    fn tablet(slide_ms: u32) -> TabletShowcase {
        TabletShowcase::new(Catalog::sample(), slide_ms * MS)
    }

    #[test]
    fn tv_rotation_cycles_back_after_n_intervals() {
        // slide_ms = 7000, 3 products: 21000ms of wall time is a full lap.
        let mut tv = tv(7000);
        assert_eq!(tv.index(), 0);
        for _ in 0..3 {
            tv.tick(7000 * MS);
        }
        assert_eq!(tv.index(), 0);
    }

    #[test]
    fn tv_rotation_advances_per_interval() {
        let mut tv = tv(7000);
        assert!(!tv.tick(6999 * MS));
        assert!(tv.tick(MS));
        assert_eq!(tv.index(), 1);
        assert_eq!(tv.current().id, "p2");
    }

    #[test]
    fn tv_keyboard_remote_does_not_stop_rotation() {
        let mut tv = tv(1000);
        tv.next();
        assert_eq!(tv.index(), 1);
        tv.prev();
        tv.prev();
        assert_eq!(tv.index(), 2);
        // Rotation still live.
        assert!(tv.tick(1000 * MS));
        assert_eq!(tv.index(), 0);
    }

    #[test]
    fn tv_jump_is_bounds_checked() {
        let mut tv = tv(1000);
        tv.jump(2).unwrap();
        assert_eq!(tv.index(), 2);
        assert!(tv.jump(3).is_err());
        assert_eq!(tv.index(), 2);
    }

    #[test]
    fn tv_interval_change_rearms_without_duplicating() {
        let mut tv = tv(1000);
        tv.tick(900 * MS);
        tv.set_interval(500 * MS);
        // One timer only: 600ms past the change fires exactly once.
        tv.tick(600 * MS);
        assert_eq!(tv.index(), 1);
    }

    #[test]
    fn tablet_autoplay_advances_until_first_interaction() {
        let mut t = tablet(1000);
        assert!(t.auto_playing());
        assert!(t.tick(1000 * MS));
        assert_eq!(t.selected(), 1);

        t.next();
        assert_eq!(t.selected(), 2);
        assert!(!t.auto_playing());

        // Scheduler disarmed: no amount of wall time advances the slide.
        assert!(!t.tick(60_000 * MS));
        assert_eq!(t.selected(), 2);
    }

    #[test]
    fn tablet_select_disarms_and_opens_detail() {
        let mut t = tablet(1000);
        t.select(2).unwrap();
        assert_eq!(t.selected(), 2);
        assert_eq!(t.view(), ViewMode::Detail);
        assert!(!t.auto_playing());
        assert!(!t.tick(10_000 * MS));

        t.next();
        assert_eq!(t.selected(), 0);
        assert_eq!(t.view(), ViewMode::Detail);
    }

    #[test]
    fn tablet_select_rejects_out_of_range_and_keeps_playing() {
        let mut t = tablet(1000);
        assert!(t.select(9).is_err());
        assert!(t.auto_playing());
        assert!(t.tick(1000 * MS));
    }

    #[test]
    fn tablet_resume_is_explicit_only() {
        let mut t = tablet(1000);
        t.prev();
        assert!(!t.tick(5000 * MS));

        t.set_auto_playing(true);
        assert!(t.auto_playing());
        // Fresh interval from the resume point.
        assert!(!t.tick(999 * MS));
        assert!(t.tick(MS));
    }

    #[test]
    fn tablet_swipes_map_to_navigation() {
        let mut t = tablet(1000);
        t.swipe(Swipe::Next);
        assert_eq!(t.selected(), 1);
        t.swipe(Swipe::Prev);
        assert_eq!(t.selected(), 0);
        assert!(!t.auto_playing());
    }

    #[test]
    fn tablet_view_toggles_and_back() {
        let mut t = tablet(1000);
        t.toggle_view();
        assert_eq!(t.view(), ViewMode::Detail);
        t.back();
        assert_eq!(t.view(), ViewMode::Catalog);
        // Neither touches autoplay.
        assert!(t.auto_playing());
    }

    #[test]
    fn tablet_pause_does_not_lock_out_resume() {
        // Pausing via the header toggle is not a "manual navigation":
        // resume must still work afterwards.
        let mut t = tablet(1000);
        t.set_auto_playing(false);
        assert!(!t.tick(3000 * MS));
        t.set_auto_playing(true);
        assert!(t.tick(1000 * MS));
    }
}
