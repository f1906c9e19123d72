//! All possible UI actions. Actions are the sole mechanism for state
//! mutation — gestures, keys, and timer ticks all funnel through here,
//! serialized by the single event loop.

use std::time::Duration;

use crate::screen::ScreenId;

/// Every state transition in the kiosk is expressed as an Action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick(Duration),
    Clock,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    /// Context-dependent back: detail → catalog, otherwise → home.
    GoBack,
    ToggleHelp,

    // ── Tablet showcase ───────────────────────────────────────────
    /// Open product `i` in the detail view (kills autoplay).
    SelectProduct(usize),
    /// Manual next/prev (kills autoplay, keeps the current view).
    NextProduct,
    PrevProduct,
    /// Flip catalog/detail without changing the selection.
    ToggleView,
    /// Force the catalog view.
    BackToCatalog,
    /// Manual autoplay override.
    SetAutoPlay(bool),

    // ── TV showcase ───────────────────────────────────────────────
    /// Mini-queue jump to slide `i`.
    JumpSlide(usize),
    /// Keyboard remote (rotation keeps running).
    NextSlide,
    PrevSlide,
}
