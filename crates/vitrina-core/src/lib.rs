//! Presentation logic for the vitrina kiosk display.
//!
//! This crate owns everything about the showcase that is worth testing,
//! with zero I/O so every invariant can be driven by a virtual clock:
//!
//! - **[`Catalog`]** — the ordered product list being displayed. Never
//!   empty: constructing one from an absent or empty list yields the
//!   built-in sample so the display always has something to show.
//!
//! - **[`Presentation`]** — the only mutable entity: current view
//!   (catalog grid vs. single-product detail), selected index, and the
//!   autoplay flag. The selected index wraps modulo the catalog size and
//!   is never clamped; any manual navigation permanently disables
//!   autoplay until an explicit [`Presentation::set_auto_playing`].
//!
//! - **[`Slideshow`]** — an owned, pausable scheduler. Callers feed it
//!   elapsed wall time and it reports how many slide intervals fired.
//!   Re-arming (interval change) resets the accumulator, so there is
//!   exactly one logical timer at any moment.
//!
//! - **[`SwipeTracker`]** — classifies a horizontal touch displacement
//!   into a previous/next navigation command, with a deadzone so taps
//!   and jitter never navigate.
//!
//! - **[`TvShowcase`] / [`TabletShowcase`]** — the two kiosk modes,
//!   composing the pieces above. TV rotates unconditionally; Tablet
//!   gates rotation on the autoplay flag.
//!
//! Rendering, routing, and link opening are the UI layer's concern
//! (`vitrina-tui`); outbound link *construction* lives here in
//! [`contact`].

pub mod catalog;
pub mod contact;
pub mod error;
pub mod gesture;
pub mod model;
pub mod presentation;
pub mod showcase;
pub mod slideshow;

pub use catalog::Catalog;
pub use error::CoreError;
pub use gesture::{DEFAULT_DEADZONE, Swipe, SwipeTracker};
pub use model::Product;
pub use presentation::{Presentation, ViewMode};
pub use showcase::{TabletShowcase, TvShowcase};
pub use slideshow::Slideshow;
