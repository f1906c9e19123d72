//! Palette and semantic styling for the kiosk.
//!
//! The accent color comes from [`ShowcaseConfig`]'s hex token and is
//! threaded through the screens; everything else is fixed. TV mode sits
//! on a near-black background (original "neutral-950"), tablet mode on
//! the default terminal background with bright card borders.

use ratatui::style::{Color, Modifier, Style};
use vitrina_config::ShowcaseConfig;

// ── Core palette ──────────────────────────────────────────────────────

/// Fallback accent when the configured token is malformed (#6c5dd3).
pub const DEFAULT_ACCENT: Color = Color::Rgb(108, 93, 211);
pub const WHATSAPP_GREEN: Color = Color::Rgb(37, 211, 102); // #25d366
pub const WARM_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_DARK: Color = Color::Rgb(10, 10, 12); // tv backdrop
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36

/// Resolve the configured accent, falling back on a malformed token.
pub fn accent_from(config: &ShowcaseConfig) -> Color {
    match config.accent_rgb() {
        Ok((r, g, b)) => Color::Rgb(r, g, b),
        Err(err) => {
            tracing::warn!(%err, "using default accent color");
            DEFAULT_ACCENT
        }
    }
}

// ── Semantic styles ───────────────────────────────────────────────────

/// Title text for blocks/panels, tinted with the accent.
pub fn title_style(accent: Color) -> Style {
    Style::default().fg(accent).add_modifier(Modifier::BOLD)
}

/// Border for the selected/highlighted card.
pub fn border_selected(accent: Color) -> Style {
    Style::default().fg(accent)
}

/// Border for an ordinary card.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Product name in a card.
pub fn product_name() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

/// Price tag, tinted with the accent.
pub fn price_style(accent: Color) -> Style {
    Style::default().fg(accent).add_modifier(Modifier::BOLD)
}

/// Badge label ("TOP VENTAS", ...).
pub fn badge_style(accent: Color) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(accent)
        .add_modifier(Modifier::BOLD)
}

/// Secondary descriptive text.
pub fn muted() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Active tab in the tab bar.
pub fn tab_active(accent: Color) -> Style {
    Style::default().fg(accent).add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key(accent: Color) -> Style {
    Style::default().fg(accent).add_modifier(Modifier::BOLD)
}

/// The WhatsApp call-to-action line.
pub fn whatsapp_cta() -> Style {
    Style::default()
        .fg(WHATSAPP_GREEN)
        .add_modifier(Modifier::BOLD)
}
