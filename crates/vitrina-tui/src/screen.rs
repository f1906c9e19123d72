//! Screen identifier enum — the kiosk's three route surfaces.

use std::fmt;

/// Identifies each kiosk screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    /// Landing page with the mode selector.
    #[default]
    Home,
    /// Unattended auto-rotating slideshow for TVs and large displays.
    Tv,
    /// Touch-style interactive catalog for fairs and events.
    Tablet,
}

impl ScreenId {
    /// All screens in tab order.
    pub const ALL: [ScreenId; 3] = [Self::Home, Self::Tv, Self::Tablet];

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tv => "TV",
            Self::Tablet => "Tablet",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_cycles() {
        assert_eq!(ScreenId::Home.next(), ScreenId::Tv);
        assert_eq!(ScreenId::Tablet.next(), ScreenId::Home);
        assert_eq!(ScreenId::Home.prev(), ScreenId::Tablet);
    }
}
