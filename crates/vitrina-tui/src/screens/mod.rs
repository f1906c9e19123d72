//! Screen implementations. Each screen is a top-level Component.

mod home;
mod tablet;
mod tv;

use ratatui::style::Color;
use vitrina_config::ShowcaseConfig;
use vitrina_core::Catalog;

use crate::component::Component;
use crate::screen::ScreenId;

pub use home::HomeScreen;
pub use tablet::TabletScreen;
pub use tv::TvScreen;

/// Create the three kiosk screens, each owning its own showcase state.
pub fn create_screens(
    config: &ShowcaseConfig,
    catalog: &Catalog,
    accent: Color,
) -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Home,
            Box::new(HomeScreen::new(config, accent)) as Box<dyn Component>,
        ),
        (
            ScreenId::Tv,
            Box::new(TvScreen::new(config, catalog.clone(), accent)),
        ),
        (
            ScreenId::Tablet,
            Box::new(TabletScreen::new(config, catalog.clone(), accent)),
        ),
    ]
}
