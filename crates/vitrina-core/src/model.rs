//! Product record — the unit of display.

use serde::{Deserialize, Serialize};

/// One catalog entry. Immutable for the session; list order is display
/// order. `id` should be unique but uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    /// Opaque key, used only to tell products apart.
    pub id: String,

    pub name: String,

    pub description: String,

    /// Currency amount in whole units (no minor-unit scaling).
    pub price: f64,

    /// Image reference, displayed as-is — never validated or fetched.
    pub image: String,

    /// Optional short label ("TOP SELLER", "NEW", ...). Omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Convenience constructor for sample data and tests.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        badge: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
            badge: badge.map(str::to_owned),
        }
    }
}
