//! The ordered product list being displayed.

use tracing::debug;

use crate::error::CoreError;
use crate::model::Product;

/// An ordered, never-empty product list.
///
/// Both constructors substitute the built-in sample when given nothing
/// to show, so downstream index arithmetic can rely on `len() >= 1`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from host-supplied products. An empty list falls
    /// back to the sample — not an error.
    pub fn new(products: Vec<Product>) -> Self {
        if products.is_empty() {
            debug!("no products supplied, falling back to sample catalog");
            return Self::sample();
        }
        Self { products }
    }

    /// Parse a catalog from a JSON array of products. An empty array
    /// falls back to the sample, same as an absent file.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// The built-in 3-item demo catalog.
    pub fn sample() -> Self {
        Self {
            products: vec![
                Product::new(
                    "p1",
                    "Cheesecake de frutos rojos",
                    "Cremoso, con salsa artesanal y base de galleta crocante.",
                    28_000.0,
                    "/img/cheesecake.jpg",
                    Some("TOP VENTAS"),
                ),
                Product::new(
                    "p2",
                    "Brownie con nueces",
                    "Chocolate intenso, textura fudgy, nuez tostada.",
                    12_000.0,
                    "/img/brownie.jpg",
                    Some("FAVORITO"),
                ),
                Product::new(
                    "p3",
                    "Galletas de avena",
                    "Suaves, con chips de chocolate y canela.",
                    8_000.0,
                    "/img/cookies.jpg",
                    Some("NUEVO"),
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always `false` — empty inputs fall back to the sample.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_list_falls_back_to_sample() {
        let catalog = Catalog::new(Vec::new());
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().id, "p1");
    }

    #[test]
    fn supplied_products_are_kept_in_order() {
        let catalog = Catalog::new(vec![
            Product::new("a", "A", "first", 1.0, "/a.jpg", None),
            Product::new("b", "B", "second", 2.0, "/b.jpg", Some("NEW")),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().id, "b");
    }

    #[test]
    fn json_roundtrip_with_optional_badge() {
        let json = r#"[
            {"id":"x","name":"X","description":"d","price":5000,"image":"/x.jpg"},
            {"id":"y","name":"Y","description":"d","price":9000,"image":"/y.jpg","badge":"TOP"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().badge, None);
        assert_eq!(catalog.get(1).unwrap().badge.as_deref(), Some("TOP"));
    }

    #[test]
    fn empty_json_array_falls_back_to_sample() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Catalog::from_json("{not json").is_err());
    }
}
