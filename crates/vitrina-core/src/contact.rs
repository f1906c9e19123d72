//! Outbound messaging deep-links.
//!
//! The kiosk never performs network I/O itself — it only constructs
//! `wa.me` links (shown as text next to the QR panel) that the host
//! environment opens. Fire-and-forget: nothing here can observably fail,
//! so a link that cannot be built degrades to the bare contact URL.

use url::Url;

use crate::model::Product;

const WHATSAPP_BASE: &str = "https://wa.me";

/// `https://wa.me/<handle>?text=<urlencoded message>`.
fn deep_link(whatsapp: &str, message: &str) -> String {
    let base = format!("{WHATSAPP_BASE}/{whatsapp}");
    Url::parse_with_params(&base, [("text", message)]).map_or(base, Into::into)
}

/// General inquiry link for the TV QR panel and the home page footer.
pub fn general_inquiry(whatsapp: &str, brand: &str) -> String {
    deep_link(
        whatsapp,
        &format!("Hola, vi la pantalla de {brand} y quiero más info"),
    )
}

/// Product-specific order link for the detail view and TV product card.
pub fn product_inquiry(whatsapp: &str, brand: &str, product: &Product) -> String {
    deep_link(
        whatsapp,
        &format!(
            "Hola! Vi {} en la feria de {brand} y me interesa. ¿Puedes darme más información?",
            product.name
        ),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn general_link_targets_the_handle() {
        let link = general_inquiry("573001112233", "Mi Marca");
        let url = Url::parse(&link).unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/573001112233");
    }

    #[test]
    fn message_is_url_encoded_and_round_trips() {
        let link = general_inquiry("573001112233", "Mi Marca");
        assert!(!link.contains(' '), "raw spaces must be encoded: {link}");

        let url = Url::parse(&link).unwrap();
        let (key, text) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(text, "Hola, vi la pantalla de Mi Marca y quiero más info");
    }

    #[test]
    fn product_link_names_product_and_brand() {
        let product = Product::new("p1", "Brownie con nueces", "d", 12_000.0, "/b.jpg", None);
        let link = product_inquiry("573001112233", "Mi Marca", &product);

        let url = Url::parse(&link).unwrap();
        let (_, text) = url.query_pairs().next().unwrap();
        assert!(text.contains("Brownie con nueces"));
        assert!(text.contains("Mi Marca"));
    }
}
