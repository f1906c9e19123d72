//! Error types for the showcase core.
//!
//! The kiosk is designed to degrade silently — an empty catalog falls
//! back to sample data, a missing badge is simply omitted — so the only
//! hard errors are caller contract violations and malformed input files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A selection targeted an index the catalog does not have.
    /// The reference UI only ever selects enumerated indices, so this
    /// is a caller bug — rejected rather than wrapped or clamped.
    #[error("product index {index} out of range for catalog of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The bundled catalog file could not be parsed.
    #[error("failed to parse catalog JSON: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
