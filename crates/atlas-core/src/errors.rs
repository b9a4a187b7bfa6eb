//! Cross-cutting error types for Atlas.
//!
//! Storage and routing errors live in `atlas-store` and `atlas-routes`.
//! Everything converges into `anyhow` in `atlas-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A page name that is not one of the catalog pages.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Data failed validation (shape, missing identity field).
    #[error("Validation error: {0}")]
    Validation(String),
}
