//! Error types for catalog construction.

use thiserror::Error;

/// Errors that can occur when loading a compatibility catalog.
///
/// All variants are load-time data errors; filtering and view-state
/// operations are total and cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Two records share the same board name. The name is the rendering
    /// key, so duplicates would make expand state ambiguous.
    #[error("Duplicate board name in catalog: {board}")]
    DuplicateBoard { board: String },

    /// A record has an empty supported-CPU list.
    #[error("Board {board} lists no supported CPUs")]
    NoSupportedCpus { board: String },

    /// A record claims zero RAM slots.
    #[error("Board {board} has zero RAM slots")]
    NoRamSlots { board: String },
}

/// Result type for catalog loading operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
