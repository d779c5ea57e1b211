//! Motherboard/CPU compatibility catalog for the Intel H110 chipset.
//!
//! This crate holds the data layer of Board Compat Browser:
//!
//! - [`CompatibilityRecord`] - one motherboard's descriptive and
//!   compatibility data
//! - [`Catalog`] - the immutable, ordered record store with load-time
//!   validation and the filter engine
//! - [`BrowserState`] - transient per-session view state (search text,
//!   manufacturer selection, expanded row)
//!
//! The catalog is populated once at startup and never mutated. Filtering
//! is a pure derivation over the record store and is recomputed on every
//! state change rather than cached.

mod browser;
mod builtin;
mod catalog;
mod error;
mod filter;
mod record;

pub use browser::BrowserState;
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use filter::ManufacturerFilter;
pub use record::{BoardId, CompatibilityRecord};
