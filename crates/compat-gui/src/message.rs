//! Message types for the Elm-style architecture.
//!
//! All user interactions flow through this enum into `App::update`.

use compat_catalog::{BoardId, ManufacturerFilter};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Search input text changed.
    SearchChanged(String),

    /// Search cleared via the clear button.
    SearchCleared,

    /// A manufacturer filter button was pressed.
    ManufacturerSelected(ManufacturerFilter),

    /// A row's detail toggle was pressed.
    DetailsToggled(BoardId),
}
