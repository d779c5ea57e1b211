//! Reusable UI components.
//!
//! Small builder functions shared across the page views. Components take
//! data and message constructors, never application state.

mod badge;
mod filter_toggle;
mod search_box;

pub use badge::{badge_filled, badge_outlined};
pub use filter_toggle::filter_toggle;
pub use search_box::search_box;
