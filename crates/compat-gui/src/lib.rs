//! Board Compat Browser - GUI library.
//!
//! Application types and modules for the H110 compatibility browser.
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod constants;
pub mod message;
pub mod theme;
pub mod view;
