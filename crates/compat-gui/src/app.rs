//! Main application struct.
//!
//! Implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update →
//! View. All state changes happen in `update()`; the view is a pure
//! function of the current state.

use iced::{Element, Task, Theme};

use compat_catalog::{BrowserState, Catalog};

use crate::constants;
use crate::message::Message;
use crate::theme::browser_theme;
use crate::view::view_browser;

/// Root of the Iced application.
pub struct App {
    /// Immutable record store, built once at startup.
    catalog: Catalog,
    /// Transient per-session view state.
    browser: BrowserState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup; there are no startup tasks to run.
    pub fn new() -> (Self, Task<Message>) {
        let catalog = Catalog::builtin();
        tracing::info!("Loaded built-in catalog with {} boards", catalog.len());

        let app = Self {
            catalog,
            browser: BrowserState::new(),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes
    /// happen here. Every operation is synchronous and total, so no
    /// message ever produces a follow-up task.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(term) => {
                tracing::debug!(search = %term, "Search term changed");
                self.browser.set_search_term(term);
            }
            Message::SearchCleared => {
                self.browser.set_search_term(String::new());
            }
            Message::ManufacturerSelected(filter) => {
                tracing::debug!(manufacturer = %filter, "Manufacturer filter selected");
                self.browser.select_manufacturer(filter);
            }
            Message::DetailsToggled(id) => {
                self.browser.toggle_expanded(id);
            }
        }
        Task::none()
    }

    /// Render the current view.
    pub fn view(&self) -> Element<'_, Message> {
        view_browser(&self.catalog, &self.browser)
    }

    /// Window title.
    pub fn title(&self) -> String {
        constants::APP_NAME.to_string()
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        browser_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compat_catalog::ManufacturerFilter;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn starts_with_all_boards_visible() {
        let app = app();
        assert_eq!(app.browser.visible(&app.catalog).len(), 4);
        assert_eq!(app.browser.expanded, None);
    }

    #[test]
    fn search_messages_drive_the_filter() {
        let mut app = app();
        let _ = app.update(Message::SearchChanged("gigabyte".to_string()));
        let visible = app.browser.visible(&app.catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.board, "Gigabyte GA-H110M-S2H");

        let _ = app.update(Message::SearchCleared);
        assert_eq!(app.browser.search_term, "");
        assert_eq!(app.browser.visible(&app.catalog).len(), 4);
    }

    #[test]
    fn manufacturer_messages_replace_the_selection() {
        let mut app = app();
        let _ = app.update(Message::ManufacturerSelected(ManufacturerFilter::Only(
            "ASRock".to_string(),
        )));
        let visible = app.browser.visible(&app.catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.board, "ASRock H110M-DGS");

        let _ = app.update(Message::ManufacturerSelected(ManufacturerFilter::All));
        assert_eq!(app.browser.visible(&app.catalog).len(), 4);
    }

    #[test]
    fn toggle_messages_expand_at_most_one_row() {
        let mut app = app();
        let ids: Vec<_> = app.catalog.records().map(|(id, _)| id).collect();

        let _ = app.update(Message::DetailsToggled(ids[0]));
        assert!(app.browser.is_expanded(ids[0]));

        let _ = app.update(Message::DetailsToggled(ids[1]));
        assert!(app.browser.is_expanded(ids[1]));
        assert!(!app.browser.is_expanded(ids[0]));

        let _ = app.update(Message::DetailsToggled(ids[1]));
        assert_eq!(app.browser.expanded, None);
    }
}
