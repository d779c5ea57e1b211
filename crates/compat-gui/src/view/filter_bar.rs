//! Search and manufacturer filter card body.

use compat_catalog::{BrowserState, Catalog};
use iced::widget::{column, container, row};
use iced::{Alignment, Element, Length};

use crate::component::{filter_toggle, search_box};
use crate::constants;
use crate::message::Message;
use crate::theme::{SPACING_SM, SPACING_XS};

use super::muted;

/// Search input, one toggle per manufacturer (plus "all") and a result
/// count line.
pub fn view_filter_bar<'a>(
    catalog: &'a Catalog,
    browser: &'a BrowserState,
) -> Element<'a, Message> {
    let search = search_box(
        &browser.search_term,
        constants::SEARCH_PLACEHOLDER,
        Message::SearchChanged,
        Message::SearchCleared,
    );

    let mut toggles = row![].spacing(SPACING_XS);
    for option in catalog.manufacturer_options() {
        let active = option == browser.manufacturer;
        let label = option.label().to_string();
        toggles = toggles.push(filter_toggle(
            label,
            active,
            Message::ManufacturerSelected(option),
        ));
    }

    let shown = browser.visible(catalog).len();
    let stats = muted(format!("{} из {} плат", shown, catalog.len()));

    column![
        row![
            container(search).width(Length::FillPortion(3)),
            container(toggles).width(Length::Shrink),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        stats,
    ]
    .spacing(SPACING_SM)
    .into()
}
