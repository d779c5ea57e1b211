//! Page views.
//!
//! Pure projections of `(Catalog, BrowserState)` into Iced elements.
//! No view function mutates state; all interaction flows back through
//! [`Message`](crate::message::Message).

mod filter_bar;
mod info_panel;
mod table;

use compat_catalog::{BrowserState, Catalog};
use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::constants;
use crate::message::Message;
use crate::theme::{GRAY_500, GRAY_700, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, card};

/// Top-level page: header, filter card, compatibility table, chipset
/// info panel.
pub fn view_browser<'a>(catalog: &'a Catalog, browser: &'a BrowserState) -> Element<'a, Message> {
    let header = column![
        text(constants::PAGE_TITLE).size(30),
        Space::new().height(SPACING_XS),
        text(constants::PAGE_SUBTITLE).size(16).color(GRAY_700),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let content = column![
        header,
        section_card(
            lucide::search().size(18),
            constants::FILTER_CARD_TITLE,
            filter_bar::view_filter_bar(catalog, browser),
        ),
        section_card(
            lucide::cpu().size(18),
            constants::TABLE_CARD_TITLE,
            table::view_table(catalog, browser),
        ),
        section_card(
            lucide::info().size(18),
            constants::INFO_CARD_TITLE,
            info_panel::view_info_panel(),
        ),
    ]
    .spacing(SPACING_LG)
    .max_width(1120.0);

    scrollable(
        container(content)
            .center_x(Length::Fill)
            .padding(SPACING_LG),
    )
    .height(Length::Fill)
    .into()
}

/// A card section with an icon, a title and a body.
fn section_card<'a>(
    icon: iced::widget::Text<'a>,
    title: &'a str,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let heading = row![icon, text(title).size(17)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    container(
        column![heading, body]
            .spacing(SPACING_MD)
            .width(Length::Fill),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(card)
    .into()
}

/// Muted helper text used by several sections.
pub(crate) fn muted<'a>(content: impl Into<String>) -> iced::widget::Text<'a> {
    let content: String = content.into();
    text(content)
        .size(12)
        .style(|_theme: &Theme| text::Style {
            color: Some(GRAY_500),
        })
}
