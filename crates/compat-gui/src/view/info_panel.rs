//! Static H110 chipset facts card body.
//!
//! Purely informational: no dependency on the catalog or the browser
//! state.

use iced::widget::{Text, column, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::constants;
use crate::message::Message;
use crate::theme::{SPACING_SM, SPACING_XS};

/// Two fact columns: key specifications and compatible CPU generations.
pub fn view_info_panel<'a>() -> Element<'a, Message> {
    let specs = fact_column(
        constants::INFO_SPECS_TITLE,
        &constants::INFO_SPECS,
        lucide::check,
    );
    let generations = fact_column(
        constants::INFO_GENERATIONS_TITLE,
        &constants::INFO_GENERATIONS,
        lucide::cpu,
    );

    row![specs, generations].spacing(SPACING_SM * 3.0).into()
}

fn fact_column<'a>(
    title: &'a str,
    facts: &'a [&'a str],
    icon: fn() -> Text<'static>,
) -> Element<'a, Message> {
    let mut items = column![text(title).size(14)].spacing(SPACING_SM);
    for fact in facts {
        items = items.push(
            row![
                icon().size(14).style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().primary.base.color),
                }),
                text(*fact).size(13),
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        );
    }
    items.width(Length::FillPortion(1)).into()
}
