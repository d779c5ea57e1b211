//! Compatibility table card body.
//!
//! One row per visible record, with a conditional detail block directly
//! below the expanded row.

use compat_catalog::{BoardId, BrowserState, Catalog, CompatibilityRecord};
use iced::widget::{Space, button, column, container, row, rule, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::{badge_filled, badge_outlined};
use crate::constants;
use crate::message::Message;
use crate::theme::{
    GRAY_700, SPACING_MD, SPACING_SM, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y,
    button_ghost, detail_panel, table_header_cell,
};

use super::muted;

/// Relative column widths, aligned with [`constants::COLUMN_HEADERS`].
const COLUMN_PORTIONS: [u16; 7] = [3, 2, 2, 2, 2, 1, 2];

/// The full table: header row, data rows and expanded detail block.
pub fn view_table<'a>(catalog: &'a Catalog, browser: &'a BrowserState) -> Element<'a, Message> {
    let visible = browser.visible(catalog);

    let mut body = column![view_header_row()].spacing(0);

    if visible.is_empty() {
        body = body.push(
            container(muted(constants::NO_MATCHES))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(SPACING_MD),
        );
        return body.into();
    }

    for (row_idx, &(id, record)) in visible.iter().enumerate() {
        body = body.push(view_record_row(id, record, browser.is_expanded(id), row_idx));
        if browser.is_expanded(id) {
            body = body.push(view_detail_block(record));
        }
        body = body.push(rule::horizontal(1));
    }

    body.into()
}

fn view_header_row<'a>() -> Element<'a, Message> {
    let mut header = row![].spacing(0);
    for (label, portion) in constants::COLUMN_HEADERS.iter().zip(COLUMN_PORTIONS) {
        header = header.push(
            container(muted(*label))
                .width(Length::FillPortion(portion))
                .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
                .style(table_header_cell),
        );
    }
    header.into()
}

fn view_record_row<'a>(
    id: BoardId,
    record: &'a CompatibilityRecord,
    expanded: bool,
    row_idx: usize,
) -> Element<'a, Message> {
    let is_even = row_idx % 2 == 0;

    let toggle_icon = if expanded {
        lucide::chevron_up().size(14)
    } else {
        lucide::chevron_down().size(14)
    };
    let toggle_label = if expanded {
        constants::DETAILS_HIDE
    } else {
        constants::DETAILS_SHOW
    };
    let toggle = button(
        row![toggle_icon, text(toggle_label).size(12)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::DetailsToggled(id))
    .padding([4.0, 8.0])
    .style(button_ghost);

    let price: Element<'_, Message> = match &record.price {
        Some(price) => text(price.as_str())
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().primary.base.color),
            })
            .into(),
        None => text("—").size(13).color(GRAY_700).into(),
    };

    let cells: [Element<'_, Message>; 7] = [
        text(record.board.as_str()).size(13).into(),
        badge_filled(record.manufacturer.as_str()),
        text(record.socket.as_str()).size(13).color(GRAY_700).into(),
        text(record.max_ram.as_str()).size(13).color(GRAY_700).into(),
        text(record.form_factor.as_str())
            .size(13)
            .color(GRAY_700)
            .into(),
        price,
        toggle.into(),
    ];

    let mut data_row = row![].spacing(0).align_y(Alignment::Center);
    for (cell, portion) in cells.into_iter().zip(COLUMN_PORTIONS) {
        data_row = data_row.push(
            container(cell)
                .width(Length::FillPortion(portion))
                .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
        );
    }

    container(data_row)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: if is_even {
                Some(crate::theme::WHITE.into())
            } else {
                Some(crate::theme::GRAY_50.into())
            },
            ..Default::default()
        })
        .into()
}

fn view_detail_block<'a>(record: &'a CompatibilityRecord) -> Element<'a, Message> {
    let cpu_heading = row![lucide::cpu().size(14), text(constants::DETAIL_CPUS).size(13)]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center);
    let mut cpu_tags = row![].spacing(SPACING_XS);
    for cpu in &record.supported_cpus {
        cpu_tags = cpu_tags.push(badge_outlined(cpu.as_str()));
    }

    let feature_heading = row![
        lucide::settings().size(14),
        text(constants::DETAIL_FEATURES).size(13),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);
    let mut feature_tags = row![].spacing(SPACING_XS);
    for feature in &record.features {
        feature_tags = feature_tags.push(badge_filled(feature.as_str()));
    }

    let fields = row![
        labeled_field(constants::DETAIL_RAM_SLOTS, record.ram_slots.to_string()),
        labeled_field(constants::DETAIL_CHIPSET, record.chipset.clone()),
    ]
    .spacing(SPACING_MD * 2.0);

    container(
        column![
            cpu_heading,
            cpu_tags,
            Space::new().height(SPACING_XS),
            feature_heading,
            feature_tags,
            Space::new().height(SPACING_XS),
            fields,
        ]
        .spacing(SPACING_SM),
    )
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(detail_panel)
    .into()
}

fn labeled_field<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![muted(label), text(value).size(13)]
        .spacing(2.0)
        .into()
}
