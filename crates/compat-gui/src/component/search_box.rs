//! Search box component.
//!
//! A text input with search icon and clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{GRAY_500, SPACING_SM, button_ghost, text_input_default};

/// Creates a search input with a leading icon and a trailing clear
/// button. The clear button is only shown while there is text.
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon = container(lucide::search().size(14)).style(|_theme: &Theme| {
        container::Style {
            text_color: Some(GRAY_500),
            ..Default::default()
        }
    });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding([8.0, 12.0])
        .size(13)
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(24.0))
            .center_y(Length::Shrink),
        container(input).width(Length::Fill),
    ]
    .spacing(SPACING_SM)
    .align_y(iced::Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(container(lucide::x().size(14)).style(|_theme: &Theme| container::Style {
                text_color: Some(GRAY_500),
                ..Default::default()
            }))
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button_ghost),
        );
    }

    container(content).width(Length::Fill).into()
}
