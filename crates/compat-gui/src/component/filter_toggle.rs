//! Manufacturer filter toggle button.

use iced::Element;
use iced::widget::{button, text};

use crate::theme::{button_primary, button_secondary};

/// A single filter button, filled while active and outlined otherwise.
pub fn filter_toggle<'a, M: Clone + 'a>(
    label: impl Into<String>,
    active: bool,
    on_press: M,
) -> Element<'a, M> {
    let label: String = label.into();
    let style = if active {
        button_primary
    } else {
        button_secondary
    };

    button(text(label).size(13))
        .on_press(on_press)
        .padding([6.0, 14.0])
        .style(style)
        .into()
}
