//! Tag badges for CPU lists, feature lists and the manufacturer column.

use iced::Element;
use iced::widget::{container, text};

use crate::theme::{badge_outline, badge_secondary};

/// Filled pill badge - manufacturer names and feature tags.
pub fn badge_filled<'a, M: 'a>(label: impl Into<String>) -> Element<'a, M> {
    let label: String = label.into();
    container(text(label).size(11))
        .padding([3.0, 8.0])
        .style(badge_secondary)
        .into()
}

/// Outlined pill badge - supported CPU tags.
pub fn badge_outlined<'a, M: 'a>(label: impl Into<String>) -> Element<'a, M> {
    let label: String = label.into();
    container(text(label).size(11))
        .padding([3.0, 8.0])
        .style(badge_outline)
        .into()
}
