use iced::widget::container::Style;
use iced::{Background, Border};

use super::Theme;
use crate::color;

pub fn modal(_theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(color::WHITE)),
        text_color: Some(color::LIGHT_BLACK),
        border: Border {
            radius: 25.0.into(),
            width: 1.0,
            color: color::GREY_2,
        },
        ..Default::default()
    }
}

/// Translucent layer behind a modal.
pub fn backdrop(_theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(color::BACKDROP)),
        ..Default::default()
    }
}
