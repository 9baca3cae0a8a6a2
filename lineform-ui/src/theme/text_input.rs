use iced::{
    widget::text_input::{self, Status, Style},
    Border,
};

use super::Theme;
use crate::color;

pub fn primary(theme: &Theme, status: Status) -> Style {
    text_input::default(theme, status)
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    bordered(theme, status, color::RED)
}

/// The positive affordance for a non-empty, error-free field.
pub fn valid(theme: &Theme, status: Status) -> Style {
    bordered(theme, status, color::GREEN)
}

fn bordered(theme: &Theme, status: Status, color: iced::Color) -> Style {
    Style {
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color,
        },
        ..text_input::default(theme, status)
    }
}
