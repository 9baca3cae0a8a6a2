use iced::widget::button::{self, Status, Style};

use super::Theme;

pub fn primary(theme: &Theme, status: Status) -> Style {
    rounded(button::primary(theme, status))
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    rounded(button::secondary(theme, status))
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button::text(theme, status)
}

fn rounded(mut style: Style) -> Style {
    style.border.radius = 25.0.into();
    style
}
