use super::Theme;
use crate::color;
use iced::widget::text::Style;

pub fn secondary(_theme: &Theme) -> Style {
    Style {
        color: Some(color::GREY_3),
    }
}

pub fn warning(_theme: &Theme) -> Style {
    Style {
        color: Some(color::RED),
    }
}

pub fn success(_theme: &Theme) -> Style {
    Style {
        color: Some(color::GREEN),
    }
}
