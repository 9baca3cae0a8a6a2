use super::text::text;
use crate::{theme, widget::*};
use iced::{alignment::Horizontal, widget::container, Length};

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(t)).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(t)).style(theme::button::secondary)
}

pub fn transparent<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(t)).style(theme::button::transparent)
}

fn content<'a, T: 'a>(t: &'static str) -> Container<'a, T> {
    container(text(t))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(5)
}
