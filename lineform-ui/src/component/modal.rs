use iced::widget::{center, mouse_area, opaque, stack};
use iced::Length;

use crate::{theme, widget::*};

/// Lays `dialog` over `base` with a translucent backdrop. Clicking the
/// backdrop emits `on_close`.
pub fn overlay<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_close: Message,
) -> Element<'a, Message> {
    let card = Container::new(dialog)
        .padding(25)
        .max_width(450)
        .style(theme::card::modal);
    stack![
        base.into(),
        opaque(
            mouse_area(
                center(opaque(card))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(theme::card::backdrop)
            )
            .on_press(on_close)
        )
    ]
    .into()
}
