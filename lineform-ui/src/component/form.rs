use iced::Length;

use crate::{color, component::text, theme, widget::*};

/// Transient state of one text field.
///
/// `warning` is the active validation error, if any. A field earns the
/// positive ("accepted") affordance only when it is error-free AND its
/// trimmed value is non-empty; an error-free empty field stays neutral.
#[derive(Debug, Clone)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<&'static str>,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: String::new(),
            warning: None,
        }
    }
}

impl Value<String> {
    pub fn new(value: String) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn filled(&self) -> bool {
        !self.value.trim().is_empty()
    }

    pub fn valid(&self) -> bool {
        self.warning.is_none()
    }

    pub fn accepted(&self) -> bool {
        self.valid() && self.filled()
    }
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<&'static str>,
    accepted: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: iced::widget::TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: value.warning,
            accepted: value.accepted(),
        }
    }

    /// Creates a new [`Form`] that has a disabled input.
    pub fn new_disabled(placeholder: &str, value: &Value<String>) -> Self {
        Self {
            input: iced::widget::TextInput::new(placeholder, &value.value),
            warning: value.warning,
            accepted: false,
        }
    }

    /// Creates a new [`Form`] that only lets through digits, up to `max` of
    /// them, before applying the `on_change` function.
    pub fn new_digits<F>(
        placeholder: &str,
        value: &'a Value<String>,
        max: usize,
        on_change: F,
    ) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: iced::widget::TextInput::new(placeholder, &value.value).on_input(move |s| {
                if s.len() <= max && s.chars().all(|c| c.is_ascii_digit()) {
                    on_change(s)
                } else {
                    on_change(value.value.clone())
                }
            }),
            warning: value.warning,
            accepted: value.accepted(),
        }
    }

    /// Masks the input content (password fields).
    pub fn secure(mut self) -> Self {
        self.input = self.input.secure(true);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        let input = if form.warning.is_some() {
            form.input.style(theme::text_input::invalid)
        } else if form.accepted {
            form.input.style(theme::text_input::valid)
        } else {
            form.input.style(theme::text_input::primary)
        };
        Container::new(
            Column::new()
                .push(input)
                .push_maybe(
                    form.warning
                        .map(|message| text::caption(message).color(color::RED)),
                )
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_free_field_is_neutral_not_accepted() {
        let v = Value::default();
        assert!(v.valid());
        assert!(!v.filled());
        assert!(!v.accepted());
    }

    #[test]
    fn whitespace_only_value_is_not_filled() {
        let v = Value::new("   ".to_string());
        assert!(!v.filled());
        assert!(!v.accepted());
    }

    #[test]
    fn filled_error_free_field_is_accepted() {
        let v = Value::new("สมชาย".to_string());
        assert!(v.accepted());
    }

    #[test]
    fn field_with_warning_is_never_accepted() {
        let v = Value {
            value: "123".to_string(),
            warning: Some("bad"),
        };
        assert!(v.filled());
        assert!(!v.accepted());
    }
}
