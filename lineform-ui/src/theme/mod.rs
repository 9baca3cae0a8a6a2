pub mod button;
pub mod card;
pub mod text;
pub mod text_input;

// Style functions in this module target the built-in iced theme instead of a
// hand-rolled palette type. The custom look lives in the per-widget functions.
pub type Theme = iced::Theme;
