pub mod button;
pub mod form;
pub mod modal;
pub mod text;
