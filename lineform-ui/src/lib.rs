pub mod color;
pub mod component;
pub mod theme;
pub mod widget;
