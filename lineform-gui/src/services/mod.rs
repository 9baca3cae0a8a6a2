pub mod http;
pub mod registration;
