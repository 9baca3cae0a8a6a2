pub mod app;
pub mod config;
pub mod logger;
pub mod schema;
pub mod services;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
