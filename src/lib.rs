mod config;
mod frontend;
pub mod health_core;
mod utils;

pub use config::Settings;
pub use frontend::start_server;
