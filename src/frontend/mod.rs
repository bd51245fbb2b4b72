mod app;
mod components;
mod server_liveview;
mod types;

pub use server_liveview::start_server;
