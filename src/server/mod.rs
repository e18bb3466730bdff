mod api;
pub mod config;
mod http_layers;
mod pages;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use api::make_api_routes;
pub(self) use pages::make_page_routes;
pub use server::{make_app, run_server};
