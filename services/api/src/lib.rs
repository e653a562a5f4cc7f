//! Catalog service: items, people and cookie-session users over a document store

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;

pub use config::ServerConfig;
pub use routes::create_router;
pub use state::AppState;
