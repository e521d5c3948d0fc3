pub mod clock;
pub mod config;
pub mod error;
pub mod schema;
pub mod server;
pub mod time_service;
pub mod zone;
