pub mod config;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;
