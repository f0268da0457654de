//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod builder;
mod handlers;
pub mod routes;
pub mod server;
pub mod state;


pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
