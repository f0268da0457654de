//! # Pulseboard
//!
//! Metrics and analytics dashboard service: REST endpoints exposing CRUD
//! over metric and dashboard entities, plus a read-only integration
//! surface summarizing GitHub Copilot usage data.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pulseboard::{Config, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/pulseboard.yaml").await?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use server::{AppState, HttpServer, run_server};
pub use utils::error::{PulseboardError, Result};
