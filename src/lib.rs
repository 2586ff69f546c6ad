//! Mailsmith - A lightweight email drafting server
//!
//! Produces templated email bodies from tone/length parameters and caches
//! results keyed by the full set of generation parameters.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;

pub use api::AppState;
pub use config::Config;
