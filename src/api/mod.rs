//! API Module
//!
//! HTTP handlers and routing for the drafting server REST API.
//!
//! # Endpoints
//! - `POST /generate` - Generate an email body (cache-first)
//! - `DELETE /cache` - Clear the result cache and its snapshot
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
