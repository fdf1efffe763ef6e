//! Adapters - Connect the application layer to the outside world.
//!
//! - `http` - Axum REST API for matrix evaluation and editing

pub mod http;
