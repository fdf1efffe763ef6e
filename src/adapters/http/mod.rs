//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod matrix;

// Re-export key types for convenience
pub use matrix::matrix_router;
pub use matrix::MatrixAppState;
