//! Bookshelf application library
//!
//! The catalog browser's modules plus the glue that boots them behind the
//! HTTP server.

pub mod app;
pub mod modules;
pub mod session;
pub mod utils;

/// Re-export commonly used types
pub use modules::*;
