//! Shared utilities for the fact-check workspace.

pub mod logging;

pub use logging::{init_tracing, init_tracing_with, LogFormat};
