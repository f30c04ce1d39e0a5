//! # Error Types
//!
//! This module defines error types used throughout the seedart library.

use thiserror::Error;

/// Main error type for seedart operations
#[derive(Debug, Error)]
pub enum SeedError {
    /// HTTP client construction errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// Unknown style name
    #[error("Style error: {0}")]
    Style(String),

    /// PNG encoding rejected its input
    #[error("PNG error: {0}")]
    Png(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
