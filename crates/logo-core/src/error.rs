// File: crates/logo-core/src/error.rs
// Summary: Engine error type; configuration faults fail fast, out-of-range UI requests are clamped elsewhere.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Rendering error: {message}")]
    Render { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogoError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, LogoError>;
