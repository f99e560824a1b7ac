//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a result document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read result document: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur while materializing embedded attachments
#[derive(Error, Debug)]
pub enum AttachmentError {
    #[error("Embedding is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid attachment name: {0}")]
    InvalidName(String),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    TemplateFailed(#[from] liquid::Error),

    #[error("Spreadsheet generation failed: {0}")]
    SpreadsheetFailed(#[from] rust_xlsxwriter::XlsxError),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading the report configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Config JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No input result document configured")]
    MissingInput,
}
