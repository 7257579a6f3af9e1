//! Errors for the fallible edges of the app: config, catalog files and the terminal.
//!
//! The session engine itself never fails; everything here happens before a
//! session starts or while talking to the terminal.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Duplicate card id in catalog: {0}")]
    DuplicateCard(String),

    #[error("Invalid card {id}: {reason}")]
    InvalidCard { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
