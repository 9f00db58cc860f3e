// One error type for the whole app.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The character matrix is empty or ragged.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// A surface/scene setting is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Window init error: {0}")]
    WindowInit(String),

    #[error("Window update error: {0}")]
    WindowUpdate(String),

    #[error("Could not read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
