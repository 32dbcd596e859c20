use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TubeinfoError {
    #[error("yt-dlp {operation} failed for {url} (exit code {code:?}): {stderr}")]
    ToolFailed {
        operation: &'static str,
        url: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("yt-dlp returned no video id for {url}")]
    MissingVideoId { url: String },

    #[error("Malformed subtitle file {path}: {reason}")]
    MalformedSubtitles { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TubeinfoError>;
