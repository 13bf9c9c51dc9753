use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreshscanError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("No images found in: {0}")]
    NoImagesFound(String),

    #[error("Analysis request failed: {0}")]
    ApiCall(String),

    #[error("Could not parse the analysis response: {0}")]
    ApiParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] freshscan_common::Error),
}

pub type Result<T> = std::result::Result<T, FreshscanError>;
