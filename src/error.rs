use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid version: {0}")]
    Version(String),

    #[error("Invalid iteration: {0}")]
    Iteration(String),

    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown project: {0}")]
    UnknownProject(String),

    #[error("Unknown train: {0}")]
    UnknownTrain(String),

    #[error("Git operation failed: {0}")]
    GitOperation(String),

    #[error("Issue tracker request failed: {0}")]
    IssueTracker(String),

    #[error("{module}: {source}")]
    Module {
        module: String,
        #[source]
        source: Box<ReleaseError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ReleaseError {
    /// Attaches the name of the module whose update failed.
    pub fn in_module(self, module: impl Into<String>) -> Self {
        ReleaseError::Module {
            module: module.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
