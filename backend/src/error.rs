use std::path::PathBuf;
use thiserror::Error;

/// Failures of the platform layer. Every startup variant is fatal, `Render` is not.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Error while initializing: {0}")]
    SubsystemInit(String),

    #[error("Error while creating a window: {0}")]
    WindowCreate(String),

    #[error("Error while creating a renderer: {0}")]
    RendererCreate(String),

    #[error("Error while setting logical render size: {0}")]
    LogicalSize(String),

    #[error("Error while loading image {path:?}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },

    #[error("Error while creating texture: {0}")]
    TextureCreate(String),

    #[error("Error while rendering a frame: {0}")]
    Render(String),
}

pub type BackendResult<T> = Result<T, BackendError>;
