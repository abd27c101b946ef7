//! Paint error types

use notecanvas_core::SceneError;
use notecanvas_text::TextError;
use thiserror::Error;

/// Errors surfaced by the scene context
#[derive(Error, Debug)]
pub enum PaintError {
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Font error: {0}")]
    Text(#[from] TextError),

    #[error("Invalid context options: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PaintError>;
