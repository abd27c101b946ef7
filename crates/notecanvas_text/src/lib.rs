//! Text metrics for notecanvas
//!
//! This crate provides:
//! - Font descriptions (CSS shorthand or discrete fields) normalized into one
//!   canonical [`FontInfo`]
//! - A table of known font families with width/ascent/descent ratios
//! - A code point → advance width table for symbolic (music) fonts
//! - [`GlyphEstimator`], a [`TextMeasurer`] that approximates text extents
//!   without rasterizing anything

pub mod families;
pub mod font;
pub mod glyph_widths;
pub mod measure;

pub use families::{lookup_family, FamilyMetrics};
pub use font::{FontInfo, FontSize, FontSpec, FontStyle, FontUnit, FontWeight};
pub use measure::{GlyphEstimator, TextMeasurer, TextMetrics};

use thiserror::Error;

/// Font description errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextError {
    #[error("Invalid font size: {0:?}")]
    InvalidFontSize(String),

    #[error("Invalid font weight: {0:?}")]
    InvalidFontWeight(String),

    #[error("Invalid font style: {0:?}")]
    InvalidFontStyle(String),

    #[error("Font description has no family")]
    EmptyFontFamily,
}

pub type Result<T> = std::result::Result<T, TextError>;
