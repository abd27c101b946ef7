//! Context configuration
//!
//! Every field has a default, so a partial TOML table (or none at all) is
//! a valid configuration.

use notecanvas_text::{FontInfo, FontSpec};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::Result;
use crate::path::Precision;
use crate::state::{PaintState, Shadow};

/// Settings a [`SceneContext`](crate::SceneContext) is created with
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContextOptions {
    /// Decimal places kept in path coordinates
    #[serde(default = "default_precision_places")]
    pub precision_places: u32,
    /// Prepended to every category and identifier label
    #[serde(default = "default_namespace_prefix")]
    pub namespace_prefix: String,
    /// Fill and stroke used by `clear_rect`
    #[serde(default = "default_background_fill")]
    pub background_fill: String,
    #[serde(default = "default_black")]
    pub default_fill: String,
    #[serde(default = "default_black")]
    pub default_stroke: String,
    #[serde(default = "default_line_width")]
    pub default_line_width: f64,
    /// Initial `stroke-width` on the root
    #[serde(default = "default_stroke_width_attribute")]
    pub default_stroke_width_attribute: f64,
    #[serde(default)]
    pub font: FontSpec,
}

fn default_precision_places() -> u32 {
    3
}

fn default_namespace_prefix() -> String {
    "vf-".to_string()
}

fn default_background_fill() -> String {
    "white".to_string()
}

fn default_black() -> String {
    "black".to_string()
}

fn default_line_width() -> f64 {
    1.0
}

fn default_stroke_width_attribute() -> f64 {
    0.3
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            precision_places: default_precision_places(),
            namespace_prefix: default_namespace_prefix(),
            background_fill: default_background_fill(),
            default_fill: default_black(),
            default_stroke: default_black(),
            default_line_width: default_line_width(),
            default_stroke_width_attribute: default_stroke_width_attribute(),
            font: FontSpec::default(),
        }
    }
}

impl ContextOptions {
    /// Parse options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: ContextOptions = toml::from_str(content)?;
        Ok(options)
    }

    pub fn precision(&self) -> Precision {
        Precision::new(self.precision_places)
    }

    /// Paint state a fresh context starts from
    pub fn initial_state(&self) -> Result<PaintState> {
        let font = self.font.normalize(&FontInfo::default())?;
        Ok(PaintState {
            fill: self.default_fill.clone(),
            stroke: self.default_stroke.clone(),
            stroke_width: self.default_stroke_width_attribute,
            line_width: self.default_line_width,
            line_dash: SmallVec::new(),
            line_cap: None,
            font,
            shadow: Shadow::default(),
        })
    }
}
