//! Paint state and the save/restore stack

use notecanvas_core::{fmt_num, keys, Attributes};
use notecanvas_text::FontInfo;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Requested soft shadow.
///
/// Kept so save/restore round-trips it, but never rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            blur: 0.0,
        }
    }
}

/// Everything the paint setters mutate
#[derive(Clone, Debug, PartialEq)]
pub struct PaintState {
    pub fill: String,
    pub stroke: String,
    /// Value of the `stroke-width` attribute inherited by fills and text
    pub stroke_width: f64,
    /// Width used when stroking a path
    pub line_width: f64,
    pub line_dash: SmallVec<[f64; 4]>,
    pub line_cap: Option<LineCap>,
    pub font: FontInfo,
    pub shadow: Shadow,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: "black".to_string(),
            stroke: "black".to_string(),
            stroke_width: 0.3,
            line_width: 1.0,
            line_dash: SmallVec::new(),
            line_cap: None,
            font: FontInfo::default(),
            shadow: Shadow::default(),
        }
    }
}

impl PaintState {
    /// `stroke-dasharray` value: comma-joined lengths, or `none`
    pub fn dash_array(&self) -> String {
        if self.line_dash.is_empty() {
            "none".to_string()
        } else {
            self.line_dash
                .iter()
                .map(|len| fmt_num(*len))
                .collect::<Vec<_>>()
                .join(",")
        }
    }

    /// Presentation attributes derived from this state
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new()
            .with_number(keys::STROKE_WIDTH, self.stroke_width)
            .with(keys::STROKE_DASHARRAY, self.dash_array())
            .with(keys::FILL, self.fill.as_str())
            .with(keys::STROKE, self.stroke.as_str());
        attrs.merge(&self.font.attributes());
        if let Some(cap) = self.line_cap {
            attrs.set(keys::STROKE_LINECAP, cap.as_str());
        }
        attrs
    }
}

/// Current paint state plus the states captured by `save`
#[derive(Clone, Debug, Default)]
pub struct PaintStack {
    current: PaintState,
    saved: Vec<PaintState>,
}

impl PaintStack {
    pub fn new(initial: PaintState) -> Self {
        Self {
            current: initial,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> &PaintState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut PaintState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// Pop the last saved state; without one this does nothing
    pub fn restore(&mut self) -> bool {
        match self.saved.pop() {
            Some(state) => {
                self.current = state;
                true
            }
            None => false,
        }
    }

    /// Number of states waiting to be restored
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_attributes() {
        let attrs = PaintState::default().attributes();
        let pairs: Vec<(&str, &str)> = attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("stroke-width", "0.3"),
                ("stroke-dasharray", "none"),
                ("fill", "black"),
                ("stroke", "black"),
                ("font-family", "Arial"),
                ("font-size", "10pt"),
                ("font-weight", "normal"),
                ("font-style", "normal"),
            ]
        );
    }

    #[test]
    fn test_dash_and_cap() {
        let mut state = PaintState::default();
        state.line_dash = SmallVec::from_slice(&[3.0, 1.5]);
        state.line_cap = Some(LineCap::Round);

        let attrs = state.attributes();
        assert_eq!(attrs.get("stroke-dasharray"), Some("3,1.5"));
        assert_eq!(attrs.get("stroke-linecap"), Some("round"));
    }

    #[test]
    fn test_save_restore_nested() {
        let mut stack = PaintStack::default();
        let original = stack.current().clone();

        stack.save();
        stack.current_mut().fill = "red".to_string();
        stack.save();
        stack.current_mut().line_width = 4.0;
        stack.current_mut().shadow.blur = 2.0;

        assert!(stack.restore());
        assert_eq!(stack.current().fill, "red");
        assert_eq!(stack.current().line_width, 1.0);

        assert!(stack.restore());
        assert_eq!(stack.current(), &original);

        assert!(!stack.restore());
        assert_eq!(stack.current(), &original);
        assert_eq!(stack.depth(), 0);
    }
}
