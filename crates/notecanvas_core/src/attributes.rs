//! Presentation attributes
//!
//! Attributes are an ordered map of hyphenated, SVG-style keys (`fill`,
//! `stroke-width`, `font-family`, ...) to string values. Insertion order is
//! preserved so emitted nodes are stable across runs.

use indexmap::map::Iter;
use indexmap::IndexMap;

/// Keys used by the paint layer
pub mod keys {
    pub const FILL: &str = "fill";
    pub const STROKE: &str = "stroke";
    pub const STROKE_WIDTH: &str = "stroke-width";
    pub const STROKE_DASHARRAY: &str = "stroke-dasharray";
    pub const STROKE_LINECAP: &str = "stroke-linecap";
    pub const FONT_FAMILY: &str = "font-family";
    pub const FONT_SIZE: &str = "font-size";
    pub const FONT_WEIGHT: &str = "font-weight";
    pub const FONT_STYLE: &str = "font-style";
    pub const OPACITY: &str = "opacity";
    pub const POINTER_EVENTS: &str = "pointer-events";
    pub const TRANSFORM: &str = "transform";
    pub const VIEW_BOX: &str = "viewBox";
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const D: &str = "d";

    pub const FONT_KEYS: [&str; 4] = [FONT_FAMILY, FONT_SIZE, FONT_WEIGHT, FONT_STYLE];
}

/// Format a number the way attribute values and path data expect it.
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// and non-finite values keep a readable spelling.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    format!("{value}")
}

/// Ordered attribute map
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string value, replacing any previous value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Set a numeric value formatted with [`fmt_num`]
    pub fn set_number(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.set(key, fmt_num(value))
    }

    /// Builder form of [`Attributes::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder form of [`Attributes::set_number`]
    pub fn with_number(mut self, key: impl Into<String>, value: f64) -> Self {
        self.set_number(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Overlay `other` on top of `self`; keys in `other` win
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in other.iter() {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// `self` overlaid with `other`, as a new map
    pub fn merged(&self, other: &Attributes) -> Attributes {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// Drop every entry whose key is in `ignored`
    pub fn without(mut self, ignored: &[&str]) -> Self {
        self.entries.retain(|key, _| !ignored.contains(&key.as_str()));
        self
    }

    /// Drop empty values and values identical to the inherited ones.
    ///
    /// `inherited` is the effective attribute set of the enclosing group.
    pub fn elide_inherited(mut self, inherited: &Attributes) -> Self {
        self.entries
            .retain(|key, value| !value.is_empty() && inherited.get(key) != Some(value.as_str()));
        self
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}
