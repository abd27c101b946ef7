//! Font descriptions
//!
//! Callers describe fonts either as a CSS shorthand string
//! (`"italic bold 12pt Bravura, serif"`) or as discrete fields. Both forms
//! go through [`FontSpec::normalize`] and come out as a [`FontInfo`], the
//! only shape the rest of the system looks at.

use std::fmt;
use std::str::FromStr;

use notecanvas_core::{fmt_num, keys, Attributes};
use serde::{Deserialize, Serialize};

use crate::{Result, TextError};

/// Base pixel size of one `em`
pub const EM_PIXELS: f64 = 16.0;

/// Length unit of a font size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontUnit {
    Px,
    #[default]
    Pt,
    Em,
    Percent,
    In,
    Mm,
    Cm,
}

impl FontUnit {
    /// Pixels per one unit
    pub fn pixels_per_unit(self) -> f64 {
        match self {
            FontUnit::Px => 1.0,
            FontUnit::Pt => 4.0 / 3.0,
            FontUnit::Em => EM_PIXELS,
            FontUnit::Percent => EM_PIXELS / 100.0,
            FontUnit::In => 96.0,
            FontUnit::Mm => 96.0 / 25.4,
            FontUnit::Cm => 96.0 / 2.54,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            FontUnit::Px => "px",
            FontUnit::Pt => "pt",
            FontUnit::Em => "em",
            FontUnit::Percent => "%",
            FontUnit::In => "in",
            FontUnit::Mm => "mm",
            FontUnit::Cm => "cm",
        }
    }

    /// Accepted suffixes, longest first so `rem` wins over `em`
    const SUFFIXES: [(&'static str, FontUnit); 8] = [
        ("rem", FontUnit::Em),
        ("pt", FontUnit::Pt),
        ("px", FontUnit::Px),
        ("em", FontUnit::Em),
        ("in", FontUnit::In),
        ("mm", FontUnit::Mm),
        ("cm", FontUnit::Cm),
        ("%", FontUnit::Percent),
    ];

    /// Split `text` into its number and unit. A bare number is a point size.
    fn split_suffix(text: &str) -> (&str, FontUnit) {
        for (suffix, unit) in Self::SUFFIXES {
            let Some(cut) = text.len().checked_sub(suffix.len()) else {
                continue;
            };
            if text.is_char_boundary(cut) && text[cut..].eq_ignore_ascii_case(suffix) {
                return (&text[..cut], unit);
            }
        }
        (text, FontUnit::Pt)
    }
}

/// A font size with its unit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FontSizeRepr", into = "String")]
pub struct FontSize {
    pub value: f64,
    pub unit: FontUnit,
}

impl FontSize {
    pub const fn new(value: f64, unit: FontUnit) -> Self {
        Self { value, unit }
    }

    pub const fn pt(value: f64) -> Self {
        Self::new(value, FontUnit::Pt)
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, FontUnit::Px)
    }

    /// Size in pixels
    pub fn to_pixels(self) -> f64 {
        self.value * self.unit.pixels_per_unit()
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::pt(10.0)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", fmt_num(self.value), self.unit.suffix())
    }
}

impl FromStr for FontSize {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        let (number, unit) = FontUnit::split_suffix(s.trim());
        match number.parse::<f64>() {
            // `inf` and `nan` parse as floats but are family names here
            Ok(value) if value.is_finite() => Ok(Self { value, unit }),
            _ => Err(TextError::InvalidFontSize(s.to_string())),
        }
    }
}

impl From<f64> for FontSize {
    fn from(points: f64) -> Self {
        Self::pt(points)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FontSizeRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<FontSizeRepr> for FontSize {
    type Error = TextError;

    fn try_from(repr: FontSizeRepr) -> Result<Self> {
        match repr {
            FontSizeRepr::Number(points) => Ok(Self::pt(points)),
            FontSizeRepr::Text(text) => text.parse(),
        }
    }
}

impl From<FontSize> for String {
    fn from(size: FontSize) -> Self {
        size.to_string()
    }
}

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Bolder,
    Lighter,
    /// One of 100, 200, ... 900
    Numeric(u16),
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Normal => f.write_str("normal"),
            FontWeight::Bold => f.write_str("bold"),
            FontWeight::Bolder => f.write_str("bolder"),
            FontWeight::Lighter => f.write_str("lighter"),
            FontWeight::Numeric(weight) => write!(f, "{weight}"),
        }
    }
}

impl FromStr for FontWeight {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            "bolder" => Ok(FontWeight::Bolder),
            "lighter" => Ok(FontWeight::Lighter),
            other => match other.parse::<u16>() {
                Ok(weight) if (100..=900).contains(&weight) && weight % 100 == 0 => {
                    Ok(FontWeight::Numeric(weight))
                }
                _ => Err(TextError::InvalidFontWeight(s.to_string())),
            },
        }
    }
}

impl TryFrom<String> for FontWeight {
    type Error = TextError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<FontWeight> for String {
    fn from(weight: FontWeight) -> Self {
        weight.to_string()
    }
}

/// Font style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        })
    }
}

impl FromStr for FontStyle {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            "oblique" => Ok(FontStyle::Oblique),
            _ => Err(TextError::InvalidFontStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for FontStyle {
    type Error = TextError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<FontStyle> for String {
    fn from(style: FontStyle) -> Self {
        style.to_string()
    }
}

/// Canonical font record
#[derive(Clone, Debug, PartialEq)]
pub struct FontInfo {
    pub family: String,
    pub size: FontSize,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: FontSize::default(),
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

impl FontInfo {
    pub fn new(family: impl Into<String>, size: impl Into<FontSize>) -> Self {
        Self {
            family: family.into(),
            size: size.into(),
            ..Self::default()
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Font size in pixels
    pub fn pixel_size(&self) -> f64 {
        self.size.to_pixels()
    }

    /// CSS shorthand, leaving out `normal` style and weight
    pub fn to_css_string(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if self.style != FontStyle::Normal {
            parts.push(self.style.to_string());
        }
        if self.weight != FontWeight::Normal {
            parts.push(self.weight.to_string());
        }
        parts.push(self.size.to_string());
        parts.push(self.family.clone());
        parts.join(" ")
    }

    /// The four `font-*` presentation attributes
    pub fn attributes(&self) -> Attributes {
        Attributes::new()
            .with(keys::FONT_FAMILY, self.family.as_str())
            .with(keys::FONT_SIZE, self.size.to_string())
            .with(keys::FONT_WEIGHT, self.weight.to_string())
            .with(keys::FONT_STYLE, self.style.to_string())
    }
}

/// A font as callers hand it in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSpec {
    /// CSS `font` shorthand
    Shorthand(String),
    /// Discrete fields; missing ones keep the current value
    Parts {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        family: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<FontSize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<FontWeight>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<FontStyle>,
    },
}

impl Default for FontSpec {
    fn default() -> Self {
        FontInfo::default().into()
    }
}

impl From<&str> for FontSpec {
    fn from(shorthand: &str) -> Self {
        FontSpec::Shorthand(shorthand.to_string())
    }
}

impl From<String> for FontSpec {
    fn from(shorthand: String) -> Self {
        FontSpec::Shorthand(shorthand)
    }
}

impl From<FontInfo> for FontSpec {
    fn from(info: FontInfo) -> Self {
        FontSpec::Parts {
            family: Some(info.family),
            size: Some(info.size),
            weight: Some(info.weight),
            style: Some(info.style),
        }
    }
}

impl FontSpec {
    /// Discrete-field form with only a family and size
    pub fn family_size(family: impl Into<String>, size: impl Into<FontSize>) -> Self {
        FontSpec::Parts {
            family: Some(family.into()),
            size: Some(size.into()),
            weight: None,
            style: None,
        }
    }

    /// Resolve into a full record, filling unspecified fields from `base`
    pub fn normalize(&self, base: &FontInfo) -> Result<FontInfo> {
        match self {
            FontSpec::Shorthand(shorthand) => parse_shorthand(shorthand, base),
            FontSpec::Parts {
                family,
                size,
                weight,
                style,
            } => {
                let family = match family {
                    Some(family) if family.trim().is_empty() => {
                        return Err(TextError::EmptyFontFamily)
                    }
                    Some(family) => family.trim().to_string(),
                    None => base.family.clone(),
                };
                Ok(FontInfo {
                    family,
                    size: size.unwrap_or(base.size),
                    weight: weight.unwrap_or(base.weight),
                    style: style.unwrap_or(base.style),
                })
            }
        }
    }
}

/// Parse `[style] [weight] [size[/line-height]] [family...]`.
///
/// Leading keywords may come in any order; the first token that is neither
/// a keyword nor a size starts the family. A numeric weight is only taken as
/// a weight when a size follows it, so `100 Bravura` is a 100pt font.
/// Missing parts come from `base`.
fn parse_shorthand(input: &str, base: &FontInfo) -> Result<FontInfo> {
    let mut font = base.clone();
    let mut tokens = input.split_whitespace().peekable();
    let mut family: Vec<&str> = Vec::new();
    let mut seen_token = false;

    while let Some(token) = tokens.next() {
        seen_token = true;
        if token.eq_ignore_ascii_case("normal") || token.eq_ignore_ascii_case("small-caps") {
            continue;
        }
        if let Ok(style) = token.parse::<FontStyle>() {
            font.style = style;
            continue;
        }
        if let Ok(weight) = token.parse::<FontWeight>() {
            let numeric = matches!(weight, FontWeight::Numeric(_));
            if !numeric || tokens.peek().is_some_and(|next| parse_size_token(next).is_ok()) {
                font.weight = weight;
                continue;
            }
        }

        if let Ok(size) = parse_size_token(token) {
            font.size = size;
        } else {
            family.push(token);
        }
        family.extend(tokens.by_ref());
        break;
    }

    if !seen_token {
        return Err(TextError::EmptyFontFamily);
    }
    if !family.is_empty() {
        font.family = family.join(" ");
    }
    Ok(font)
}

/// Size part of a `size[/line-height]` token
fn parse_size_token(token: &str) -> Result<FontSize> {
    token.split('/').next().unwrap_or(token).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_size_parsing_and_pixels() {
        assert_eq!("12pt".parse::<FontSize>().unwrap(), FontSize::pt(12.0));
        assert_eq!("12".parse::<FontSize>().unwrap(), FontSize::pt(12.0));
        assert_eq!("30px".parse::<FontSize>().unwrap(), FontSize::px(30.0));
        assert_eq!(
            "150%".parse::<FontSize>().unwrap(),
            FontSize::new(150.0, FontUnit::Percent)
        );
        assert!("big".parse::<FontSize>().is_err());
        assert!("12furlongs".parse::<FontSize>().is_err());
        assert!("px".parse::<FontSize>().is_err());
        assert!("Infinity".parse::<FontSize>().is_err());

        assert_eq!(FontSize::pt(12.0).to_pixels(), 16.0);
        assert_eq!(FontSize::new(2.0, FontUnit::Em).to_pixels(), 32.0);
        assert_eq!(FontSize::new(50.0, FontUnit::Percent).to_pixels(), 8.0);
    }

    #[test]
    fn test_size_with_exponent_and_case() {
        assert_eq!("1e1px".parse::<FontSize>().unwrap(), FontSize::px(10.0));
        assert_eq!("2.5E1".parse::<FontSize>().unwrap(), FontSize::pt(25.0));
        assert_eq!("1.5REM".parse::<FontSize>().unwrap(), FontSize::new(1.5, FontUnit::Em));
        assert_eq!("3em".parse::<FontSize>().unwrap(), FontSize::new(3.0, FontUnit::Em));
    }

    #[test]
    fn test_weight_parsing() {
        assert_eq!("bold".parse::<FontWeight>().unwrap(), FontWeight::Bold);
        assert_eq!("700".parse::<FontWeight>().unwrap(), FontWeight::Numeric(700));
        assert!("12".parse::<FontWeight>().is_err());
        assert!("950".parse::<FontWeight>().is_err());
    }

    #[test]
    fn test_shorthand_full() {
        let font = FontSpec::from("italic bold 12pt Bravura, serif")
            .normalize(&FontInfo::default())
            .unwrap();
        assert_eq!(
            font,
            FontInfo::new("Bravura, serif", FontSize::pt(12.0))
                .with_weight(FontWeight::Bold)
                .with_style(FontStyle::Italic)
        );
    }

    #[test]
    fn test_shorthand_with_line_height_and_multiword_family() {
        let font = FontSpec::from("14px/1.2 Times New Roman")
            .normalize(&FontInfo::default())
            .unwrap();
        assert_eq!(font.family, "Times New Roman");
        assert_eq!(font.size, FontSize::px(14.0));
    }

    #[test]
    fn test_shorthand_exponent_size() {
        let font = FontSpec::from("1e1px Bravura")
            .normalize(&FontInfo::default())
            .unwrap();
        assert_eq!(font.family, "Bravura");
        assert_eq!(font.size, FontSize::px(10.0));
    }

    #[test]
    fn test_shorthand_lone_number_is_size() {
        let font = FontSpec::from("100 Bravura")
            .normalize(&FontInfo::default())
            .unwrap();
        assert_eq!(font.family, "Bravura");
        assert_eq!(font.size, FontSize::pt(100.0));
        assert_eq!(font.weight, FontWeight::Normal);

        let weighted = FontSpec::from("700 12pt Bravura")
            .normalize(&FontInfo::default())
            .unwrap();
        assert_eq!(weighted.weight, FontWeight::Numeric(700));
        assert_eq!(weighted.size, FontSize::pt(12.0));
    }

    #[test]
    fn test_shorthand_family_only_keeps_base_size() {
        let base = FontInfo::new("Arial", FontSize::pt(9.0));
        let font = FontSpec::from("Petaluma").normalize(&base).unwrap();
        assert_eq!(font.family, "Petaluma");
        assert_eq!(font.size, FontSize::pt(9.0));
    }

    #[test]
    fn test_empty_shorthand_is_error() {
        let err = FontSpec::from("   ").normalize(&FontInfo::default()).unwrap_err();
        assert_eq!(err, TextError::EmptyFontFamily);
    }

    #[test]
    fn test_parts_fill_from_base() {
        let base = FontInfo::default().with_weight(FontWeight::Bold);
        let font = FontSpec::family_size("Bravura", 30.0)
            .normalize(&base)
            .unwrap();
        assert_eq!(font.family, "Bravura");
        assert_eq!(font.size, FontSize::pt(30.0));
        assert_eq!(font.weight, FontWeight::Bold);
    }

    #[test]
    fn test_css_string() {
        assert_eq!(FontInfo::default().to_css_string(), "10pt Arial");
        let font = FontInfo::new("Arial", FontSize::pt(8.0)).with_style(FontStyle::Italic);
        assert_eq!(font.to_css_string(), "italic 8pt Arial");
    }

    #[test]
    fn test_font_attributes() {
        let attrs = FontInfo::default().attributes();
        assert_eq!(attrs.get("font-family"), Some("Arial"));
        assert_eq!(attrs.get("font-size"), Some("10pt"));
        assert_eq!(attrs.get("font-weight"), Some("normal"));
        assert_eq!(attrs.get("font-style"), Some("normal"));
    }
}
