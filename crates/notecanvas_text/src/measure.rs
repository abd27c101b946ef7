//! Text measurement without font rasterization
//!
//! Symbolic fonts are measured glyph by glyph from the advance table;
//! everything else is `char count * pixel size * average width ratio`.
//! The numbers only need to be good enough for layout decisions.

use std::ops::RangeInclusive;

use notecanvas_core::Rect;

use crate::families::lookup_family;
use crate::font::FontInfo;
use crate::glyph_widths::{self, STAFF_UNITS_PER_EM};

/// Code points reserved for symbolic glyphs (the BMP private-use area)
pub const SYMBOL_RANGE: RangeInclusive<char> = '\u{E000}'..='\u{F8FF}';

/// Advance, as a fraction of the pixel size, for reserved code points
/// missing from the table
pub const MISSING_GLYPH_RATIO: f64 = 0.35;

/// Estimated extents of a run of text
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    /// Distance from the baseline up to the top
    pub ascent: f64,
    /// Distance from the baseline down to the bottom
    pub descent: f64,
}

impl TextMetrics {
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }

    /// Bounding box relative to the baseline origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, -self.ascent, self.width, self.height())
    }
}

/// Glyph-measurement provider
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontInfo) -> TextMetrics;
}

/// Estimates widths from family ratios and the symbolic advance table
#[derive(Clone, Copy, Debug, Default)]
pub struct GlyphEstimator;

impl TextMeasurer for GlyphEstimator {
    fn measure(&self, text: &str, font: &FontInfo) -> TextMetrics {
        let Some(first) = text.chars().next() else {
            return TextMetrics::default();
        };

        let px = font.pixel_size();
        let family = lookup_family(&font.family);
        let average = px * family.avg_width_ratio;

        let width = if family.symbolic && SYMBOL_RANGE.contains(&first) {
            let unit = px / STAFF_UNITS_PER_EM;
            text.chars()
                .map(|c| {
                    if !SYMBOL_RANGE.contains(&c) {
                        average
                    } else if let Some(advance) = glyph_widths::advance(c) {
                        advance * unit
                    } else {
                        tracing::trace!(glyph = %format!("U+{:04X}", c as u32), "no advance width");
                        px * MISSING_GLYPH_RATIO
                    }
                })
                .sum()
        } else {
            text.chars().count() as f64 * average
        };

        TextMetrics {
            width,
            ascent: px * family.ascent_ratio,
            descent: px * family.descent_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontSize;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_text_is_zero() {
        let metrics = GlyphEstimator.measure("", &FontInfo::default());
        assert_eq!(metrics, TextMetrics::default());
        assert_eq!(metrics.bounds(), Rect::ZERO);
    }

    #[test]
    fn test_ordinary_text() {
        // 12pt = 16px, Arial avg 0.52
        let font = FontInfo::new("Arial", FontSize::pt(12.0));
        let metrics = GlyphEstimator.measure("abcd", &font);
        assert!(approx(metrics.width, 4.0 * 16.0 * 0.52));
        assert!(approx(metrics.ascent, 16.0 * 0.905));
        assert!(approx(metrics.descent, 16.0 * 0.212));
    }

    #[test]
    fn test_symbolic_glyphs_use_table() {
        let font = FontInfo::new("Bravura", FontSize::px(40.0));
        let metrics = GlyphEstimator.measure("\u{E050}\u{E0A4}", &font);
        assert!(approx(metrics.width, (2.684 + 1.18) * 10.0));
    }

    #[test]
    fn test_symbolic_fallbacks() {
        let font = FontInfo::new("Bravura", FontSize::px(40.0));

        // reserved but unknown, then an ordinary character
        let metrics = GlyphEstimator.measure("\u{E050}\u{E001}a", &font);
        let expected = 2.684 * 10.0 + 40.0 * MISSING_GLYPH_RATIO + 40.0 * 0.5;
        assert!(approx(metrics.width, expected));
    }

    #[test]
    fn test_symbolic_font_with_plain_leading_char() {
        let font = FontInfo::new("Bravura", FontSize::px(40.0));
        let metrics = GlyphEstimator.measure("a\u{E050}", &font);
        assert!(approx(metrics.width, 2.0 * 40.0 * 0.5));
    }

    #[test]
    fn test_bounds_relative_to_baseline() {
        let font = FontInfo::new("Arial", FontSize::px(10.0));
        let bounds = GlyphEstimator.measure("a", &font).bounds();
        assert!(approx(bounds.y(), -9.05));
        assert!(approx(bounds.height(), 9.05 + 2.12));
        assert_eq!(bounds.x(), 0.0);
    }
}
