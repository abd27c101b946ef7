//! Known font families and their sizing ratios

/// Sizing model for one font family.
///
/// Ratios are fractions of the pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FamilyMetrics {
    pub name: &'static str,
    /// Average advance of an ordinary character
    pub avg_width_ratio: f64,
    pub ascent_ratio: f64,
    pub descent_ratio: f64,
    /// One pictographic glyph per private-use code point (music fonts)
    pub symbolic: bool,
}

impl FamilyMetrics {
    const fn text(name: &'static str, avg: f64, ascent: f64, descent: f64) -> Self {
        Self {
            name,
            avg_width_ratio: avg,
            ascent_ratio: ascent,
            descent_ratio: descent,
            symbolic: false,
        }
    }

    const fn symbolic(name: &'static str, avg: f64, ascent: f64, descent: f64) -> Self {
        Self {
            name,
            avg_width_ratio: avg,
            ascent_ratio: ascent,
            descent_ratio: descent,
            symbolic: true,
        }
    }
}

/// Used for any family not listed in [`FAMILIES`]
pub const DEFAULT_FAMILY: FamilyMetrics = FamilyMetrics::text("sans-serif", 0.55, 0.8, 0.2);

pub const FAMILIES: &[FamilyMetrics] = &[
    FamilyMetrics::symbolic("Bravura", 0.5, 0.8, 0.4),
    FamilyMetrics::symbolic("Petaluma", 0.52, 0.8, 0.4),
    FamilyMetrics::symbolic("Gonville", 0.5, 0.8, 0.4),
    FamilyMetrics::symbolic("Leland", 0.5, 0.8, 0.4),
    FamilyMetrics::symbolic("Gootville", 0.5, 0.8, 0.4),
    FamilyMetrics::symbolic("Custom", 0.5, 0.8, 0.4),
    FamilyMetrics::text("Academico", 0.5, 0.85, 0.25),
    FamilyMetrics::text("PetalumaScript", 0.52, 0.85, 0.3),
    FamilyMetrics::text("Roboto Slab", 0.55, 0.92, 0.24),
    FamilyMetrics::text("Arial", 0.52, 0.905, 0.212),
    FamilyMetrics::text("Helvetica", 0.52, 0.905, 0.212),
    FamilyMetrics::text("Times New Roman", 0.46, 0.891, 0.216),
    FamilyMetrics::text("Times", 0.46, 0.891, 0.216),
    FamilyMetrics::text("serif", 0.46, 0.891, 0.216),
    FamilyMetrics::text("Courier New", 0.6, 0.833, 0.3),
    FamilyMetrics::text("monospace", 0.6, 0.833, 0.3),
    DEFAULT_FAMILY,
];

/// Find the metrics for a CSS family list.
///
/// Only the first comma-separated entry counts; it is matched without quotes
/// and without regard to ASCII case.
pub fn lookup_family(family: &str) -> &'static FamilyMetrics {
    let first = family
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'');

    FAMILIES
        .iter()
        .find(|metrics| metrics.name.eq_ignore_ascii_case(first))
        .unwrap_or(&DEFAULT_FAMILY)
}
