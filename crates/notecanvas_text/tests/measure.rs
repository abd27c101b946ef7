use notecanvas_text::{
    FontInfo, FontSize, FontSpec, FontStyle, FontUnit, FontWeight, GlyphEstimator, TextMeasurer,
};

const SAMPLES: &[(&str, &str)] = &[
    ("Arial", "Allegro con brio"),
    ("Times New Roman", "p  mf  ff"),
    ("Bravura", "\u{E050}\u{E0A4}\u{E262}\u{E0A3}\u{E4E5}\u{E001}x"),
    ("Petaluma", "\u{E062}\u{E0A2}"),
    ("Unknown Family", "3/4"),
];

#[test]
fn width_is_non_decreasing_in_length() {
    for (family, text) in SAMPLES {
        let font = FontInfo::new(*family, FontSize::pt(12.0));
        let mut previous = 0.0;
        for (end, _) in text.char_indices().skip(1).chain([(text.len(), ' ')]) {
            let width = GlyphEstimator.measure(&text[..end], &font).width;
            assert!(
                width >= previous,
                "family={family} prefix={:?} width={width} previous={previous}",
                &text[..end]
            );
            previous = width;
        }
    }
}

#[test]
fn width_scales_with_font_size() {
    for (family, text) in SAMPLES {
        let small = GlyphEstimator.measure(text, &FontInfo::new(*family, FontSize::pt(10.0)));
        for k in [0.5, 2.0, 3.7] {
            let large =
                GlyphEstimator.measure(text, &FontInfo::new(*family, FontSize::pt(10.0 * k)));
            let expected = small.width * k;
            assert!(
                (large.width - expected).abs() <= expected * 1e-9,
                "family={family} k={k} width={} expected={expected}",
                large.width
            );
            assert!((large.ascent - small.ascent * k).abs() < 1e-9);
        }
    }
}

#[test]
fn units_normalize_to_pixels() {
    let text = "measure";
    let by_pt = GlyphEstimator.measure(text, &FontInfo::new("Arial", FontSize::pt(12.0)));
    let by_px = GlyphEstimator.measure(text, &FontInfo::new("Arial", FontSize::px(16.0)));
    let by_em = GlyphEstimator.measure(
        text,
        &FontInfo::new("Arial", FontSize::new(1.0, FontUnit::Em)),
    );

    assert!((by_pt.width - by_px.width).abs() < 1e-9);
    assert!((by_em.width - by_px.width).abs() < 1e-9);
}

#[test]
fn ascent_descent_ignore_the_measurement_branch() {
    let font = FontInfo::new("Bravura", FontSize::px(20.0));
    let glyphs = GlyphEstimator.measure("\u{E050}", &font);
    let letters = GlyphEstimator.measure("abc", &font);
    assert_eq!(glyphs.ascent, letters.ascent);
    assert_eq!(glyphs.descent, letters.descent);
}

#[derive(serde::Deserialize)]
struct Fonts {
    title: FontSpec,
    music: FontSpec,
}

#[test]
fn font_specs_load_from_toml() {
    let fonts: Fonts = toml::from_str(
        r#"
        title = "italic bold 14pt Times New Roman"

        [music]
        family = "Bravura"
        size = 30
        weight = "700"
        "#,
    )
    .unwrap();

    let base = FontInfo::default();
    let title = fonts.title.normalize(&base).unwrap();
    assert_eq!(title.family, "Times New Roman");
    assert_eq!(title.style, FontStyle::Italic);
    assert_eq!(title.weight, FontWeight::Bold);

    let music = fonts.music.normalize(&base).unwrap();
    assert_eq!(music.family, "Bravura");
    assert_eq!(music.size, FontSize::pt(30.0));
    assert_eq!(music.weight, FontWeight::Numeric(700));
    assert_eq!(music.style, FontStyle::Normal);
}
