//! End-to-end: stored JSON attributes through sanitization into SVG markup.

use waveline::{PatternKind, SeparatorAttrs, sparkle_svg, wave_svg};

#[test]
fn wave_pipeline_resolves_preset_gradient_into_markup() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let s = include_str!("data/separator_attrs.json");
    let attrs = SeparatorAttrs::from_json(s).unwrap();
    let params = attrs.sanitize(PatternKind::Zigzag);
    let svg = wave_svg(&params);

    // The var() reference resolves to the `midnight` preset stops.
    assert!(svg.contains("stop-color=\"rgb(2,3,129)\""));
    assert!(svg.contains("stop-color=\"rgb(40,116,252)\""));
    assert!(svg.contains(&format!("url(#{})", params.gradient_id)));
    assert!(svg.contains("animation:wave-flow-reverse 1.5s linear infinite"));

    // Long-path mode: starts two wavelengths left of the viewport.
    assert!(svg.contains("d=\"M-80"));
}

#[test]
fn sparkle_pipeline_counts_match_the_spacing_invariant() {
    let attrs = SeparatorAttrs::from_json(
        r#"{"sparkleSize": 18, "sparkleVerticalAmplitude": 15, "sparkleRandomness": 100}"#,
    )
    .unwrap();
    let params = attrs.sanitize(PatternKind::Sparkle);

    // 1100-wide viewBox: floor((1100 - 36) / 50) + 1 = 22 sparkles.
    let svg = sparkle_svg(&params, 1000.0);
    assert_eq!(svg.matches("<polygon").count(), 22);
}

#[test]
fn rendering_is_byte_identical_across_calls() {
    let s = include_str!("data/separator_attrs.json");
    let attrs = SeparatorAttrs::from_json(s).unwrap();
    let params = attrs.sanitize(PatternKind::Squiggle);

    assert_eq!(wave_svg(&params), wave_svg(&params));
    assert_eq!(sparkle_svg(&params, 640.0), sparkle_svg(&params, 640.0));
}
