//! SVG assembly for separator ornaments.
//!
//! Pure string building on top of the generators. Everything interpolated
//! here is either a validated identifier, a parsed color token or a number
//! formatted from `f64`, so the output can never carry raw caller strings.

use std::fmt::Write as _;

use crate::config::{DEFAULT_REPETITIONS, SeparatorParams};
use crate::gradient::parse_gradient;
use crate::sparkle::sparkle_field;
use crate::wave::long_wave_path;

/// Horizontal span of one gradient tile in path units (8 wavelengths);
/// `spreadMethod="repeat"` tiles it across the long path.
pub const GRADIENT_SPAN: f64 = 320.0;

/// Keyframes for the wave scroll and sparkle shimmer animations. The wave
/// shifts by exactly 80 units (2 wavelengths, one full cycle) per loop so
/// the tiling boundary is invisible.
pub fn animation_css() -> &'static str {
    "@keyframes wave-flow {\
     0% { transform: translateX(0); }\
     100% { transform: translateX(-80px); }\
     }\
     @keyframes wave-flow-reverse {\
     0% { transform: translateX(0); }\
     100% { transform: translateX(80px); }\
     }\
     @keyframes sparkle-shimmer {\
     0%, 100% { opacity: 0.2; transform: scale(0.8); }\
     50% { opacity: 1; transform: scale(1.1); }\
     }"
}

/// Render the long-path wave separator SVG for sanitized parameters.
pub fn wave_svg(params: &SeparatorParams) -> String {
    let wave = long_wave_path(
        params.amplitude,
        params.pointiness,
        params.angle,
        params.stroke_width,
        DEFAULT_REPETITIONS,
        params.height_px,
    );

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg viewBox=\"0 0 {} {}\" preserveAspectRatio=\"xMidYMid slice\" \
         role=\"img\" aria-label=\"Decorative wavy divider\">",
        wave.total_width, wave.height
    );

    let stroke = match &params.gradient {
        Some(raw) => {
            let spec = parse_gradient(raw);
            let _ = write!(
                svg,
                "<defs><linearGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" \
                 spreadMethod=\"repeat\" x1=\"0\" y1=\"0\" x2=\"{GRADIENT_SPAN}\" y2=\"0\">",
                params.gradient_id
            );
            for stop in &spec.stops {
                let _ = write!(
                    svg,
                    "<stop offset=\"{}\" stop-color=\"{}\"/>",
                    stop.offset, stop.color
                );
            }
            svg.push_str("</linearGradient></defs>");
            format!("url(#{})", params.gradient_id)
        }
        None => "currentColor".to_owned(),
    };

    let _ = write!(
        svg,
        "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\" \
         class=\"wave-path wave-path-{}\"",
        wave.to_svg(),
        stroke,
        params.stroke_width,
        params.animation_id
    );
    if params.animated {
        let name = if params.reversed {
            "wave-flow-reverse"
        } else {
            "wave-flow"
        };
        let _ = write!(
            svg,
            " style=\"animation:{name} {}s linear infinite\"",
            params.duration_s
        );
    }
    svg.push_str("/></svg>");
    svg
}

/// Render the sparkle separator SVG for a measured container width.
///
/// The viewBox is widened to at least 800 units (container width plus a
/// 100-unit margin when larger) so the field reaches past the visible edge.
pub fn sparkle_svg(params: &SeparatorParams, container_width: f64) -> String {
    let width = if container_width.is_finite() && container_width > 0.0 {
        container_width
    } else {
        0.0
    };
    let view_width = (width + 100.0).max(800.0);
    let field = sparkle_field(
        params.sparkle_size,
        params.sparkle_vertical_amplitude,
        view_width,
        params.animated,
        params.sparkle_randomness,
    );

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg viewBox=\"0 0 {view_width} 100\" preserveAspectRatio=\"xMidYMid slice\" \
         role=\"img\" aria-label=\"Decorative sparkle divider\">",
    );
    svg.push_str("<g class=\"sparkle-group\">");
    for sparkle in &field {
        let _ = write!(
            svg,
            "<polygon points=\"{}\" class=\"sparkle-element\"",
            sparkle.points_attr()
        );
        if sparkle.animated {
            let _ = write!(
                svg,
                " style=\"animation:sparkle-shimmer {}ms ease-in-out {}ms infinite\"",
                sparkle.duration_ms, sparkle.delay_ms
            );
        } else {
            svg.push_str(" style=\"opacity:0.8\"");
        }
        svg.push_str("/>");
    }
    svg.push_str("</g></svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeparatorAttrs;
    use crate::ident::PatternKind;

    fn params_with_gradient() -> SeparatorParams {
        SeparatorAttrs {
            gradient: Some("linear-gradient(135deg,rgb(2,3,129) 0%,rgb(40,116,252) 100%)".to_owned()),
            client_id: Some("c1".to_owned()),
            ..Default::default()
        }
        .sanitize(PatternKind::Squiggle)
    }

    #[test]
    fn wave_svg_embeds_gradient_defs_and_references_them() {
        let svg = wave_svg(&params_with_gradient());
        let params = params_with_gradient();
        assert!(svg.contains(&format!("<linearGradient id=\"{}\"", params.gradient_id)));
        assert!(svg.contains(&format!("url(#{})", params.gradient_id)));
        assert!(svg.contains("stop-color=\"rgb(2,3,129)\""));
        assert!(svg.contains("spreadMethod=\"repeat\""));
        assert!(svg.contains("viewBox=\"0 0 6000 100\""));
    }

    #[test]
    fn wave_svg_without_gradient_uses_current_color() {
        let params = SeparatorAttrs::default().sanitize(PatternKind::Zigzag);
        let svg = wave_svg(&params);
        assert!(svg.contains("stroke=\"currentColor\""));
        assert!(!svg.contains("<defs>"));
        assert!(svg.contains("animation:wave-flow 2.5s linear infinite"));
    }

    #[test]
    fn static_wave_has_no_inline_animation() {
        let attrs = SeparatorAttrs {
            is_animated: Some(false),
            ..Default::default()
        };
        let svg = wave_svg(&attrs.sanitize(PatternKind::Squiggle));
        assert!(!svg.contains("animation:"));
    }

    #[test]
    fn reversed_wave_uses_reverse_keyframes() {
        let attrs = SeparatorAttrs {
            is_reversed: Some(true),
            ..Default::default()
        };
        let svg = wave_svg(&attrs.sanitize(PatternKind::Squiggle));
        assert!(svg.contains("animation:wave-flow-reverse"));
    }

    #[test]
    fn sparkle_svg_emits_expected_polygon_count() {
        let params = SeparatorAttrs::default().sanitize(PatternKind::Sparkle);
        let svg = sparkle_svg(&params, 800.0);
        // viewBox widens to 900; floor((900 - 36) / 50) + 1 = 18.
        assert_eq!(svg.matches("<polygon").count(), 18);
        assert!(svg.contains("viewBox=\"0 0 900 100\""));
        assert!(svg.contains("sparkle-shimmer"));
    }

    #[test]
    fn sparkle_svg_for_tiny_container_still_renders_shell() {
        let params = SeparatorAttrs::default().sanitize(PatternKind::Sparkle);
        let svg = sparkle_svg(&params, 0.0);
        // Width clamps up to the 800 minimum, which still fits sparkles.
        assert!(svg.matches("<polygon").count() > 0);
    }

    #[test]
    fn markup_never_carries_unvalidated_ids() {
        let attrs = SeparatorAttrs {
            animation_id: Some("\"/><script>".to_owned()),
            gradient_id: Some("also bad".to_owned()),
            gradient: Some("linear-gradient(#111,#222)".to_owned()),
            ..Default::default()
        };
        let svg = wave_svg(&attrs.sanitize(PatternKind::Squiggle));
        assert!(!svg.contains("<script"));
        assert!(!svg.contains("also bad"));
    }

    #[test]
    fn keyframes_shift_by_one_full_cycle() {
        let css = animation_css();
        assert!(css.contains("translateX(-80px)"));
        assert!(css.contains("translateX(80px)"));
        assert!(css.contains("sparkle-shimmer"));
    }
}
