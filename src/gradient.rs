//! Gradient normalization: design-system presets, CSS variable references and
//! literal `linear-gradient(...)` strings all reduce to an ordered stop list.
//!
//! Parsing never fails upward. Unresolvable or malformed input degrades to a
//! fixed two-stop fallback so the caller always has something renderable.

use serde::{Deserialize, Serialize};

/// Known design-system preset slugs and their canonical CSS gradients.
/// `cool-to-warm-spectrum` ships pre-collapsed to 3 stops.
pub const PRESET_GRADIENTS: [(&str, &str); 12] = [
    (
        "vivid-cyan-blue-to-vivid-purple",
        "linear-gradient(135deg,rgba(6,147,227,1) 0%,rgb(155,81,224) 100%)",
    ),
    (
        "light-green-cyan-to-vivid-green-cyan",
        "linear-gradient(135deg,rgb(122,220,180) 0%,rgb(0,208,130) 100%)",
    ),
    (
        "luminous-vivid-amber-to-luminous-vivid-orange",
        "linear-gradient(135deg,rgba(252,185,0,1) 0%,rgba(255,105,0,1) 100%)",
    ),
    (
        "luminous-vivid-orange-to-vivid-red",
        "linear-gradient(135deg,rgba(255,105,0,1) 0%,rgb(207,46,46) 100%)",
    ),
    (
        "very-light-gray-to-cyan-bluish-gray",
        "linear-gradient(135deg,rgb(238,238,238) 0%,rgb(169,184,195) 100%)",
    ),
    (
        "cool-to-warm-spectrum",
        "linear-gradient(135deg,rgb(74,234,220) 0%,rgb(238,44,130) 50%,rgb(254,248,76) 100%)",
    ),
    (
        "blush-light-purple",
        "linear-gradient(135deg,rgb(255,206,236) 0%,rgb(152,150,240) 100%)",
    ),
    (
        "blush-bordeaux",
        "linear-gradient(135deg,rgb(254,205,165) 0%,rgb(254,45,45) 50%,rgb(107,0,62) 100%)",
    ),
    (
        "luminous-dusk",
        "linear-gradient(135deg,rgb(255,203,112) 0%,rgb(199,81,192) 50%,rgb(65,88,208) 100%)",
    ),
    (
        "pale-ocean",
        "linear-gradient(135deg,rgb(255,245,203) 0%,rgb(182,227,212) 50%,rgb(51,167,181) 100%)",
    ),
    (
        "electric-grass",
        "linear-gradient(135deg,rgb(202,248,128) 0%,rgb(113,206,126) 100%)",
    ),
    (
        "midnight",
        "linear-gradient(135deg,rgb(2,3,129) 0%,rgb(40,116,252) 100%)",
    ),
];

const VAR_PREFIX: &str = "var(--wp--preset--gradient--";

/// One parsed gradient stop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Color token exactly as matched (`#hex`, `rgb[a](..)` or `hsl[a](..)`).
    pub color: String,
    /// Offset as a percentage string, e.g. `"50%"`.
    pub offset: String,
}

/// Ordered stop list, 2 to 3 stops after parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub stops: Vec<GradientStop>,
}

impl GradientSpec {
    /// The fixed purple fallback used whenever parsing degrades.
    pub fn fallback() -> Self {
        Self {
            stops: vec![
                GradientStop {
                    color: "#667eea".to_owned(),
                    offset: "0%".to_owned(),
                },
                GradientStop {
                    color: "#764ba2".to_owned(),
                    offset: "100%".to_owned(),
                },
            ],
        }
    }
}

/// Look up a preset gradient by slug.
pub fn preset_gradient(slug: &str) -> Option<&'static str> {
    PRESET_GRADIENTS
        .iter()
        .find(|(name, _)| *name == slug)
        .map(|(_, css)| *css)
}

/// Normalize a gradient reference to a concrete CSS gradient string.
///
/// Resolution order: bare preset slug via the static table, then
/// `var(--wp--preset--gradient--<slug>)` references by extracting the slug
/// (live computed-style resolution belongs to the host), then literal
/// `linear-gradient(...)` strings as-is. Anything else is `None`.
pub fn resolve_gradient_to_css(input: &str) -> Option<String> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }

    let looks_like_slug = !value.contains("gradient(") && !value.starts_with("var(");
    if looks_like_slug {
        return preset_gradient(value).map(str::to_owned);
    }

    if let Some(rest) = value.strip_prefix(VAR_PREFIX) {
        let slug = rest.split(')').next().unwrap_or(rest);
        return preset_gradient(slug).map(str::to_owned);
    }

    if value.starts_with("linear-gradient(") {
        return Some(value.to_owned());
    }

    None
}

/// Parse a gradient reference into a normalized stop list.
///
/// Accepts anything [`resolve_gradient_to_css`] accepts plus raw gradient
/// strings; on any failure returns [`GradientSpec::fallback`] instead of an
/// error. Gradients with more than 3 stops collapse to first, middle
/// (renormalized to 50%) and last.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_gradient(input: &str) -> GradientSpec {
    let resolved = resolve_gradient_to_css(input).unwrap_or_else(|| input.trim().to_owned());
    match parse_linear_gradient(&resolved) {
        Some(spec) => spec,
        None => {
            tracing::debug!(input, "unparseable gradient, using fallback stops");
            GradientSpec::fallback()
        }
    }
}

fn parse_linear_gradient(value: &str) -> Option<GradientSpec> {
    let content = value
        .strip_prefix("linear-gradient(")
        .and_then(|rest| rest.strip_suffix(')'))?;

    let mut stops = Vec::new();
    for part in split_top_level(content) {
        // Direction tokens carry no stop.
        if part.contains("deg") || part.contains("to ") {
            continue;
        }
        let Some(color) = extract_color(part) else {
            continue;
        };
        let offset = extract_percent(part).unwrap_or_else(|| {
            if stops.is_empty() {
                "0%".to_owned()
            } else {
                "100%".to_owned()
            }
        });
        stops.push(GradientStop { color, offset });
    }

    if stops.len() < 2 {
        return None;
    }

    if stops.len() > 3 {
        let first = stops[0].clone();
        let mut middle = stops[stops.len() / 2].clone();
        middle.offset = "50%".to_owned();
        let last = stops[stops.len() - 1].clone();
        tracing::debug!(from = stops.len(), "collapsing gradient to 3 stops");
        stops = vec![first, middle, last];
    }

    Some(GradientSpec { stops })
}

/// Split at commas outside any parentheses, so `rgba(1,2,3,0.5)` survives.
fn split_top_level(content: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: u32 = 0;
    let mut start = 0;
    for (i, c) in content.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let part = content[start..i].trim();
                if !part.is_empty() {
                    parts.push(part);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    let tail = content[start..].trim();
    if !tail.is_empty() {
        parts.push(tail);
    }
    parts
}

/// Extract one color token: `rgb[a](..)`, `hsl[a](..)` or 3-8 digit hex.
/// Function contents are restricted to a safe charset since the token is
/// later interpolated into markup attributes.
fn extract_color(part: &str) -> Option<String> {
    for func in ["rgba", "rgb", "hsla", "hsl"] {
        if let Some(i) = part.find(func) {
            let open = i + func.len();
            if part[open..].starts_with('(') {
                if let Some(close) = part[open..].find(')') {
                    let token = &part[i..open + close + 1];
                    let inner = &part[open + 1..open + close];
                    if inner.chars().all(is_safe_color_char) {
                        return Some(token.to_owned());
                    }
                    return None;
                }
            }
        }
    }

    if let Some(i) = part.find('#') {
        let hex: String = part[i + 1..]
            .chars()
            .take_while(|c| c.is_ascii_hexdigit())
            .take(8)
            .collect();
        if (3..=8).contains(&hex.len()) {
            return Some(format!("#{hex}"));
        }
    }

    None
}

fn is_safe_color_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ',' | '.' | '%' | ' ' | '-' | '+')
}

/// First integer percentage in the part, e.g. `"50%"`.
fn extract_percent(part: &str) -> Option<String> {
    let bytes = part.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'%' {
                return Some(part[start..=i].to_owned());
            }
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(color: &str, offset: &str) -> GradientStop {
        GradientStop {
            color: color.to_owned(),
            offset: offset.to_owned(),
        }
    }

    #[test]
    fn three_stop_rgb_gradient_parses_verbatim() {
        let spec =
            parse_gradient("linear-gradient(135deg,rgb(1,2,3) 0%,rgb(4,5,6) 50%,rgb(7,8,9) 100%)");
        assert_eq!(
            spec.stops,
            vec![
                stop("rgb(1,2,3)", "0%"),
                stop("rgb(4,5,6)", "50%"),
                stop("rgb(7,8,9)", "100%"),
            ]
        );
    }

    #[test]
    fn six_stops_collapse_to_three_with_middle_at_50() {
        let spec = parse_gradient(
            "linear-gradient(135deg,rgb(74,234,220) 0%,rgb(151,120,209) 20%,rgb(207,42,186) 40%,rgb(238,44,130) 60%,rgb(251,105,98) 80%,rgb(254,248,76) 100%)",
        );
        assert_eq!(
            spec.stops,
            vec![
                stop("rgb(74,234,220)", "0%"),
                stop("rgb(238,44,130)", "50%"),
                stop("rgb(254,248,76)", "100%"),
            ]
        );
    }

    #[test]
    fn missing_offsets_default_to_endpoints() {
        let spec = parse_gradient("linear-gradient(to right, #667eea, #764ba2)");
        assert_eq!(spec.stops, vec![stop("#667eea", "0%"), stop("#764ba2", "100%")]);
    }

    #[test]
    fn rgba_alpha_commas_do_not_split_stops() {
        let spec = parse_gradient("linear-gradient(90deg,rgba(6,147,227,0.5) 0%,rgba(155,81,224,1) 100%)");
        assert_eq!(
            spec.stops,
            vec![
                stop("rgba(6,147,227,0.5)", "0%"),
                stop("rgba(155,81,224,1)", "100%"),
            ]
        );
    }

    #[test]
    fn unparseable_input_degrades_to_fallback() {
        assert_eq!(parse_gradient("not-a-gradient"), GradientSpec::fallback());
        assert_eq!(parse_gradient(""), GradientSpec::fallback());
        assert_eq!(
            parse_gradient("linear-gradient(135deg,#fff 0%)"),
            GradientSpec::fallback(),
            "single stop is not a gradient"
        );
        assert_eq!(
            parse_gradient("radial-gradient(circle,#fff,#000)"),
            GradientSpec::fallback()
        );
    }

    #[test]
    fn preset_slug_and_var_reference_resolve_identically() {
        let by_slug = parse_gradient("cool-to-warm-spectrum");
        let by_var = parse_gradient("var(--wp--preset--gradient--cool-to-warm-spectrum)");
        assert_eq!(by_slug, by_var);
        assert_eq!(by_slug.stops.len(), 3);
        assert_eq!(by_slug.stops[1], stop("rgb(238,44,130)", "50%"));
    }

    #[test]
    fn unknown_slug_resolves_to_none_but_parses_to_fallback() {
        assert_eq!(resolve_gradient_to_css("no-such-preset"), None);
        assert_eq!(parse_gradient("no-such-preset"), GradientSpec::fallback());
    }

    #[test]
    fn literal_gradient_resolves_as_is() {
        let css = "linear-gradient(135deg,#111 0%,#222 100%)";
        assert_eq!(resolve_gradient_to_css(css).as_deref(), Some(css));
    }

    #[test]
    fn hostile_color_tokens_are_rejected() {
        // A quote inside a function body could break out of an attribute.
        let spec = parse_gradient("linear-gradient(90deg,rgb(\"x\") 0%,rgb(1,2,3) 100%)");
        assert_eq!(spec, GradientSpec::fallback());
    }

    #[test]
    fn parsing_is_idempotent() {
        let input = "linear-gradient(135deg,rgb(2,3,129) 0%,rgb(40,116,252) 100%)";
        assert_eq!(parse_gradient(input), parse_gradient(input));
    }

    #[test]
    fn every_preset_parses_to_at_most_three_stops() {
        for (slug, _) in PRESET_GRADIENTS {
            let spec = parse_gradient(slug);
            assert!((2..=3).contains(&spec.stops.len()), "preset {slug}");
            assert_ne!(spec, GradientSpec::fallback(), "preset {slug}");
        }
    }
}
