//! Block-attribute boundary: the raw camelCase record stored by the host
//! platform, and its sanitized form consumed by the generators.

use serde::{Deserialize, Serialize};

use crate::error::{WavelineError, WavelineResult};
use crate::ident::{self, PatternKind};
use crate::validate::{self, MAX_IDENTIFIER_LEN};

/// Wavelengths emitted in long-path mode; 150 * 40 = 6000 units covers
/// ultra-wide (4K+) viewports without a visible seam.
pub const DEFAULT_REPETITIONS: usize = 150;

/// Raw stored attributes as they arrive from the host. Every field is
/// optional and untrusted; unknown keys are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeparatorAttrs {
    pub stroke_width: Option<f64>,
    /// Speed slider level 1-10, not a duration.
    pub animation_speed: Option<f64>,
    pub squiggle_amplitude: Option<f64>,
    pub pointiness: Option<f64>,
    pub angle: Option<f64>,
    pub is_animated: Option<bool>,
    pub is_reversed: Option<bool>,
    pub squiggle_height: Option<String>,
    pub gradient: Option<String>,
    pub animation_id: Option<String>,
    pub gradient_id: Option<String>,
    pub client_id: Option<String>,
    pub sparkle_size: Option<f64>,
    pub sparkle_vertical_amplitude: Option<f64>,
    pub sparkle_randomness: Option<f64>,
}

/// Fully sanitized per-render parameters. Construction goes through
/// [`SeparatorAttrs::sanitize`]; every numeric field is in range and every
/// identifier has passed validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeparatorParams {
    pub pattern: PatternKind,
    pub amplitude: f64,
    pub pointiness: f64,
    pub angle: f64,
    pub stroke_width: f64,
    pub duration_s: f64,
    pub animated: bool,
    pub reversed: bool,
    pub height: &'static str,
    pub height_px: f64,
    pub gradient: Option<String>,
    pub animation_id: String,
    pub gradient_id: String,
    pub sparkle_size: f64,
    pub sparkle_vertical_amplitude: f64,
    pub sparkle_randomness: f64,
}

/// Convert a speed slider level (1-10, default 6) to an animation duration
/// in seconds: higher level means faster, `(11 - level) * 0.5`.
pub fn speed_to_duration_s(level: f64) -> f64 {
    let level = validate::clamp_number(level, 1.0, 10.0, 6.0);
    (11.0 - level) * 0.5
}

fn height_px(height: &str) -> f64 {
    height.trim_end_matches("px").parse().unwrap_or(100.0)
}

impl SeparatorAttrs {
    /// Deserialize from the host's JSON attribute map. The only fallible
    /// surface in the crate; everything downstream is total.
    pub fn from_json(json: &str) -> WavelineResult<Self> {
        serde_json::from_str(json).map_err(|e| WavelineError::serde(e.to_string()))
    }

    /// Sanitize into render parameters for the given pattern.
    ///
    /// Style-dependent defaults: zig-zag and lightning start at amplitude 15
    /// and pointiness 100, lightning tilts to 40 degrees. Stored ids that
    /// fail validation are re-derived rather than trusted.
    pub fn sanitize(&self, pattern: PatternKind) -> SeparatorParams {
        let sharp = matches!(pattern, PatternKind::Zigzag | PatternKind::Lightning);
        let default_amplitude = if sharp { 15.0 } else { 10.0 };
        let default_pointiness = if sharp { 100.0 } else { 0.0 };
        let default_angle = if pattern == PatternKind::Lightning {
            40.0
        } else {
            0.0
        };

        let amplitude = validate::clamp_number(
            self.squiggle_amplitude.unwrap_or(default_amplitude),
            5.0,
            25.0,
            default_amplitude,
        );
        let pointiness = validate::clamp_number(
            self.pointiness.unwrap_or(default_pointiness),
            0.0,
            100.0,
            default_pointiness,
        );
        let angle = validate::clamp_number(
            self.angle.unwrap_or(default_angle),
            -60.0,
            60.0,
            default_angle,
        );
        let stroke_width =
            validate::clamp_number(self.stroke_width.unwrap_or(1.0), 1.0, 8.0, 1.0);
        let duration_s = speed_to_duration_s(self.animation_speed.unwrap_or(6.0));

        let height = validate::sanitize_height(self.squiggle_height.as_deref().unwrap_or("100px"));

        let gradient = self
            .gradient
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_owned);
        let client_id = self.client_id.as_deref().unwrap_or("");

        let animation_id = self
            .animation_id
            .as_deref()
            .map(|id| validate::validate_identifier(id, MAX_IDENTIFIER_LEN))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| ident::animation_id(pattern, client_id, stroke_width, amplitude));
        let gradient_id = self
            .gradient_id
            .as_deref()
            .map(|id| validate::validate_identifier(id, MAX_IDENTIFIER_LEN))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| {
                ident::gradient_id(pattern, gradient.as_deref().unwrap_or(""), client_id)
            });

        SeparatorParams {
            pattern,
            amplitude,
            pointiness,
            angle,
            stroke_width,
            duration_s,
            animated: self.is_animated.unwrap_or(true),
            reversed: self.is_reversed.unwrap_or(false),
            height,
            height_px: height_px(height),
            gradient,
            animation_id,
            gradient_id,
            sparkle_size: validate::clamp_number(self.sparkle_size.unwrap_or(18.0), 8.0, 35.0, 18.0),
            sparkle_vertical_amplitude: validate::clamp_number(
                self.sparkle_vertical_amplitude.unwrap_or(15.0),
                0.0,
                30.0,
                15.0,
            ),
            sparkle_randomness: validate::clamp_number(
                self.sparkle_randomness.unwrap_or(100.0),
                0.0,
                200.0,
                100.0,
            ),
        }
    }
}
