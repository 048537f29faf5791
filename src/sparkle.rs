//! Deterministic sparkle fields: 4-pointed stars spaced along a band.
//!
//! Twinkle timing is a low-discrepancy arithmetic sequence keyed on the
//! sparkle position and index, not a system RNG, so repeated renders (and
//! independent server/client renders) agree byte for byte.

use std::fmt::Write as _;

use kurbo::Point;

use crate::validate::clamp_number;

/// Fixed horizontal distance between sparkle centers, in path units.
pub const SPACING: f64 = 50.0;

/// Design-space height of the sparkle band.
const DESIGN_HEIGHT: f64 = 100.0;

/// Frequency of the decorative sine drift applied to sparkle Y positions.
const DRIFT_FREQUENCY: f64 = 0.008;

/// Inner star radius as a fraction of the outer radius.
const INNER_RATIO: f64 = 0.3;

/// One star polygon plus its twinkle timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Sparkle {
    /// Star outline: 4 outer and 4 inner points, alternating.
    pub points: [Point; 8],
    /// Animation delay in milliseconds.
    pub delay_ms: f64,
    /// Animation duration in milliseconds.
    pub duration_ms: f64,
    /// Whether the element should carry the shimmer animation.
    pub animated: bool,
}

impl Sparkle {
    /// SVG `polygon` `points` attribute for this star.
    pub fn points_attr(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", p.x, p.y);
        }
        out
    }
}

/// Generate the sparkle field for a band of `container_width` units.
///
/// Centers keep at least `size` units from either horizontal edge so no
/// sparkle is clipped; a container too narrow for even one sparkle yields
/// the empty vec, which is a valid output rather than an error. The element
/// count is `floor((container_width - 2*size) / SPACING) + 1` whenever it is
/// non-zero.
pub fn sparkle_field(
    size: f64,
    vertical_amplitude: f64,
    container_width: f64,
    animated: bool,
    randomness_percent: f64,
) -> Vec<Sparkle> {
    let size = clamp_number(size, 8.0, 35.0, 18.0);
    let vertical_amplitude = clamp_number(vertical_amplitude, 0.0, 30.0, 15.0);
    let randomness = clamp_number(randomness_percent, 0.0, 200.0, 100.0);
    let width = if container_width.is_finite() {
        container_width
    } else {
        0.0
    };

    let effective_start = size;
    let effective_end = width - size;
    if effective_end <= effective_start {
        return Vec::new();
    }

    let mid_y = DESIGN_HEIGHT / 2.0;
    let timing_scale = randomness / 100.0;
    let mut out = Vec::new();
    let mut index: u64 = 0;
    let mut x = effective_start;

    while x <= effective_end {
        let y = mid_y + (x * DRIFT_FREQUENCY).sin() * vertical_amplitude;

        let mut points = [Point::ZERO; 8];
        for (i, point) in points.iter_mut().enumerate() {
            let angle = std::f64::consts::TAU * i as f64 / 8.0;
            let radius = if i % 2 == 0 { size } else { size * INNER_RATIO };
            *point = Point::new(x + angle.cos() * radius, y + angle.sin() * radius);
        }

        let delay_ms = ((x + index as f64 * 17.0) % 1600.0) * timing_scale;
        let duration_ms = 1200.0 + ((index * 67) % 800) as f64 * timing_scale;

        out.push(Sparkle {
            points,
            delay_ms,
            duration_ms,
            animated,
        });

        index += 1;
        x += SPACING;
    }

    out
}
