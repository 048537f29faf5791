//! Procedural wave paths for separator strokes.
//!
//! A single parameter family spans smooth sinusoid-like squiggles
//! (pointiness 0, cubic Beziers), sharp zig-zags (pointiness 100, line
//! segments) and everything in between (quadratic Beziers with blended
//! control points). Peak tilt is a geometric rotation of the peak point,
//! not a shear of the whole curve.

use kurbo::BezPath;

use crate::validate::clamp_number;

/// Horizontal extent of one full peak-and-return cycle, in path units.
pub const WAVELENGTH: f64 = 40.0;

/// Design-space height of the short fixed-width path form.
const DESIGN_HEIGHT: f64 = 100.0;

/// Seamless long-form wave output.
///
/// The path starts two wavelengths before x=0 and runs four wavelengths past
/// `total_width`, so a viewport clipping `[0, total_width]` never exposes a
/// start or end artifact while the path scrolls.
#[derive(Clone, Debug, PartialEq)]
pub struct LongWavePath {
    /// The generated curve. Single subpath, starts and ends on the midline.
    pub path: BezPath,
    /// ViewBox height; equals the clamped container height.
    pub height: f64,
    /// [`WAVELENGTH`], exposed for viewBox math.
    pub wavelength: f64,
    /// `wavelength * repetitions`, the visible tiling span.
    pub total_width: f64,
}

impl LongWavePath {
    /// SVG `d` attribute for the generated path.
    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }
}

#[derive(Clone, Copy)]
struct PeakGeometry {
    x_offset: f64,
    amplitude: f64,
}

fn peak_geometry(amplitude: f64, angle_deg: f64) -> PeakGeometry {
    let angle_rad = angle_deg.to_radians();
    PeakGeometry {
        x_offset: amplitude * angle_rad.sin(),
        amplitude: amplitude * angle_rad.cos(),
    }
}

/// Generate the short fixed-width wave path (legacy form).
///
/// Covers `[-2*WAVELENGTH, path_width + 2*WAVELENGTH]` in a 100-unit-tall
/// design space with the midline at y=50. All inputs are clamped; there is
/// no failure state.
pub fn wave_path(amplitude: f64, path_width: f64, pointiness: f64, angle_deg: f64) -> BezPath {
    let amplitude = clamp_number(amplitude, 5.0, 25.0, 10.0);
    let pointiness = clamp_number(pointiness, 0.0, 100.0, 0.0);
    let angle_deg = clamp_number(angle_deg, -60.0, 60.0, 0.0);
    let width = if path_width.is_finite() && path_width > 0.0 {
        path_width
    } else {
        800.0
    };

    let mid_y = DESIGN_HEIGHT / 2.0;
    let geo = peak_geometry(amplitude, angle_deg);

    let mut d = BezPath::new();
    d.move_to((-WAVELENGTH * 2.0, mid_y));

    let mut up_peak = true;
    let mut x = -WAVELENGTH * 2.0;
    while x <= width + WAVELENGTH * 2.0 {
        let peak_x = x + WAVELENGTH / 2.0 + if up_peak { geo.x_offset } else { -geo.x_offset };
        let peak_y = if up_peak {
            mid_y - geo.amplitude
        } else {
            mid_y + geo.amplitude
        };
        let end_x = x + WAVELENGTH;

        if pointiness >= 100.0 {
            d.line_to((peak_x, peak_y));
            d.line_to((end_x, mid_y));
        } else if pointiness <= 0.0 {
            d.curve_to(
                (x + WAVELENGTH * 0.375, peak_y),
                (x + WAVELENGTH * 0.625, peak_y),
                (end_x, mid_y),
            );
        } else {
            // Higher tension pulls the control points toward the peak.
            let tension = pointiness / 100.0;
            let q1x = x + (peak_x - x) * (0.5 + tension * 0.4);
            let q1y = mid_y + (peak_y - mid_y) * (0.7 + tension * 0.3);
            let q2x = peak_x + (end_x - peak_x) * (0.5 - tension * 0.4);
            let q2y = mid_y + (peak_y - mid_y) * (0.7 + tension * 0.3);
            d.quad_to((q1x, q1y), (peak_x, peak_y));
            d.quad_to((q2x, q2y), (end_x, mid_y));
        }

        up_peak = !up_peak;
        x += WAVELENGTH;
    }

    d
}

/// Generate a long continuous wave for seamless scroll animation.
///
/// Emits `repetitions + 4` wavelengths starting at `-2*WAVELENGTH`; the
/// caller clips with a viewBox of `total_width` by `height` and shifts the
/// path by one cycle (2 wavelengths) per animation loop. `container_height`
/// moves the midline but never rescales amplitude, so the viewBox height
/// must equal the container height to avoid vertical stretch.
pub fn long_wave_path(
    amplitude: f64,
    pointiness: f64,
    angle_deg: f64,
    stroke_width: f64,
    repetitions: usize,
    container_height: f64,
) -> LongWavePath {
    let amplitude = clamp_number(amplitude, 5.0, 25.0, 10.0);
    let pointiness = clamp_number(pointiness, 0.0, 100.0, 0.0);
    let angle_deg = clamp_number(angle_deg, -60.0, 60.0, 0.0);
    // Clamped for contract parity; padding against stroke overflow is the
    // caller's viewBox concern.
    let _stroke_width = clamp_number(stroke_width, 1.0, 8.0, 1.0);
    let height = if container_height.is_finite() && container_height > 0.0 {
        container_height
    } else {
        DESIGN_HEIGHT
    };

    let mid_y = height / 2.0;
    let total_width = WAVELENGTH * repetitions as f64;
    let geo = peak_geometry(amplitude, angle_deg);

    let start_x = -WAVELENGTH * 2.0;
    let mut d = BezPath::new();
    d.move_to((start_x, mid_y));

    for i in 0..repetitions + 4 {
        let base_x = start_x + i as f64 * WAVELENGTH;
        let up_peak = i % 2 == 0;
        let peak_y = if up_peak {
            mid_y - geo.amplitude
        } else {
            mid_y + geo.amplitude
        };
        let end_x = base_x + WAVELENGTH;

        if pointiness >= 100.0 {
            let peak_x =
                base_x + WAVELENGTH / 2.0 + if up_peak { geo.x_offset } else { -geo.x_offset };
            d.line_to((peak_x, peak_y));
            d.line_to((end_x, mid_y));
        } else if pointiness <= 0.0 {
            d.curve_to(
                (base_x + WAVELENGTH * 0.375, peak_y),
                (base_x + WAVELENGTH * 0.625, peak_y),
                (end_x, mid_y),
            );
        } else {
            // Blend control x between the smooth 0.375/0.625 anchors and the
            // sharp 0.5 midpoint; the peak tilt scales with tension so low
            // pointiness stays visually symmetric.
            let tension = pointiness / 100.0;
            let tilt = geo.x_offset * tension;
            let peak_x = base_x + WAVELENGTH / 2.0 + if up_peak { tilt } else { -tilt };
            let q1x = base_x + WAVELENGTH * (0.375 + tension * 0.125);
            let q2x = base_x + WAVELENGTH * (0.625 - tension * 0.125);
            d.quad_to((q1x, peak_y), (peak_x, peak_y));
            d.quad_to((q2x, peak_y), (end_x, mid_y));
        }
    }

    LongWavePath {
        path: d,
        height,
        wavelength: WAVELENGTH,
        total_width,
    }
}
