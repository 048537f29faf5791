//! Waveline is a deterministic procedural-geometry engine for animated SVG
//! separator ornaments.
//!
//! Two independent generators share one input-validation discipline:
//!
//! - [`wave`]: a single parameter family of periodic paths spanning smooth
//!   squiggles to sharp zig-zags, with tilted peaks and a seamless long-path
//!   mode for scroll animation
//! - [`sparkle`]: deterministic 4-pointed star fields with sine drift and
//!   arithmetic twinkle timing
//!
//! plus the [`gradient`] resolver that normalizes preset slugs, CSS variable
//! references and literal gradients into a capped stop list, and the
//! [`config`] boundary that sanitizes stored block attributes. Every
//! generator is a total function: malformed input is clamped or defaulted,
//! never rejected, so the output is always renderable.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod gradient;
pub mod ident;
pub mod markup;
pub mod sparkle;
pub mod validate;
pub mod wave;

mod hash;

pub use config::{DEFAULT_REPETITIONS, SeparatorAttrs, SeparatorParams, speed_to_duration_s};
pub use error::{WavelineError, WavelineResult};
pub use gradient::{
    GradientSpec, GradientStop, PRESET_GRADIENTS, parse_gradient, resolve_gradient_to_css,
};
pub use ident::{PatternKind, animation_id, gradient_id};
pub use markup::{animation_css, sparkle_svg, wave_svg};
pub use sparkle::{SPACING, Sparkle, sparkle_field};
pub use validate::{MAX_IDENTIFIER_LEN, clamp_number, sanitize_height, validate_identifier};
pub use wave::{LongWavePath, WAVELENGTH, long_wave_path, wave_path};
