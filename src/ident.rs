//! Content-addressed identifiers for generated markup.
//!
//! Ids are derived by hashing the semantic inputs, never from a shared
//! counter, so concurrent block instances cannot collide or drift between
//! renders: identical inputs always yield the identical id.

use crate::hash::{Fnv1a64, base36};
use crate::validate::{MAX_IDENTIFIER_LEN, validate_identifier};

/// Separator ornament families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Squiggle,
    Zigzag,
    Lightning,
    Sparkle,
}

impl PatternKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Squiggle => "squiggle",
            Self::Zigzag => "zigzag",
            Self::Lightning => "lightning",
            Self::Sparkle => "sparkle",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn suffix(hasher: Fnv1a64) -> String {
    base36(hasher.finish()).chars().take(6).collect()
}

/// Derive the animation id for a block instance.
///
/// Stable for identical `(pattern, client_id, stroke_width, amplitude)`.
pub fn animation_id(pattern: PatternKind, client_id: &str, stroke_width: f64, amplitude: f64) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(pattern.as_str().as_bytes());
    h.write_u64(stroke_width.to_bits());
    h.write_u64(amplitude.to_bits());
    h.write_bytes(client_id.as_bytes());
    checked_id(format!("{}-animation-{}", pattern.as_str(), suffix(h)))
}

/// Derive the gradient id for a block instance.
///
/// An empty gradient gets the shared `default` suffix; otherwise the suffix
/// hashes the gradient content and the client id.
pub fn gradient_id(pattern: PatternKind, gradient: &str, client_id: &str) -> String {
    let suffix = if gradient.trim().is_empty() {
        "default".to_owned()
    } else {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(pattern.as_str().as_bytes());
        h.write_bytes(gradient.as_bytes());
        h.write_bytes(client_id.as_bytes());
        suffix(h)
    };
    checked_id(format!("{}-gradient-{}", pattern.as_str(), suffix))
}

// Derived ids are built from a fixed prefix and base-36 digits so this check
// cannot fail today; the fallback re-derives a same-shape id from the raw
// bytes rather than trusting the input.
fn checked_id(id: String) -> String {
    let checked = validate_identifier(&id, MAX_IDENTIFIER_LEN);
    if !checked.is_empty() {
        return checked;
    }
    let mut h = Fnv1a64::new_default();
    h.write_bytes(id.as_bytes());
    format!("waveline-{}", suffix(h))
}
