//! Embedded fallback word list
//!
//! Used whenever the random-word service is unreachable or hands back
//! something unplayable. Every entry is lowercase and at least five letters,
//! so selection from this list can never fail validation.

/// Words to fall back on when the random-word source fails
pub const FALLBACK: &[&str] = &[
    "default", "garden", "planet", "window", "bridge", "candle", "forest",
    "silver", "orange", "basket", "copper", "meadow", "lantern", "harbor",
    "pepper", "marble", "timber", "velvet", "shadow", "hollow", "cobble",
    "saddle", "thistle", "barrel", "ripple", "ember", "quartz", "willow",
    "anchor", "falcon", "tunnel", "petal", "crater", "spiral", "summit",
    "breeze", "cinder", "groove", "hazel", "ivory",
];

/// Number of embedded fallback words
pub const FALLBACK_COUNT: usize = FALLBACK.len();
