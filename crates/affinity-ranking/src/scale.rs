//! Position of a score on the Low-High alignment scale.

use affinity_core::constants::{SCALE_MAX, SCALE_MIN};

/// Map `score` onto `[0, 100]` relative to the ranking's lowest and highest
/// scores. When every score is equal the position is `100`.
pub fn scale_position(score: f64, lowest: f64, highest: f64) -> f64 {
    if !(highest > lowest) {
        return SCALE_MAX;
    }

    let span = highest - lowest;
    let fraction = if span.is_finite() {
        (score - lowest) / span
    } else {
        // The range overflows f64; halving every term keeps it finite.
        (score / 2.0 - lowest / 2.0) / (highest / 2.0 - lowest / 2.0)
    };

    if fraction.is_nan() {
        return SCALE_MAX;
    }
    (fraction * SCALE_MAX).clamp(SCALE_MIN, SCALE_MAX)
}
