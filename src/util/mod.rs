//! Shared utilities for the effect engine.

pub mod easing;

/// Round to a fixed number of decimal digits. Keyframe tables are
/// rounded so generated tracks are stable across platforms.
#[must_use]
pub fn round_to(val: f32, digits: u32) -> f32 {
    let scale = 10_f32.powi(digits as i32);
    (val * scale).round() / scale
}
